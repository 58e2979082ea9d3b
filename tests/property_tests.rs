use pizza::{
    format_selection, greedy_pass, search, Emit, Fit, Pass, Problem, RandomOrder, SearchOptions,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn fit_strategy() -> impl Strategy<Value = Fit> {
    prop_oneof![Just(Fit::Inclusive), Just(Fit::Exclusive)]
}

fn pass_strategy() -> impl Strategy<Value = Pass> {
    prop_oneof![Just(Pass::Skip), Just(Pass::Stop)]
}

proptest! {
    #[test]
    fn best_never_exceeds_target(
        target in -2_000i64..10_000,
        candidates in prop::collection::vec(-500i64..2_000, 0..40),
        iterations in 0usize..20,
        fit in fit_strategy(),
        pass in pass_strategy(),
        seed in any::<u64>(),
    ) {
        let problem = Problem { target, candidates };
        let options = SearchOptions { iterations, fit, pass };
        let report = search(&problem, options, RandomOrder::new(StdRng::seed_from_u64(seed)));

        // Only an empty selection can sit over a negative target.
        prop_assert!(report.best.sum <= target || report.best.is_empty());
        if report.is_exact() {
            prop_assert_eq!(report.best.sum, target);
        }
        let total: i64 = report.best.values(&problem.candidates).iter().sum();
        prop_assert_eq!(total, report.best.sum);
        prop_assert!(report.iterations_run <= iterations);
        if fit == Fit::Exclusive && !report.best.is_empty() {
            prop_assert!(report.best.sum < target);
        }
    }

    #[test]
    fn count_line_matches_items(
        candidates in prop::collection::vec(-50i64..500, 0..30),
        target in 0i64..2_000,
        values in any::<bool>(),
    ) {
        let order: Vec<usize> = (0..candidates.len()).collect();
        let selection = greedy_pass(&candidates, &order, target, Fit::Inclusive, Pass::Skip);
        let emit = if values { Emit::Values } else { Emit::Indices };
        let text = format_selection(&selection, &candidates, emit);

        let mut lines = text.lines();
        let count: usize = lines.next().unwrap().parse().unwrap();
        let items = lines.next().unwrap_or("").split_whitespace().count();
        prop_assert_eq!(count, items);
        prop_assert_eq!(count, selection.len());
    }
}
