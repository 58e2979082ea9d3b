use honggfuzz::fuzz;
use pizza::{greedy_pass, Fit, Pass};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if data.len() < 2 {
                return;
            }
            let target = i64::from(data[0]) * 16;
            let candidates: Vec<i64> = data[1..].iter().map(|&b| i64::from(b as i8)).collect();
            let order: Vec<usize> = (0..candidates.len()).rev().collect();
            for fit in [Fit::Inclusive, Fit::Exclusive] {
                let sel = greedy_pass(&candidates, &order, target, fit, Pass::Skip);
                assert!(sel.sum <= target);
                assert!(sel.indices.windows(2).all(|w| w[0] < w[1]));
            }
        });
    }
}
