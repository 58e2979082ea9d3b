use honggfuzz::fuzz;
use pizza::parse_problem;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(text) = std::str::from_utf8(data) {
                let _ = parse_problem(text);
            }
        });
    }
}
