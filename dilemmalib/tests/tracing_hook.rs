use dilemmalib::{model::DuePayment, strategy::recursive::RecursiveStrategy};
use rust_decimal::Decimal;
use tracing::Level;

#[test]
fn search_runs_under_a_caller_supplied_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .finish();

    let candidates: Vec<DuePayment> = [3, 7]
        .iter()
        .map(|&a| DuePayment::new(Decimal::new(a, 0)))
        .collect();

    let solution = tracing::subscriber::with_default(subscriber, || {
        RecursiveStrategy::new().solve(Decimal::new(10, 0), &candidates)
    })
    .expect("search failed");

    assert_eq!(solution.map(|s| s.to_string()), Some("3 7".to_string()));
}
