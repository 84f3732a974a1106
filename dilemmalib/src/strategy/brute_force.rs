//! Полный перебор подмножеств по битовой маске, в порядке входного списка.

use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    error::{DilemmaError, Result},
    model::{exact_add, DuePayment, InputData},
    solution::Solution,
    traits::Strategy,
};

/// Маска — `u64`, пустое подмножество не рассматривается.
pub const MAX_CANDIDATES: usize = 63;

#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceStrategy;

impl BruteForceStrategy {
    pub fn solve(&self, target: Decimal, candidates: &[DuePayment]) -> Result<Option<Solution>> {
        if candidates.len() > MAX_CANDIDATES {
            return Err(DilemmaError::TooManyCandidates {
                count: candidates.len(),
                max: MAX_CANDIDATES,
            });
        }
        debug!(candidates = candidates.len(), %target, "enumerating all subsets");

        let subsets = 1u64 << candidates.len();
        for mask in 1..subsets {
            let mut sum = Decimal::ZERO;
            for (idx, payment) in candidates.iter().enumerate() {
                if mask & (1u64 << idx) != 0 {
                    sum = exact_add(sum, payment.amount)?;
                }
            }
            if sum == target {
                let items = candidates
                    .iter()
                    .enumerate()
                    .filter(|&(idx, _)| mask & (1u64 << idx) != 0)
                    .map(|(_, p)| p.clone())
                    .collect();
                return Ok(Some(Solution::new(items)));
            }
        }

        Ok(None)
    }
}

impl Strategy for BruteForceStrategy {
    fn find_solution(&self, input: &InputData) -> Result<Option<Solution>> {
        let (transfer, due_payments) = input.parts()?;
        self.solve(transfer.amount, due_payments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_mask_in_input_order() {
        let candidates: Vec<DuePayment> = [7, 3, 5, 2]
            .iter()
            .map(|&a| DuePayment::new(Decimal::new(a, 0)))
            .collect();
        let solution = BruteForceStrategy
            .solve(Decimal::new(10, 0), &candidates)
            .unwrap()
            .expect("expected solution");
        // маска 0b0011 (7 + 3) перебирается раньше 0b1110 (3 + 5 + 2)
        assert_eq!(solution.to_string(), "7 3");
    }

    #[test]
    fn rounded_sum_is_an_error() {
        let candidates = vec![
            DuePayment::new(Decimal::from_str_exact("0.6").unwrap()),
            DuePayment::new(Decimal::from_str_exact("79228162514264337593543950000").unwrap()),
        ];
        let target = Decimal::from_str_exact("79228162514264337593543950001").unwrap();
        let result = BruteForceStrategy.solve(target, &candidates);
        assert!(matches!(result, Err(DilemmaError::Inexact)), "{result:?}");
    }

    #[test]
    fn rejects_oversized_input() {
        let candidates = vec![DuePayment::new(Decimal::ONE); MAX_CANDIDATES + 1];
        let err = BruteForceStrategy.solve(Decimal::ONE, &candidates).unwrap_err();
        assert!(matches!(
            err,
            DilemmaError::TooManyCandidates { count: 64, max: 63 }
        ));
    }
}
