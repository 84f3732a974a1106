//! Неизменяемое решение: упорядоченный набор платежей, сумма которых равна переводу.

use rust_decimal::Decimal;
use std::fmt;

use crate::model::DuePayment;

const SEPARATOR: &str = " ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    due_payments: Vec<DuePayment>,
}

impl Solution {
    pub fn new(due_payments: Vec<DuePayment>) -> Self {
        Self { due_payments }
    }

    /// Платежи в порядке, в котором их собрал поиск.
    pub fn items(&self) -> &[DuePayment] {
        &self.due_payments
    }

    pub fn to_vec(&self) -> Vec<DuePayment> {
        self.due_payments.clone()
    }

    pub fn into_inner(self) -> Vec<DuePayment> {
        self.due_payments
    }

    pub fn len(&self) -> usize {
        self.due_payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.due_payments.is_empty()
    }

    pub fn total(&self) -> Decimal {
        self.due_payments.iter().map(|p| p.amount).sum()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for payment in &self.due_payments {
            if !first {
                f.write_str(SEPARATOR)?;
            }
            write!(f, "{payment}")?;
            first = false;
        }
        Ok(())
    }
}
