//! Доменные модели: банковский перевод, ожидаемые платежи и входные данные решателя.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::{DilemmaError, Result};

/// Сложение без округления. `Decimal` хранит 96 бит мантиссы: если точная сумма
/// не помещается, `checked_add` молча отбрасывает дробные разряды.
pub fn exact_add(a: Decimal, b: Decimal) -> Result<Decimal> {
    let sum = a.checked_add(b).ok_or(DilemmaError::Overflow)?;
    if sum.scale() >= a.scale().max(b.scale()) {
        return Ok(sum);
    }
    // масштаб упал: округления не было, только если сумма обратима
    if sum.checked_sub(b) == Some(a) && sum.checked_sub(a) == Some(b) {
        Ok(sum)
    } else {
        Err(DilemmaError::Inexact)
    }
}

/// Ожидаемый платёж — кандидат на включение в подмножество.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DuePayment {
    pub label: Option<String>,
    pub amount: Decimal,
}

impl DuePayment {
    pub fn new(amount: Decimal) -> Self {
        Self { label: None, amount }
    }

    pub fn labeled(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: Some(label.into()),
            amount,
        }
    }

    /// Сравнение только по сумме; метка в сортировке не участвует.
    pub fn by_amount(a: &DuePayment, b: &DuePayment) -> Ordering {
        a.amount.cmp(&b.amount)
    }
}

impl fmt::Display for DuePayment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => f.write_str(label),
            None => write!(f, "{}", self.amount),
        }
    }
}

/// Банковский перевод, сумму которого нужно набрать.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BankTransfer {
    pub label: Option<String>,
    pub amount: Decimal,
}

impl BankTransfer {
    pub fn new(amount: Decimal) -> Self {
        Self { label: None, amount }
    }
}

/// Результат чтения входного файла. Поля опциональны: читатель мог их не найти.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputData {
    pub bank_transfer: Option<BankTransfer>,
    pub due_payments: Option<Vec<DuePayment>>,
}

impl InputData {
    pub fn new(bank_transfer: BankTransfer, due_payments: Vec<DuePayment>) -> Self {
        Self {
            bank_transfer: Some(bank_transfer),
            due_payments: Some(due_payments),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.parts().map(|_| ())
    }

    /// Проверенные части входа: сумма перевода и список кандидатов.
    pub fn parts(&self) -> Result<(&BankTransfer, &[DuePayment])> {
        let transfer = self
            .bank_transfer
            .as_ref()
            .ok_or_else(|| DilemmaError::InvalidInput("bank transfer is missing".into()))?;
        let due_payments = self
            .due_payments
            .as_deref()
            .ok_or_else(|| DilemmaError::InvalidInput("due payments are missing".into()))?;
        Ok((transfer, due_payments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefers_label() {
        let p = DuePayment::labeled("INV-7", Decimal::new(1250, 2));
        assert_eq!(p.to_string(), "INV-7");
        assert_eq!(DuePayment::new(Decimal::new(1250, 2)).to_string(), "12.50");
    }

    #[test]
    fn exact_add_refuses_to_round() {
        let big = Decimal::from_str_exact("79228162514264337593543950000").unwrap();
        let frac = Decimal::from_str_exact("0.6").unwrap();
        assert!(matches!(exact_add(big, frac), Err(DilemmaError::Inexact)));
        assert!(matches!(exact_add(Decimal::MAX, Decimal::ONE), Err(DilemmaError::Overflow)));

        let sum = exact_add(Decimal::new(5, 1), Decimal::new(25, 2)).unwrap();
        assert_eq!(sum, Decimal::new(75, 2));
        assert_eq!(
            exact_add(big, Decimal::ONE).unwrap().to_string(),
            "79228162514264337593543950001"
        );
    }

    #[test]
    fn validate_rejects_missing_parts() {
        let mut input = InputData::default();
        assert!(matches!(input.validate(), Err(DilemmaError::InvalidInput(_))));

        input.bank_transfer = Some(BankTransfer::new(Decimal::ONE));
        assert!(matches!(input.validate(), Err(DilemmaError::InvalidInput(_))));

        input.due_payments = Some(Vec::new());
        assert!(input.validate().is_ok());
    }
}
