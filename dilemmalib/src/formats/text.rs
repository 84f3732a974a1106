//! Построчный текстовый формат:
//!
//! ```text
//! # комментарий
//! transfer 150.00 BT-2024-03
//! due 100.00 INV-1
//! due 50
//! ```
//!
//! Ответ — метки (или суммы) найденных платежей через пробел.

use crate::{
    error::{DilemmaError, Result},
    model::{BankTransfer, DuePayment, InputData},
    solution::Solution,
};
use regex::Regex;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

pub const NO_SOLUTION: &str = "no solution";

pub struct Text;

impl crate::traits::ReadInput for Text {
    fn read<R: BufRead>(r: R) -> Result<InputData> {
        let re_line = Regex::new(
            r"^(?P<kind>transfer|due)\s+(?P<amt>[+-]?\d+(?:\.\d+)?)(?:\s+(?P<label>\S.*))?$",
        )
        .map_err(|e| DilemmaError::Parse(e.to_string()))?;

        let mut bank_transfer: Option<BankTransfer> = None;
        let mut due_payments = Vec::new();

        for (idx, line) in r.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let caps = re_line
                .captures(line)
                .ok_or_else(|| DilemmaError::Parse(format!("line {}: {line:?}", idx + 1)))?;

            // группы kind и amt обязательны в регулярке
            let amount: Decimal = caps["amt"]
                .parse()
                .map_err(|e| DilemmaError::Parse(format!("line {}: amount: {e}", idx + 1)))?;
            let label = caps.name("label").map(|m| m.as_str().trim().to_string());

            if &caps["kind"] == "transfer" {
                if bank_transfer.is_some() {
                    return Err(DilemmaError::Parse(format!(
                        "line {}: more than one transfer",
                        idx + 1
                    )));
                }
                bank_transfer = Some(BankTransfer { label, amount });
            } else {
                due_payments.push(DuePayment { label, amount });
            }
        }

        Ok(InputData {
            bank_transfer,
            due_payments: Some(due_payments),
        })
    }
}

impl crate::traits::WriteSolution for Text {
    fn write<W: Write>(mut w: W, solution: Option<&Solution>) -> Result<()> {
        match solution {
            Some(s) => writeln!(w, "{s}")?,
            None => writeln!(w, "{NO_SOLUTION}")?,
        }
        Ok(())
    }
}
