//! Упрощённый XML: <Input><bank_transfer/><due_payments/>...</Input>,
//! ответ — <Solution found="..">.

use crate::{
    error::{DilemmaError, Result},
    model::{BankTransfer, DuePayment, InputData},
    solution::Solution,
};
use quick_xml::{de::from_reader, se::to_string};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

use rust_decimal::Decimal;

#[derive(Serialize, Deserialize, Debug)]
struct XmlAmount {
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
}

#[derive(Deserialize, Debug)]
struct XmlInput {
    bank_transfer: Option<XmlAmount>,
    #[serde(default)]
    due_payments: Vec<XmlAmount>,
}

#[derive(Serialize, Debug)]
#[serde(rename = "Solution")]
struct XmlSolution {
    #[serde(rename = "@found")]
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    total: Option<String>,
    due_payments: Vec<XmlAmount>,
}

fn non_empty(label: Option<String>) -> Option<String> {
    label.map(|l| l.trim().to_string()).filter(|l| !l.is_empty())
}

pub struct Xml;

impl crate::traits::ReadInput for Xml {
    fn read<R: BufRead>(r: R) -> Result<InputData> {
        let x: XmlInput = from_reader(r).map_err(|e| DilemmaError::Xml(format!("{e}")))?;

        let bank_transfer = x.bank_transfer.map(|b| BankTransfer {
            label: non_empty(b.label),
            amount: b.amount,
        });
        let due_payments = x
            .due_payments
            .into_iter()
            .map(|p| DuePayment {
                label: non_empty(p.label),
                amount: p.amount,
            })
            .collect();

        Ok(InputData {
            bank_transfer,
            due_payments: Some(due_payments),
        })
    }
}

impl crate::traits::WriteSolution for Xml {
    fn write<W: Write>(mut w: W, solution: Option<&Solution>) -> Result<()> {
        let x = XmlSolution {
            found: solution.is_some(),
            total: solution.map(|s| s.total().to_string()),
            due_payments: solution
                .map(Solution::items)
                .unwrap_or_default()
                .iter()
                .map(|p| XmlAmount {
                    label: p.label.clone(),
                    amount: p.amount,
                })
                .collect(),
        };

        let s = to_string(&x).map_err(|e| DilemmaError::Xml(format!("{e}")))?;
        w.write_all(s.as_bytes())?;
        Ok(())
    }
}
