//! Простой CSV: заголовки kind,label,amount; kind — transfer (ровно одна строка) или due.
//! Решение пишется строками label,amount.

use crate::{
    error::{DilemmaError, Result},
    model::{BankTransfer, DuePayment, InputData},
    solution::Solution,
};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

#[derive(serde::Deserialize)]
struct CsvRow {
    kind: String,
    label: Option<String>,
    amount: String,
}

#[derive(serde::Serialize)]
struct CsvOutRow<'a> {
    label: Option<&'a str>,
    amount: String,
}

pub struct Csv;

impl crate::traits::ReadInput for Csv {
    fn read<R: BufRead>(r: R) -> Result<InputData> {
        let mut rdr = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::All)
            .from_reader(r);
        let mut bank_transfer: Option<BankTransfer> = None;
        let mut due_payments = Vec::new();

        for rec in rdr.deserialize::<CsvRow>() {
            let row = rec?;
            let amount = row
                .amount
                .parse::<Decimal>()
                .map_err(|e| DilemmaError::Parse(format!("amount {:?}: {e}", row.amount)))?;
            let label = row.label.filter(|l| !l.is_empty());

            match row.kind.as_str() {
                "transfer" => {
                    if bank_transfer.is_some() {
                        return Err(DilemmaError::Parse("more than one transfer row".into()));
                    }
                    bank_transfer = Some(BankTransfer { label, amount });
                }
                "due" => due_payments.push(DuePayment { label, amount }),
                other => return Err(DilemmaError::Parse(format!("unknown kind: {other}"))),
            }
        }

        Ok(InputData {
            bank_transfer,
            due_payments: Some(due_payments),
        })
    }
}

impl crate::traits::WriteSolution for Csv {
    fn write<W: Write>(mut w: W, solution: Option<&Solution>) -> Result<()> {
        let mut wrt = WriterBuilder::new().has_headers(false).from_writer(&mut w);
        wrt.write_record(["label", "amount"])?;

        for p in solution.map(Solution::items).unwrap_or_default() {
            wrt.serialize(CsvOutRow {
                label: p.label.as_deref(),
                amount: p.amount.to_string(),
            })?;
        }
        wrt.flush()?;
        Ok(())
    }
}
