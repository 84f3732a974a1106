use dilemmalib::{
    error::DilemmaError,
    formats::text::{Text, NO_SOLUTION},
    strategy::recursive::RecursiveStrategy,
    traits::{ReadInput, Strategy, WriteSolution},
};
use rust_decimal::Decimal;
use std::io::Cursor;

#[test]
fn text_read_solve_write() {
    let s = r#"# March reconciliation
transfer 5 BT-2024-03

due 1 INV-1
due 2 INV-2
due 3
due 9 INV-9
"#;
    let data = Text::read(Cursor::new(s)).expect("text read");
    assert_eq!(data.bank_transfer.as_ref().unwrap().amount, Decimal::new(5, 0));
    assert_eq!(data.due_payments.as_ref().unwrap().len(), 4);

    let solution = RecursiveStrategy::new().find_solution(&data).expect("solve");
    let mut out = Vec::new();
    Text::write(&mut out, solution.as_ref()).expect("write");
    assert_eq!(String::from_utf8(out).unwrap(), "INV-2 3\n");
}

#[test]
fn text_reports_no_solution() {
    let data = Text::read(Cursor::new("transfer 8\ndue 1\ndue 2\ndue 4\n")).unwrap();
    let solution = RecursiveStrategy::new().find_solution(&data).unwrap();
    assert!(solution.is_none());

    let mut out = Vec::new();
    Text::write(&mut out, solution.as_ref()).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), format!("{NO_SOLUTION}\n"));
}

#[test]
fn text_rejects_garbage_lines() {
    let err = Text::read(Cursor::new("transfer 1\npay 2\n")).unwrap_err();
    match err {
        DilemmaError::Parse(msg) => assert!(msg.starts_with("line 2"), "{msg}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn text_rejects_second_transfer() {
    let err = Text::read(Cursor::new("transfer 1\ntransfer 2\ndue 1\n")).unwrap_err();
    match err {
        DilemmaError::Parse(msg) => assert_eq!(msg, "line 2: more than one transfer"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn text_rejects_malformed_amount() {
    let err = Text::read(Cursor::new("transfer 1\ndue 1.2.3 X\n")).unwrap_err();
    assert!(matches!(err, DilemmaError::Parse(_)), "{err}");
}
