mod common;
use common::*;
use keypad::lang::key::Binary;
use keypad::mach::Operation;

#[test]
fn test_op_sum() {
    assert_eq!(current("2 + 2 ="), "4");
    assert_eq!(current(".1 + .2 ="), "0.30000000000000004");
}

#[test]
fn test_op_subtract() {
    assert_eq!(current("5 - 8 ="), "-3");
}

#[test]
fn test_op_multiply() {
    assert_eq!(current("6 * 7 ="), "42");
    assert_eq!(current("6 x 7 ="), "42");
    assert_eq!(current("1000000000 * 1000000000000 ="), "1e+21");
}

#[test]
fn test_op_divide() {
    assert_eq!(current("1 0 ÷ 4 ="), "2.5");
    assert_eq!(current("1 0 / 0 ="), "Infinity");
    assert_eq!(current("0 / 0 ="), "NaN");
    assert_eq!(current("1 / 10000000 ="), "1e-7");
}

#[test]
fn test_op_remainder() {
    assert_eq!(current("7 % 3 ="), "1");
    assert_eq!(current("0 - 7 = % 3 ="), "-1");
    assert_eq!(current("5.5 % 2 ="), "1.5");
    assert_eq!(current("5 % 0 ="), "NaN");
}

#[test]
fn test_op_power() {
    assert_eq!(current("2 ^ 1 0 ="), "1024");
    assert_eq!(current("4 ^ .5 ="), "2");
    assert_eq!(current("2 ^ 0 ="), "1");
}

#[test]
fn test_op_unparseable() {
    assert!(Operation::binary(Binary::Add, ".", "1").is_err());
    assert!(Operation::binary(Binary::Add, "1", "").is_err());
    assert_eq!(
        Operation::binary(Binary::Add, "1", "NaN").unwrap_err().to_string(),
        "TYPE MISMATCH; NOT A NUMBER"
    );
    assert_eq!(
        Operation::binary(Binary::Subtract, "Infinity", "1"),
        Ok("Infinity".to_string())
    );
}
