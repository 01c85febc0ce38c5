use keypad::lang::key::*;
use keypad::lang::lex;

fn key(s: &str) -> Option<Action> {
    let mut actions = lex(s).ok()?;
    if actions.len() == 1 {
        actions.pop()
    } else {
        None
    }
}

fn op(o: Operator) -> Option<Action> {
    Some(Action::ChooseOperation(o))
}

#[test]
fn test_control_keys() {
    assert_eq!(key("AC"), Some(Action::Clear));
    assert_eq!(key("c"), Some(Action::Clear));
    assert_eq!(key("Clear"), Some(Action::Clear));
    assert_eq!(key("DEL"), Some(Action::DeleteDigit));
    assert_eq!(key("="), Some(Action::Evaluate));
}

#[test]
fn test_binary_keys() {
    assert_eq!(key("+"), op(Operator::Binary(Binary::Add)));
    assert_eq!(key("-"), op(Operator::Binary(Binary::Subtract)));
    assert_eq!(key("*"), op(Operator::Binary(Binary::Multiply)));
    assert_eq!(key("X"), op(Operator::Binary(Binary::Multiply)));
    assert_eq!(key("×"), op(Operator::Binary(Binary::Multiply)));
    assert_eq!(key("÷"), op(Operator::Binary(Binary::Divide)));
    assert_eq!(key("/"), op(Operator::Binary(Binary::Divide)));
    assert_eq!(key("%"), op(Operator::Binary(Binary::Remainder)));
    assert_eq!(key("^"), op(Operator::Binary(Binary::Power)));
}

#[test]
fn test_unary_keys() {
    assert_eq!(key("√"), op(Operator::Unary(Unary::Sqrt)));
    assert_eq!(key("SQRT"), op(Operator::Unary(Unary::Sqrt)));
    assert_eq!(key("!"), op(Operator::Unary(Unary::Factorial)));
    assert_eq!(key("Sin"), op(Operator::Unary(Unary::Sin)));
    assert_eq!(key("COS"), op(Operator::Unary(Unary::Cos)));
    assert_eq!(key("tan"), op(Operator::Unary(Unary::Tan)));
    assert_eq!(key("Inv"), op(Operator::Unary(Unary::Inv)));
    assert_eq!(key("In"), op(Operator::Unary(Unary::Ln)));
    assert_eq!(key("ln"), op(Operator::Unary(Unary::Ln)));
    assert_eq!(key("log"), op(Operator::Unary(Unary::Log)));
    assert_eq!(key("Rad"), op(Operator::Unary(Unary::Rad)));
}

#[test]
fn test_constant_keys() {
    assert_eq!(key("π"), op(Operator::Constant(Constant::Pi)));
    assert_eq!(key("PI"), op(Operator::Constant(Constant::Pi)));
    assert_eq!(key("e"), op(Operator::Constant(Constant::E)));
}

#[test]
fn test_run_together() {
    assert_eq!(
        lex("9sqrt+1="),
        Ok(vec![
            Action::AddDigit(Digit::Nine),
            Action::ChooseOperation(Operator::Unary(Unary::Sqrt)),
            Action::ChooseOperation(Operator::Binary(Binary::Add)),
            Action::AddDigit(Digit::One),
            Action::Evaluate,
        ])
    );
}

#[test]
fn test_unknown_keys() {
    assert_eq!(
        lex("sincos").unwrap_err().to_string(),
        "SYNTAX ERROR (0..6); UNKNOWN KEY"
    );
    assert_eq!(
        lex("1 + $").unwrap_err().to_string(),
        "SYNTAX ERROR (4..5); UNKNOWN KEY"
    );
    assert_eq!(lex("π√").map(|a| a.len()), Ok(2));
}

#[test]
fn test_labels() {
    let faces: Vec<String> = lex("ac del = / x sqrt fact ln pi 7 .")
        .unwrap()
        .iter()
        .map(|a| a.to_string())
        .collect();
    assert_eq!(
        faces,
        vec!["AC", "DEL", "=", "÷", "*", "√", "!", "In", "π", "7", "."]
    );
}
