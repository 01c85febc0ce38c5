use super::{Display, Function, Operation, Val};
use crate::lang::key::{Action, Binary, Digit, Operator};
use crate::lang::{lex, Error};
use tracing::{debug, trace};

/// ## Calculator runtime
///
/// Holds the previous operand, the pending binary operator, the current
/// operand, and the overwrite flag. Each keypad action runs to completion
/// before the next; none of them fail. An operand that is not a number
/// evaluates to a blank operand.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Runtime {
    previous: Option<String>,
    operation: Option<Binary>,
    current: Option<String>,
    overwrite: bool,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn previous_operand(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    pub fn current_operand(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn operation(&self) -> Option<Binary> {
        self.operation
    }

    pub fn is_overwrite(&self) -> bool {
        self.overwrite
    }

    pub fn display(&self) -> Display {
        Display {
            previous: self.previous.clone(),
            operation: self.operation,
            current: self.current.clone(),
        }
    }

    /// Lexes a line of keys and dispatches them in order. Nothing is
    /// dispatched if the line has an unknown key.
    pub fn enter(&mut self, line: &str) -> Result<(), Error> {
        for action in lex(line)? {
            self.dispatch(action);
        }
        Ok(())
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::AddDigit(digit) => self.add_digit(digit),
            Action::ChooseOperation(op) => self.choose_operation(op),
            Action::Clear => self.clear(),
            Action::DeleteDigit => self.delete_digit(),
            Action::Evaluate => self.evaluate(),
        }
    }

    fn add_digit(&mut self, digit: Digit) {
        if self.overwrite {
            self.current = Some(digit.to_string());
            self.overwrite = false;
            debug!(current = ?self.current, "overwrite operand");
            return;
        }
        let current = self.current.get_or_insert_with(String::new);
        match digit {
            Digit::Zero if current.as_str() == "0" => {
                trace!("redundant leading zero");
                return;
            }
            Digit::Point if current.contains('.') => {
                trace!("second decimal point");
                return;
            }
            _ => current.push(digit.as_char()),
        }
        debug!(current = ?self.current, "add digit {}", digit);
    }

    fn choose_operation(&mut self, op: Operator) {
        match op {
            Operator::Constant(constant) => {
                self.current = Some(Val(constant.value()).to_string());
                debug!(current = ?self.current, "constant {}", op);
            }
            Operator::Unary(unary) => {
                let current = match self.current.as_deref() {
                    Some(current) => current,
                    None => {
                        trace!("{} without operand", op);
                        return;
                    }
                };
                self.current = blank(Function::unary(unary, current));
                debug!(current = ?self.current, "unary {}", op);
            }
            Operator::Binary(binary) => {
                match (self.previous.is_some(), self.current.is_some()) {
                    (false, false) => {
                        trace!("{} without operands", op);
                        return;
                    }
                    (true, false) => {}
                    (false, true) => {
                        self.previous = self.current.take();
                    }
                    (true, true) => {
                        self.previous = self.compute();
                        self.current = None;
                    }
                }
                self.operation = Some(binary);
                self.overwrite = false;
                debug!(previous = ?self.previous, "binary {}", op);
            }
        }
    }

    fn clear(&mut self) {
        *self = Runtime::default();
        debug!("clear");
    }

    fn delete_digit(&mut self) {
        if self.overwrite {
            self.current = None;
            self.overwrite = false;
            debug!("delete result");
            return;
        }
        let len = match &self.current {
            Some(current) => current.chars().count(),
            None => {
                trace!("delete without operand");
                return;
            }
        };
        if len <= 1 {
            self.current = None;
        } else if let Some(current) = self.current.as_mut() {
            current.pop();
        }
        debug!(current = ?self.current, "delete digit");
    }

    fn evaluate(&mut self) {
        if self.operation.is_none() || self.previous.is_none() || self.current.is_none() {
            trace!("evaluate without expression");
            return;
        }
        self.current = self.compute();
        self.previous = None;
        self.operation = None;
        self.overwrite = true;
        debug!(current = ?self.current, "evaluate");
    }

    fn compute(&self) -> Option<String> {
        match (&self.previous, self.operation, &self.current) {
            (Some(previous), Some(op), Some(current)) => {
                blank(Operation::binary(op, previous, current))
            }
            _ => None,
        }
    }
}

fn blank(result: Result<String, Error>) -> Option<String> {
    match result {
        Ok(s) => Some(s),
        Err(error) => {
            debug!("{}", error);
            None
        }
    }
}
