use super::key::{Action, Digit};
use super::Error;

/// ## Key sequence lexical analysis
///
/// Converts a typed line into keypad actions. Digits and symbols are one
/// key each, runs of ASCII letters are one word each. The whole line is
/// rejected if any key is unknown.

pub fn lex(s: &str) -> Result<Vec<Action>, Error> {
    Lexer::new(s).lex()
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
}

impl Lexer {
    fn new(s: &str) -> Lexer {
        Lexer {
            chars: s.chars().collect(),
            pos: 0,
        }
    }

    fn lex(&mut self) -> Result<Vec<Action>, Error> {
        let mut actions = vec![];
        while let Some(&ch) = self.chars.get(self.pos) {
            if ch.is_whitespace() {
                self.pos += 1;
                continue;
            }
            if let Some(digit) = Digit::from_char(ch) {
                self.pos += 1;
                actions.push(Action::AddDigit(digit));
                continue;
            }
            let start = self.pos;
            let word: String = if ch.is_ascii_alphabetic() {
                self.chars[start..]
                    .iter()
                    .take_while(|c| c.is_ascii_alphabetic())
                    .collect()
            } else {
                ch.to_string()
            };
            self.pos += word.chars().count();
            match Action::from_word(&word) {
                Some(action) => actions.push(action),
                None => return Err(error!(SyntaxError, ..&(start..self.pos); "UNKNOWN KEY")),
            }
        }
        Ok(actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::key::*;

    #[test]
    fn test_digits_and_words() {
        assert_eq!(
            lex("1.5 sin"),
            Ok(vec![
                Action::AddDigit(Digit::One),
                Action::AddDigit(Digit::Point),
                Action::AddDigit(Digit::Five),
                Action::ChooseOperation(Operator::Unary(Unary::Sin)),
            ])
        );
    }

    #[test]
    fn test_unknown_word_column() {
        let err = lex("12 foo").unwrap_err();
        assert_eq!(err.column(), 3..6);
        assert_eq!(err.to_string(), "SYNTAX ERROR (3..6); UNKNOWN KEY");
    }

    #[test]
    fn test_empty() {
        assert_eq!(lex("   "), Ok(vec![]));
    }
}
