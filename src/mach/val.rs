use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Operand value
///
/// Operands live on the display as decimal strings. A `Val` is the
/// number behind one of those strings. Parsing reads the longest numeric
/// prefix and ignores whatever follows it, so `"12abc"` is 12 and `"."`
/// is not a number. Display prints the canonical form used everywhere
/// on the keypad: `NaN`, `Infinity`, plain decimals for magnitudes in
/// `1e-6..1e21`, and exponent form with a signed exponent otherwise.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Val(pub f64);

impl Val {
    pub fn number(self) -> f64 {
        self.0
    }
}

impl TryFrom<&str> for Val {
    type Error = Error;
    fn try_from(s: &str) -> Result<Val> {
        let s = s.trim_start();
        let bytes = s.as_bytes();
        let digits = |from: usize| {
            bytes
                .iter()
                .skip(from)
                .take_while(|b| b.is_ascii_digit())
                .count()
        };
        let mut end = 0;
        let mut negative = false;
        match bytes.first() {
            Some(b'-') => {
                negative = true;
                end = 1;
            }
            Some(b'+') => end = 1,
            _ => {}
        }
        if s[end..].starts_with("Infinity") {
            if negative {
                return Ok(Val(f64::NEG_INFINITY));
            }
            return Ok(Val(f64::INFINITY));
        }
        let int_digits = digits(end);
        end += int_digits;
        let mut frac_digits = 0;
        if bytes.get(end) == Some(&b'.') {
            frac_digits = digits(end + 1);
            end += 1 + frac_digits;
        }
        if int_digits + frac_digits == 0 {
            return Err(error!(TypeMismatch; "NOT A NUMBER"));
        }
        if let Some(b'e') | Some(b'E') = bytes.get(end) {
            let mut exp_end = end + 1;
            if let Some(b'+') | Some(b'-') = bytes.get(exp_end) {
                exp_end += 1;
            }
            let exp_digits = digits(exp_end);
            if exp_digits > 0 {
                end = exp_end + exp_digits;
            }
        }
        match s[..end].parse::<f64>() {
            Ok(n) => Ok(Val(n)),
            Err(_) => Err(error!(TypeMismatch; "NOT A NUMBER")),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let n = self.0;
        if n.is_nan() {
            return write!(f, "NaN");
        }
        if n.is_infinite() {
            return write!(f, "{}", if n > 0.0 { "Infinity" } else { "-Infinity" });
        }
        if n == 0.0 {
            // Negative zero too.
            return write!(f, "0");
        }
        let abs = n.abs();
        if (1e-6..1e21).contains(&abs) {
            return write!(f, "{}", n);
        }
        let s = format!("{:e}", n);
        match s.find('e') {
            Some(i) if !s[i + 1..].starts_with('-') => write!(f, "{}e+{}", &s[..i], &s[i + 1..]),
            _ => write!(f, "{}", s),
        }
    }
}
