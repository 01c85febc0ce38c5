use crate::lang::key::Binary;

/// ## Read-only view of the calculator for rendering
///
/// The first line is the previous operand followed by the pending
/// operator, the second line is the current operand. Absent values
/// render as nothing.

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Display {
    pub previous: Option<String>,
    pub operation: Option<Binary>,
    pub current: Option<String>,
}

impl Display {
    pub fn previous_line(&self) -> String {
        let mut s = self.previous.clone().unwrap_or_default();
        if let Some(op) = self.operation {
            if !s.is_empty() {
                s.push(' ');
            }
            s.push_str(op.label());
        }
        s
    }

    pub fn current_line(&self) -> &str {
        self.current.as_deref().unwrap_or("")
    }
}

impl std::fmt::Display for Display {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}\n{}", self.previous_line(), self.current_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines() {
        let d = Display {
            previous: Some("12".to_string()),
            operation: Some(Binary::Divide),
            current: Some("3".to_string()),
        };
        assert_eq!(d.to_string(), "12 ÷\n3");
        assert_eq!(Display::default().to_string(), "\n");
    }
}
