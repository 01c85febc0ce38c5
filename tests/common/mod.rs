use keypad::mach::Runtime;

/// Presses the keys on a line and returns both display lines, or the
/// error the way the terminal prints it.
pub fn keys(runtime: &mut Runtime, line: &str) -> String {
    match runtime.enter(line) {
        Ok(()) => runtime.display().to_string(),
        Err(error) => format!("?{}", error),
    }
}

/// Presses the keys on a fresh calculator and returns the current operand.
#[allow(dead_code)]
pub fn current(line: &str) -> String {
    let mut r = Runtime::new();
    keys(&mut r, line);
    r.current_operand().unwrap_or("").to_string()
}
