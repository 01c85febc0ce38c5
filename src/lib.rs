//! # Keypad Calculator
//!
//! A scientific calculator as it appears on a keypad: a display of the
//! previous operand, the pending operator and the current operand, driven
//! one button press at a time.
//!
//! ```
//! use keypad::mach::Runtime;
//!
//! let mut calc = Runtime::new();
//! calc.enter("12 + 3 =").unwrap();
//! assert_eq!(calc.current_operand(), Some("15"));
//! ```
//!
//! Run the `keypad` executable for an interactive keypad in the terminal.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/keys.rs"]
#[allow(non_snake_case)]
pub mod __Keys;

pub mod lang;
pub mod mach;
