/*!
# Rust Language Module

This Rust module names the keys on the calculator keypad and
turns typed key sequences into keypad actions.

*/

pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod lex;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;

pub mod key;
