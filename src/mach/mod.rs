/*!
## Rust Machine Module

This Rust module is the calculator state machine and the arithmetic
behind each key.

*/

mod display;
mod function;
mod operation;
mod runtime;
mod val;

pub use display::Display;
pub use function::Function;
pub use operation::Operation;
pub use runtime::Runtime;
pub use val::Val;
