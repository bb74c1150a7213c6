//! An interactive evaluator for integer arithmetic with named variables.
//!
//! Expressions support `+`, `-`, `*`, `/` and `^` with the usual precedence, parentheses,
//! arbitrarily large integers and collapsed sign runs (`--5` is `5`). A line is turned
//! into postfix form with the shunting-yard algorithm and reduced on a value stack.
//! Assignments take the form `name = 42` or `name = other`.
//!
//! The main entry point is [`Calculator`], which owns the variable bindings and exposes
//! [`Calculator::evaluate`] and [`Calculator::assign`]. The lower-level modules are public
//! so each stage can be used on its own.

mod assignment;
pub mod command;
pub mod env;
pub mod error;
pub mod evaluator;
mod interpreter;
pub mod lexer;
pub mod operator;
pub mod parser;

pub use command::Flow;
pub use error::EvaluationError;
/// The calculator engine and its interactive loop.
///
/// See [`Calculator`] for the high-level API and examples.
pub use interpreter::{Calculator, FAREWELL, GREETING};
