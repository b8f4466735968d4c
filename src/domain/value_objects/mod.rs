//! Domain Value Objects
//!
//! Immutable value types of the expression language.

mod operator;
mod value;

pub use operator::{Operator, OperatorFamily};
pub use value::{Value, ValueType};
