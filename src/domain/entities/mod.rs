//! Domain Entities
//!
//! - `Expr` - An expression tree evaluated against a year

mod expr;

pub use expr::Expr;
