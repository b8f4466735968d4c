//! Domain Layer
//!
//! Pure leap-year logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `leap` - The Gregorian predicate and the `LeapRule` seam
//! - `entities/` - The expression tree (`Expr`)
//! - `value_objects/` - Immutable value types (`Value`, `Operator`)
//! - `services/` - Witness groups and the mutant-detection property

pub mod entities;
pub mod leap;
pub mod services;
pub mod value_objects;
