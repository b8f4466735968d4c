//! Expression tree over year arithmetic
//!
//! An [`Expr`] is evaluated against a year and yields a [`Value`]. Trees built
//! by the generator are well-typed by construction; hand-built trees are
//! checked as they are evaluated and report an [`EvalError`] instead of
//! panicking.

use std::fmt;

use crate::domain::leap::LeapRule;
use crate::domain::value_objects::{Operator, Value, ValueType};
use crate::error::EvalError;

/// A node of the expression language
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Fixed integer, ignores the year
    Constant(i64),
    /// The year being classified
    Year,
    /// `left operator right`
    Binary {
        left: Box<Expr>,
        operator: Operator,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn constant(value: i64) -> Self {
        Expr::Constant(value)
    }

    pub fn year() -> Self {
        Expr::Year
    }

    pub fn binary(left: Expr, operator: Operator, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    /// The Gregorian rule written in the expression language:
    /// `year % 4 == 0 and year % 100 != 0 or year % 400 == 0`.
    pub fn gregorian() -> Self {
        let divisible = |n| {
            Expr::binary(
                Expr::binary(Expr::year(), Operator::Mod, Expr::constant(n)),
                Operator::Eq,
                Expr::constant(0),
            )
        };
        let not_century = Expr::binary(
            Expr::binary(Expr::year(), Operator::Mod, Expr::constant(100)),
            Operator::Ne,
            Expr::constant(0),
        );
        Expr::binary(
            Expr::binary(divisible(4), Operator::And, not_century),
            Operator::Or,
            divisible(400),
        )
    }

    /// Evaluate the tree for `year`, children first.
    pub fn evaluate(&self, year: i64) -> Result<Value, EvalError> {
        match self {
            Expr::Constant(n) => Ok(Value::Int(*n)),
            Expr::Year => Ok(Value::Int(year)),
            Expr::Binary {
                left,
                operator,
                right,
            } => operator.apply(left.evaluate(year)?, right.evaluate(year)?),
        }
    }

    /// Evaluate the tree as a leap-year classifier.
    pub fn classify(&self, year: i64) -> Result<bool, EvalError> {
        let value = self.evaluate(year)?;
        value.as_bool().ok_or(EvalError::NotAPredicate {
            found: value.value_type(),
        })
    }

    /// Static type of the tree, or the first operand mismatch found.
    pub fn type_check(&self) -> Result<ValueType, EvalError> {
        match self {
            Expr::Constant(_) | Expr::Year => Ok(ValueType::Int),
            Expr::Binary {
                left,
                operator,
                right,
            } => {
                let expected = operator.operand_type();
                for found in [left.type_check()?, right.type_check()?] {
                    if found != expected {
                        return Err(EvalError::TypeMismatch {
                            operator: operator.symbol(),
                            expected,
                            found,
                        });
                    }
                }
                Ok(operator.result_type())
            }
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Expr::Constant(_) | Expr::Year => 1,
            Expr::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Expr::Constant(_) | Expr::Year => 1,
            Expr::Binary { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    /// Whether the tree reads the year anywhere
    pub fn mentions_year(&self) -> bool {
        match self {
            Expr::Constant(_) => false,
            Expr::Year => true,
            Expr::Binary { left, right, .. } => left.mentions_year() || right.mentions_year(),
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Binary { .. } => write!(f, "({})", self),
            _ => write!(f, "{}", self),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(n) => write!(f, "{}", n),
            Expr::Year => write!(f, "year"),
            Expr::Binary {
                left,
                operator,
                right,
            } => {
                left.fmt_operand(f)?;
                write!(f, " {} ", operator)?;
                right.fmt_operand(f)
            }
        }
    }
}

impl LeapRule for Expr {
    fn is_leap(&self, year: i64) -> Result<bool, EvalError> {
        self.classify(year)
    }
}
