//! Operator value object - binary operators of the expression language
//!
//! Operators come in three families:
//! - integer (`+`, `-`, `%`): two integers to an integer
//! - comparison (`==`, `!=`, `>=`, `<=`, `>`, `<`): two integers to a boolean
//! - boolean (`and`, `or`): two booleans to a boolean

use serde::{Deserialize, Serialize};

use super::value::{Value, ValueType};
use crate::error::EvalError;

/// Family an operator belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorFamily {
    Integer,
    Comparison,
    Boolean,
}

/// Binary operator with a display symbol and an evaluation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Sub,
    Mod,
    Eq,
    Ne,
    Ge,
    Le,
    Gt,
    Lt,
    And,
    Or,
}

impl Operator {
    /// Integer-producing operators
    pub const INTEGER: [Operator; 3] = [Operator::Add, Operator::Sub, Operator::Mod];

    /// Comparisons over integers
    pub const COMPARISON: [Operator; 6] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Ge,
        Operator::Le,
        Operator::Gt,
        Operator::Lt,
    ];

    /// Combinators over booleans
    pub const BOOLEAN: [Operator; 2] = [Operator::And, Operator::Or];

    pub const ALL: [Operator; 11] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mod,
        Operator::Eq,
        Operator::Ne,
        Operator::Ge,
        Operator::Le,
        Operator::Gt,
        Operator::Lt,
        Operator::And,
        Operator::Or,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mod => "%",
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Ge => ">=",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::And => "and",
            Operator::Or => "or",
        }
    }

    /// Look up an operator by its display symbol
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        Self::ALL.iter().copied().find(|op| op.symbol() == symbol)
    }

    pub fn family(&self) -> OperatorFamily {
        match self {
            Operator::Add | Operator::Sub | Operator::Mod => OperatorFamily::Integer,
            Operator::Eq
            | Operator::Ne
            | Operator::Ge
            | Operator::Le
            | Operator::Gt
            | Operator::Lt => OperatorFamily::Comparison,
            Operator::And | Operator::Or => OperatorFamily::Boolean,
        }
    }

    /// Type both operands must have
    pub fn operand_type(&self) -> ValueType {
        match self.family() {
            OperatorFamily::Integer | OperatorFamily::Comparison => ValueType::Int,
            OperatorFamily::Boolean => ValueType::Bool,
        }
    }

    /// Type of the value this operator produces
    pub fn result_type(&self) -> ValueType {
        match self.family() {
            OperatorFamily::Integer => ValueType::Int,
            OperatorFamily::Comparison | OperatorFamily::Boolean => ValueType::Bool,
        }
    }

    /// Apply the operator to two evaluated operands.
    ///
    /// Integer arithmetic is checked; `%` is floored, so the result takes the
    /// sign of the divisor.
    pub fn apply(&self, lhs: Value, rhs: Value) -> Result<Value, EvalError> {
        let value = match self {
            Operator::Add => {
                let (a, b) = self.ints(lhs, rhs)?;
                Value::Int(a.checked_add(b).ok_or_else(|| self.overflow(a, b))?)
            }
            Operator::Sub => {
                let (a, b) = self.ints(lhs, rhs)?;
                Value::Int(a.checked_sub(b).ok_or_else(|| self.overflow(a, b))?)
            }
            Operator::Mod => {
                let (a, b) = self.ints(lhs, rhs)?;
                if b == 0 {
                    return Err(EvalError::ModuloByZero { dividend: a });
                }
                let r = a.checked_rem(b).ok_or_else(|| self.overflow(a, b))?;
                if r != 0 && (r < 0) != (b < 0) {
                    Value::Int(r + b)
                } else {
                    Value::Int(r)
                }
            }
            Operator::Eq => self.compare(lhs, rhs, |a, b| a == b)?,
            Operator::Ne => self.compare(lhs, rhs, |a, b| a != b)?,
            Operator::Ge => self.compare(lhs, rhs, |a, b| a >= b)?,
            Operator::Le => self.compare(lhs, rhs, |a, b| a <= b)?,
            Operator::Gt => self.compare(lhs, rhs, |a, b| a > b)?,
            Operator::Lt => self.compare(lhs, rhs, |a, b| a < b)?,
            Operator::And => {
                let (a, b) = (self.expect_bool(lhs)?, self.expect_bool(rhs)?);
                Value::Bool(a && b)
            }
            Operator::Or => {
                let (a, b) = (self.expect_bool(lhs)?, self.expect_bool(rhs)?);
                Value::Bool(a || b)
            }
        };
        Ok(value)
    }

    fn compare(
        &self,
        lhs: Value,
        rhs: Value,
        cmp: impl FnOnce(i64, i64) -> bool,
    ) -> Result<Value, EvalError> {
        let (a, b) = self.ints(lhs, rhs)?;
        Ok(Value::Bool(cmp(a, b)))
    }

    fn ints(&self, lhs: Value, rhs: Value) -> Result<(i64, i64), EvalError> {
        Ok((self.expect_int(lhs)?, self.expect_int(rhs)?))
    }

    fn overflow(&self, lhs: i64, rhs: i64) -> EvalError {
        EvalError::Overflow {
            lhs,
            operator: self.symbol(),
            rhs,
        }
    }

    fn expect_int(&self, value: Value) -> Result<i64, EvalError> {
        value.as_int().ok_or(EvalError::TypeMismatch {
            operator: self.symbol(),
            expected: ValueType::Int,
            found: value.value_type(),
        })
    }

    fn expect_bool(&self, value: Value) -> Result<bool, EvalError> {
        value.as_bool().ok_or(EvalError::TypeMismatch {
            operator: self.symbol(),
            expected: ValueType::Bool,
            found: value.value_type(),
        })
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(op: Operator, a: i64, b: i64) -> Result<Value, EvalError> {
        op.apply(Value::Int(a), Value::Int(b))
    }

    #[test]
    fn families_partition_all_operators() {
        let total = Operator::INTEGER.len() + Operator::COMPARISON.len() + Operator::BOOLEAN.len();
        assert_eq!(total, Operator::ALL.len());
        assert!(Operator::INTEGER
            .iter()
            .all(|op| op.family() == OperatorFamily::Integer));
        assert!(Operator::COMPARISON
            .iter()
            .all(|op| op.family() == OperatorFamily::Comparison));
        assert!(Operator::BOOLEAN
            .iter()
            .all(|op| op.family() == OperatorFamily::Boolean));
    }

    #[test]
    fn symbols_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol("*"), None);
    }

    #[test]
    fn integer_operators() {
        assert_eq!(int(Operator::Add, 1900, 4), Ok(Value::Int(1904)));
        assert_eq!(int(Operator::Sub, 4, 1900), Ok(Value::Int(-1896)));
        assert_eq!(int(Operator::Mod, 1900, 400), Ok(Value::Int(300)));
    }

    #[test]
    fn modulo_is_floored() {
        assert_eq!(int(Operator::Mod, -7, 3), Ok(Value::Int(2)));
        assert_eq!(int(Operator::Mod, 7, -3), Ok(Value::Int(-2)));
        assert_eq!(int(Operator::Mod, -6, 3), Ok(Value::Int(0)));
    }

    #[test]
    fn modulo_by_zero_is_reported() {
        assert_eq!(
            int(Operator::Mod, 2004, 0),
            Err(EvalError::ModuloByZero { dividend: 2004 })
        );
    }

    #[test]
    fn overflow_is_reported() {
        assert!(matches!(
            int(Operator::Add, i64::MAX, 1),
            Err(EvalError::Overflow { operator: "+", .. })
        ));
        assert!(matches!(
            int(Operator::Mod, i64::MIN, -1),
            Err(EvalError::Overflow { operator: "%", .. })
        ));
    }

    #[test]
    fn comparisons() {
        assert_eq!(int(Operator::Eq, 4, 4), Ok(Value::Bool(true)));
        assert_eq!(int(Operator::Ne, 4, 4), Ok(Value::Bool(false)));
        assert_eq!(int(Operator::Ge, 4, 4), Ok(Value::Bool(true)));
        assert_eq!(int(Operator::Le, 5, 4), Ok(Value::Bool(false)));
        assert_eq!(int(Operator::Gt, 5, 4), Ok(Value::Bool(true)));
        assert_eq!(int(Operator::Lt, 5, 4), Ok(Value::Bool(false)));
    }

    #[test]
    fn combinators() {
        let t = Value::Bool(true);
        let f = Value::Bool(false);
        assert_eq!(Operator::And.apply(t, f), Ok(f));
        assert_eq!(Operator::Or.apply(t, f), Ok(t));
    }

    #[test]
    fn type_mismatch_is_reported() {
        assert_eq!(
            Operator::And.apply(Value::Int(1), Value::Bool(true)),
            Err(EvalError::TypeMismatch {
                operator: "and",
                expected: ValueType::Bool,
                found: ValueType::Int,
            })
        );
        assert!(Operator::Lt.apply(Value::Bool(true), Value::Int(1)).is_err());
    }

    #[test]
    fn result_and_operand_types() {
        assert_eq!(Operator::Mod.result_type(), ValueType::Int);
        assert_eq!(Operator::Eq.operand_type(), ValueType::Int);
        assert_eq!(Operator::Eq.result_type(), ValueType::Bool);
        assert_eq!(Operator::Or.operand_type(), ValueType::Bool);
    }
}
