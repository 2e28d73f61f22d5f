//! Conditions and their value transform pipeline
//!
//! A condition pairs an operator with raw operand values and an ordered
//! pipeline of map/filter steps. The pipeline runs per operand when the
//! condition is declared into a builder; a filter rejecting an operand drops
//! it, and a condition whose surviving operands no longer satisfy the
//! operator's arity is dropped entirely.

use std::fmt;

use serde_json::Value;

use crate::schema::SqlColumn;

use super::operator::{ComparisonOperator, OperandArity};
use super::tree::Predicate;

enum Transform {
    Map(Box<dyn Fn(Value) -> Value>),
    Filter(Box<dyn Fn(&Value) -> bool>),
}

/// An operator with raw operands and a value pipeline, not yet attached to
/// a column
pub struct Condition {
    operator: ComparisonOperator,
    operands: Vec<Value>,
    transforms: Vec<Transform>,
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition")
            .field("operator", &self.operator)
            .field("operands", &self.operands)
            .field("transforms", &self.transforms.len())
            .finish()
    }
}

impl Condition {
    fn new(operator: ComparisonOperator, operands: Vec<Value>) -> Self {
        Self {
            operator,
            operands,
            transforms: Vec::new(),
        }
    }

    /// Append a value transform to the pipeline
    pub fn map<F>(mut self, f: F) -> Self
    where
        F: Fn(Value) -> Value + 'static,
    {
        self.transforms.push(Transform::Map(Box::new(f)));
        self
    }

    /// Append a value predicate to the pipeline
    pub fn filter<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> bool + 'static,
    {
        self.transforms.push(Transform::Filter(Box::new(f)));
        self
    }

    /// Run the pipeline and attach the column. Returns `None` when the
    /// surviving operands no longer satisfy the operator's arity.
    pub(crate) fn into_predicate(self, column: SqlColumn) -> Option<Predicate> {
        let Condition {
            operator,
            operands,
            transforms,
        } = self;

        let operands: Vec<Value> = operands
            .into_iter()
            .filter_map(|value| apply_pipeline(&transforms, value))
            .collect();

        let complete = match operator.arity() {
            OperandArity::Nullary => true,
            OperandArity::Unary => operands.len() == 1,
            OperandArity::Binary => operands.len() == 2,
            OperandArity::Variadic => !operands.is_empty(),
        };

        if complete {
            Some(Predicate::new(column, operator, operands))
        } else {
            None
        }
    }
}

fn apply_pipeline(transforms: &[Transform], mut value: Value) -> Option<Value> {
    for transform in transforms {
        match transform {
            Transform::Map(f) => value = f(value),
            Transform::Filter(keep) => {
                if !keep(&value) {
                    return None;
                }
            }
        }
    }
    Some(value)
}

/// Equality condition
pub fn is_equal_to<T: Into<Value>>(value: T) -> Condition {
    Condition::new(ComparisonOperator::Equal, vec![value.into()])
}

/// Inequality condition
pub fn is_not_equal_to<T: Into<Value>>(value: T) -> Condition {
    Condition::new(ComparisonOperator::NotEqual, vec![value.into()])
}

pub fn is_greater_than<T: Into<Value>>(value: T) -> Condition {
    Condition::new(ComparisonOperator::GreaterThan, vec![value.into()])
}

pub fn is_greater_than_or_equal_to<T: Into<Value>>(value: T) -> Condition {
    Condition::new(ComparisonOperator::GreaterThanOrEqual, vec![value.into()])
}

pub fn is_less_than<T: Into<Value>>(value: T) -> Condition {
    Condition::new(ComparisonOperator::LessThan, vec![value.into()])
}

pub fn is_less_than_or_equal_to<T: Into<Value>>(value: T) -> Condition {
    Condition::new(ComparisonOperator::LessThanOrEqual, vec![value.into()])
}

/// LIKE condition; the pattern is bound as a parameter, never inlined
pub fn is_like<T: Into<Value>>(pattern: T) -> Condition {
    Condition::new(ComparisonOperator::Like, vec![pattern.into()])
}

pub fn is_not_like<T: Into<Value>>(pattern: T) -> Condition {
    Condition::new(ComparisonOperator::NotLike, vec![pattern.into()])
}

/// First half of a BETWEEN condition; complete it with [`BetweenBuilder::and`]
pub fn is_between<T: Into<Value>>(start: T) -> BetweenBuilder {
    BetweenBuilder {
        operator: ComparisonOperator::Between,
        start: start.into(),
    }
}

/// First half of a NOT BETWEEN condition
pub fn is_not_between<T: Into<Value>>(start: T) -> BetweenBuilder {
    BetweenBuilder {
        operator: ComparisonOperator::NotBetween,
        start: start.into(),
    }
}

/// Intermediate state of a BETWEEN condition waiting for its upper bound
#[derive(Debug)]
pub struct BetweenBuilder {
    operator: ComparisonOperator,
    start: Value,
}

impl BetweenBuilder {
    pub fn and<T: Into<Value>>(self, end: T) -> Condition {
        Condition::new(self.operator, vec![self.start, end.into()])
    }
}

/// Membership condition over a list of values
pub fn is_in<T, I>(values: I) -> Condition
where
    T: Into<Value>,
    I: IntoIterator<Item = T>,
{
    Condition::new(
        ComparisonOperator::In,
        values.into_iter().map(Into::into).collect(),
    )
}

pub fn is_not_in<T, I>(values: I) -> Condition
where
    T: Into<Value>,
    I: IntoIterator<Item = T>,
{
    Condition::new(
        ComparisonOperator::NotIn,
        values.into_iter().map(Into::into).collect(),
    )
}

pub fn is_null() -> Condition {
    Condition::new(ComparisonOperator::IsNull, Vec::new())
}

pub fn is_not_null() -> Condition {
    Condition::new(ComparisonOperator::IsNotNull, Vec::new())
}
