//! Criterion tree model
//!
//! A finalized criteria tree is a closed set of node kinds over exclusively
//! owned subtrees. The renderer matches exhaustively, so adding a node kind
//! forces a renderer update at compile time. Trees contain no closures:
//! value pipelines have already run by the time a predicate enters a tree.

use serde_json::Value;

use crate::schema::SqlColumn;
use crate::select::SelectModel;

use super::operator::ComparisonOperator;

/// Atomic predicate: a column compared against already-transformed operands
///
/// Invariant: the operand count satisfies the operator's arity. Builders
/// enforce this by dropping incomplete conditions before they reach a tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub(crate) column: SqlColumn,
    pub(crate) operator: ComparisonOperator,
    pub(crate) operands: Vec<Value>,
}

impl Predicate {
    pub(crate) fn new(column: SqlColumn, operator: ComparisonOperator, operands: Vec<Value>) -> Self {
        Self {
            column,
            operator,
            operands,
        }
    }

    pub fn column(&self) -> &SqlColumn {
        &self.column
    }

    pub fn operator(&self) -> ComparisonOperator {
        self.operator
    }

    pub fn operands(&self) -> &[Value] {
        &self.operands
    }
}

/// One node of a finalized criteria tree
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// Atomic column/operator/operands predicate
    Predicate(Predicate),
    /// Binary conjunction, joined with ` and `, no added parentheses
    And(Box<Criterion>, Box<Criterion>),
    /// Binary disjunction, joined with ` or `, no added parentheses
    Or(Box<Criterion>, Box<Criterion>),
    /// Unary negation; the child is atomic or grouped by construction
    Not(Box<Criterion>),
    /// Explicit parenthesization, applied unconditionally when rendered
    Group(Box<Criterion>),
    /// EXISTS / NOT EXISTS over an independent select statement
    Exists {
        negate: bool,
        select: Box<SelectModel>,
    },
}

impl Criterion {
    pub(crate) fn and(left: Criterion, right: Criterion) -> Criterion {
        Criterion::And(Box::new(left), Box::new(right))
    }

    pub(crate) fn or(left: Criterion, right: Criterion) -> Criterion {
        Criterion::Or(Box::new(left), Box::new(right))
    }

    /// Whether this node is a bare binary combinator, which renders without
    /// its own parentheses
    pub(crate) fn is_compound(&self) -> bool {
        matches!(self, Criterion::And(_, _) | Criterion::Or(_, _))
    }

    /// Prepare a block result for use as a single operand in an enclosing
    /// chain: multi-member blocks take parentheses, everything else stands
    /// alone.
    pub(crate) fn into_operand(self) -> Criterion {
        if self.is_compound() {
            Criterion::Group(Box::new(self))
        } else {
            self
        }
    }
}
