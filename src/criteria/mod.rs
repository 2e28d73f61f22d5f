//! Criteria model and construction DSL
//!
//! Conditions, the criterion tree, and the closure-driven builder that
//! assembles trees in declaration order.

pub mod builder;
pub mod condition;
pub mod operator;
pub mod tree;

pub use builder::{criteria, CriteriaBuilder};
pub use condition::{
    is_between, is_equal_to, is_greater_than, is_greater_than_or_equal_to, is_in,
    is_less_than, is_less_than_or_equal_to, is_like, is_not_between, is_not_equal_to, is_not_in,
    is_not_like, is_not_null, is_null, BetweenBuilder, Condition,
};
pub use operator::{ComparisonOperator, OperandArity};
pub use tree::{Criterion, Predicate};
