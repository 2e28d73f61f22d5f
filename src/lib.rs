//! # dynsql: fluent SQL criteria construction and rendering
//!
//! Compose arbitrarily nested boolean conditions through a closure-based
//! builder DSL, then render them deterministically into a parameterized SQL
//! fragment plus an ordered table of bound values. Placeholders use the
//! `#{parameters.pN}` wire format with stable left-to-right numbering, even
//! across EXISTS subqueries.
//!
//! ```
//! use dynsql::{is_equal_to, select};
//!
//! let statement = select(["id", "name"], |s| {
//!     s.from("users");
//!     s.where_(|w| {
//!         w.cond("active", is_equal_to(true));
//!         w.or(|w| w.cond("role", is_equal_to("admin")));
//!     });
//! })?
//! .render();
//!
//! assert_eq!(
//!     statement.select_statement,
//!     "select id, name from users where active = #{parameters.p1} or role = #{parameters.p2}",
//! );
//! # Ok::<(), dynsql::QueryBuildError>(())
//! ```
//!
//! The crate builds statements; it never executes them. Hand the rendered
//! text and parameter table to whatever executor owns the connection.

pub mod criteria;
pub mod error;
pub mod params;
pub mod render;
pub mod schema;
pub mod select;


pub use criteria::{
    criteria, is_between, is_equal_to, is_greater_than, is_greater_than_or_equal_to, is_in,
    is_less_than, is_less_than_or_equal_to, is_like, is_not_between, is_not_equal_to, is_not_in,
    is_not_like, is_not_null, is_null, BetweenBuilder, ComparisonOperator, Condition,
    CriteriaBuilder, Criterion, OperandArity, Predicate,
};
pub use error::{BuildResult, QueryBuildError};
pub use params::{format_parameter_key, format_placeholder, Parameters, PARAMETER_PREFIX};
pub use render::{render_criterion, Fragment};
pub use schema::{SqlColumn, SqlTable};
pub use select::{
    select, OrderDirection, Projection, SelectBuilder, SelectModel, SelectStatement, SortSpec,
};
