//! Select statement façade
//!
//! Thin statement assembly around the criteria engine: projection, FROM,
//! the WHERE criteria chain, GROUP BY, ORDER BY, LIMIT and OFFSET.
//! Execution, joins, and unions are out of scope; the rendered statement
//! and its parameter table are handed to the caller as plain values.

pub mod builder;
pub mod model;

pub use builder::{select, SelectBuilder};
pub use model::{OrderDirection, Projection, SelectModel, SelectStatement, SortSpec};
