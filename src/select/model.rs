//! Finalized select statement model

use serde::Serialize;

use crate::criteria::Criterion;
use crate::params::Parameters;
use crate::schema::{SqlColumn, SqlTable};

/// Column list of a select statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// `select *`
    Star,
    /// An explicit column list
    Columns(Vec<SqlColumn>),
}

impl Projection {
    pub fn star() -> Self {
        Projection::Star
    }

    pub fn columns<I, C>(columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<SqlColumn>,
    {
        Projection::Columns(columns.into_iter().map(Into::into).collect())
    }
}

impl<C: Into<SqlColumn>, const N: usize> From<[C; N]> for Projection {
    fn from(columns: [C; N]) -> Self {
        Projection::columns(columns)
    }
}

impl<C: Into<SqlColumn>> From<Vec<C>> for Projection {
    fn from(columns: Vec<C>) -> Self {
        Projection::columns(columns)
    }
}

/// Sort direction for an ORDER BY entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

/// One ORDER BY entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub(crate) column: SqlColumn,
    pub(crate) direction: OrderDirection,
}

impl SortSpec {
    pub fn asc<C: Into<SqlColumn>>(column: C) -> Self {
        Self {
            column: column.into(),
            direction: OrderDirection::Asc,
        }
    }

    pub fn desc<C: Into<SqlColumn>>(column: C) -> Self {
        Self {
            column: column.into(),
            direction: OrderDirection::Desc,
        }
    }
}

/// An immutable, finalized select statement ready for rendering
///
/// Construction goes through [`SelectBuilder`](super::SelectBuilder), which
/// resolves criteria absence and surfaces construction-order errors, so a
/// model in hand always renders.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectModel {
    pub(crate) projection: Projection,
    pub(crate) distinct: bool,
    pub(crate) table: SqlTable,
    pub(crate) where_clause: Option<Criterion>,
    pub(crate) group_by: Vec<SqlColumn>,
    pub(crate) order_by: Vec<SortSpec>,
    pub(crate) limit: Option<u64>,
    pub(crate) offset: Option<u64>,
}

impl SelectModel {
    pub fn table(&self) -> &SqlTable {
        &self.table
    }

    pub fn where_clause(&self) -> Option<&Criterion> {
        self.where_clause.as_ref()
    }
}

/// A fully rendered select statement with its bound parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectStatement {
    pub select_statement: String,
    pub parameters: Parameters,
}
