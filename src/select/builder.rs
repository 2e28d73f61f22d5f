//! Select statement construction
//!
//! A thin façade around the criteria engine. The builder collects the
//! projection, base table, where-criteria chain, and ordering/paging
//! clauses, then finalizes into an immutable [`SelectModel`]. Whole-block
//! criteria semantics match the nested builder: each `where_`/`and`/`or`
//! block contributes a single operand, and a multi-member block is
//! parenthesized when it joins the chain.

use crate::criteria::{Criterion, CriteriaBuilder};
use crate::error::{BuildResult, QueryBuildError};
use crate::schema::{SqlColumn, SqlTable};

use super::model::{Projection, SelectModel, SortSpec};

/// Mutable construction state for one select statement
#[derive(Debug)]
pub struct SelectBuilder {
    projection: Projection,
    distinct: bool,
    table: Option<SqlTable>,
    where_root: Option<Criterion>,
    where_chained: bool,
    group_by: Vec<SqlColumn>,
    order_by: Vec<SortSpec>,
    limit: Option<u64>,
    offset: Option<u64>,
    error: Option<QueryBuildError>,
}

impl SelectBuilder {
    pub(crate) fn new() -> Self {
        Self {
            projection: Projection::Star,
            distinct: false,
            table: None,
            where_root: None,
            where_chained: false,
            group_by: Vec::new(),
            order_by: Vec::new(),
            limit: None,
            offset: None,
            error: None,
        }
    }

    /// Replace the projection with an explicit column list
    pub fn columns<I, C>(&mut self, columns: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<SqlColumn>,
    {
        self.projection = Projection::columns(columns);
    }

    pub fn distinct(&mut self) {
        self.distinct = true;
    }

    /// Set the base table; required before the statement can be finalized
    pub fn from<T: Into<SqlTable>>(&mut self, table: T) {
        self.table = Some(table.into());
    }

    /// Open the where-criteria chain with a block
    pub fn where_<F>(&mut self, block: F)
    where
        F: FnOnce(&mut CriteriaBuilder),
    {
        self.chain(block, Criterion::and);
    }

    /// Extend the where-criteria chain with an `and` block
    pub fn and<F>(&mut self, block: F)
    where
        F: FnOnce(&mut CriteriaBuilder),
    {
        self.chain(block, Criterion::and);
    }

    /// Extend the where-criteria chain with an `or` block
    pub fn or<F>(&mut self, block: F)
    where
        F: FnOnce(&mut CriteriaBuilder),
    {
        self.chain(block, Criterion::or);
    }

    pub fn group_by<I, C>(&mut self, columns: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<SqlColumn>,
    {
        self.group_by.extend(columns.into_iter().map(Into::into));
    }

    /// Add an ascending ORDER BY entry
    pub fn order_by<C: Into<SqlColumn>>(&mut self, column: C) {
        self.order_by.push(SortSpec::asc(column));
    }

    /// Add a descending ORDER BY entry
    pub fn order_by_desc<C: Into<SqlColumn>>(&mut self, column: C) {
        self.order_by.push(SortSpec::desc(column));
    }

    pub fn limit(&mut self, limit: u64) {
        self.limit = Some(limit);
    }

    pub fn offset(&mut self, offset: u64) {
        self.offset = Some(offset);
    }

    fn chain<F>(&mut self, block: F, join: fn(Criterion, Criterion) -> Criterion)
    where
        F: FnOnce(&mut CriteriaBuilder),
    {
        let mut child = CriteriaBuilder::new();
        block(&mut child);
        let (block_root, error) = child.into_parts();
        if let Some(err) = error {
            self.fail(err);
        }
        let block_root = match block_root {
            Some(root) => root,
            None => return,
        };
        self.where_root = Some(match self.where_root.take() {
            // the opening block is kept raw so a lone chain renders unparenthesized
            None => block_root,
            Some(existing) => {
                // on the first extension the opening block becomes an operand
                let left = if self.where_chained {
                    existing
                } else {
                    existing.into_operand()
                };
                self.where_chained = true;
                join(left, block_root.into_operand())
            }
        });
    }

    fn fail(&mut self, err: QueryBuildError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    /// Finalize into an immutable model, surfacing any construction-order
    /// error captured while the closures ran
    pub fn build(self) -> BuildResult<SelectModel> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let table = self.table.ok_or(QueryBuildError::MissingFromClause)?;
        if let Projection::Columns(columns) = &self.projection {
            if columns.is_empty() {
                return Err(QueryBuildError::EmptyProjection);
            }
        }
        Ok(SelectModel {
            projection: self.projection,
            distinct: self.distinct,
            table,
            where_clause: self.where_root,
            group_by: self.group_by,
            order_by: self.order_by,
            limit: self.limit,
            offset: self.offset,
        })
    }
}

/// Build a select statement model through a configuration closure
pub fn select<P, F>(projection: P, configure: F) -> BuildResult<SelectModel>
where
    P: Into<Projection>,
    F: FnOnce(&mut SelectBuilder),
{
    let mut builder = SelectBuilder::new();
    builder.projection = projection.into();
    configure(&mut builder);
    builder.build()
}
