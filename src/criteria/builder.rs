//! Closure-driven criteria accumulation
//!
//! Each nested block scope owns a fresh builder; the parent combines the
//! block's resulting subtree in declaration order. Absence propagates
//! bottom-up while the tree is assembled: a condition whose value pipeline
//! filtered out a required operand contributes nothing, a combinator with a
//! vanished operand degrades to the surviving one, and `not`/`group` over
//! nothing vanish. The renderer never sees an absent child.
//!
//! A block resolving to a bare and/or chain is wrapped in a group at the
//! moment it becomes an operand of an enclosing chain, so multi-member
//! nested blocks parenthesize and `not` never applies to an unparenthesized
//! and/or.

use crate::error::QueryBuildError;
use crate::schema::SqlColumn;
use crate::select::SelectBuilder;

use super::condition::Condition;
use super::tree::Criterion;

/// Accumulates one criteria subtree in declaration order
///
/// Two states: empty, or holding a root subtree. The first declaration sets
/// the root; later `and`/`or` blocks combine with it, and later bare
/// declarations combine with an implicit `and`.
#[derive(Debug, Default)]
pub struct CriteriaBuilder {
    root: Option<Criterion>,
    error: Option<QueryBuildError>,
}

impl CriteriaBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Declare a condition on a column
    pub fn cond<C>(&mut self, column: C, condition: Condition)
    where
        C: Into<SqlColumn>,
    {
        let column = column.into();
        match condition.into_predicate(column) {
            Some(predicate) => self.declare(Criterion::Predicate(predicate)),
            None => tracing::trace!("condition dropped by its value pipeline"),
        }
    }

    /// Combine the current subtree with a nested block via `and`
    pub fn and<F>(&mut self, block: F)
    where
        F: FnOnce(&mut CriteriaBuilder),
    {
        self.combine(block, Criterion::and);
    }

    /// Combine the current subtree with a nested block via `or`
    pub fn or<F>(&mut self, block: F)
    where
        F: FnOnce(&mut CriteriaBuilder),
    {
        self.combine(block, Criterion::or);
    }

    /// Declare a negated nested block
    ///
    /// A multi-member block is grouped before negation; `not` over a single
    /// condition stays unparenthesized.
    pub fn not<F>(&mut self, block: F)
    where
        F: FnOnce(&mut CriteriaBuilder),
    {
        if let Some(subtree) = self.collect(block) {
            self.declare(Criterion::Not(Box::new(subtree.into_operand())));
        }
    }

    /// Declare an explicitly parenthesized nested block
    pub fn group<F>(&mut self, block: F)
    where
        F: FnOnce(&mut CriteriaBuilder),
    {
        if let Some(subtree) = self.collect(block) {
            self.declare(Criterion::Group(Box::new(subtree)));
        }
    }

    /// Declare an EXISTS condition over an independent select statement
    pub fn exists<F>(&mut self, subselect: F)
    where
        F: FnOnce(&mut SelectBuilder),
    {
        self.subquery(subselect, false);
    }

    /// Declare a NOT EXISTS condition over an independent select statement
    pub fn not_exists<F>(&mut self, subselect: F)
    where
        F: FnOnce(&mut SelectBuilder),
    {
        self.subquery(subselect, true);
    }

    fn subquery<F>(&mut self, subselect: F, negate: bool)
    where
        F: FnOnce(&mut SelectBuilder),
    {
        let mut builder = SelectBuilder::new();
        subselect(&mut builder);
        match builder.build() {
            Ok(select) => self.declare(Criterion::Exists {
                negate,
                select: Box::new(select),
            }),
            Err(err) => self.fail(err),
        }
    }

    fn declare(&mut self, criterion: Criterion) {
        self.root = Some(match self.root.take() {
            None => criterion,
            Some(root) => Criterion::and(root, criterion.into_operand()),
        });
    }

    fn combine<F>(&mut self, block: F, join: fn(Criterion, Criterion) -> Criterion)
    where
        F: FnOnce(&mut CriteriaBuilder),
    {
        if let Some(subtree) = self.collect(block) {
            let operand = subtree.into_operand();
            self.root = Some(match self.root.take() {
                None => operand,
                Some(root) => join(root, operand),
            });
        }
    }

    fn collect<F>(&mut self, block: F) -> Option<Criterion>
    where
        F: FnOnce(&mut CriteriaBuilder),
    {
        let mut child = CriteriaBuilder::new();
        block(&mut child);
        if let Some(err) = child.error.take() {
            self.fail(err);
        }
        child.root
    }

    fn fail(&mut self, err: QueryBuildError) {
        // first construction error wins
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    pub(crate) fn into_parts(self) -> (Option<Criterion>, Option<QueryBuildError>) {
        (self.root, self.error)
    }
}

/// Collect a standalone criteria tree from a configuration block
///
/// Returns `None` when every declared condition was dropped by its value
/// pipeline. The tree can be rendered on its own with
/// [`render_criterion`](crate::render::render_criterion) for embedding into
/// an externally assembled statement.
pub fn criteria<F>(block: F) -> Result<Option<Criterion>, QueryBuildError>
where
    F: FnOnce(&mut CriteriaBuilder),
{
    let mut builder = CriteriaBuilder::new();
    block(&mut builder);
    let (root, error) = builder.into_parts();
    match error {
        Some(err) => Err(err),
        None => Ok(root),
    }
}
