//! Deterministic SQL rendering
//!
//! A single depth-first, left-to-right traversal turns a finalized criterion
//! tree into SQL text and an ordered parameter table. The parameter index is
//! threaded explicitly through every call, so rendering is a pure function
//! of the tree and the starting index: the same inputs always produce the
//! same text and the same table.
//!
//! An EXISTS subquery renders its inner statement at the traversal's current
//! index and the outer traversal resumes past everything the inner statement
//! consumed, which keeps numbering global and left-to-right across nesting.

use serde_json::Value;

use crate::criteria::{ComparisonOperator, Criterion, Predicate};
use crate::params::{format_parameter_key, format_placeholder, Parameters};
use crate::select::{OrderDirection, Projection, SelectModel, SelectStatement};

/// A rendered criteria fragment: SQL text, bound parameters, and the next
/// free parameter index
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub sql: String,
    pub parameters: Parameters,
    pub next_index: usize,
}

/// Render a criterion tree with parameter numbering starting at the given
/// 1-based index
pub fn render_criterion(criterion: &Criterion, start_index: usize) -> Fragment {
    let mut sql = String::new();
    let mut parameters = Parameters::new();
    let next_index = render_node(criterion, start_index, &mut sql, &mut parameters);
    Fragment {
        sql,
        parameters,
        next_index,
    }
}

fn render_node(
    criterion: &Criterion,
    index: usize,
    sql: &mut String,
    parameters: &mut Parameters,
) -> usize {
    match criterion {
        Criterion::Predicate(predicate) => render_predicate(predicate, index, sql, parameters),
        Criterion::And(left, right) => {
            let index = render_node(left, index, sql, parameters);
            sql.push_str(" and ");
            render_node(right, index, sql, parameters)
        }
        Criterion::Or(left, right) => {
            let index = render_node(left, index, sql, parameters);
            sql.push_str(" or ");
            render_node(right, index, sql, parameters)
        }
        Criterion::Not(child) => {
            sql.push_str("not ");
            render_node(child, index, sql, parameters)
        }
        Criterion::Group(child) => {
            sql.push('(');
            let index = render_node(child, index, sql, parameters);
            sql.push(')');
            index
        }
        Criterion::Exists { negate, select } => {
            if *negate {
                sql.push_str("not exists (");
            } else {
                sql.push_str("exists (");
            }
            let index = select.render_into(index, sql, parameters);
            sql.push(')');
            index
        }
    }
}

fn render_predicate(
    predicate: &Predicate,
    mut index: usize,
    sql: &mut String,
    parameters: &mut Parameters,
) -> usize {
    sql.push_str(&predicate.column.to_string());
    sql.push(' ');

    match predicate.operator {
        ComparisonOperator::IsNull | ComparisonOperator::IsNotNull => {
            sql.push_str(&predicate.operator.to_string());
        }
        ComparisonOperator::Between | ComparisonOperator::NotBetween => {
            let low = bind(index, &predicate.operands[0], parameters);
            let high = bind(index + 1, &predicate.operands[1], parameters);
            sql.push_str(&format!("{} {} and {}", predicate.operator, low, high));
            index += 2;
        }
        ComparisonOperator::In | ComparisonOperator::NotIn => {
            sql.push_str(&predicate.operator.to_string());
            sql.push_str(" (");
            for (position, operand) in predicate.operands.iter().enumerate() {
                if position > 0 {
                    sql.push_str(", ");
                }
                sql.push_str(&bind(index, operand, parameters));
                index += 1;
            }
            sql.push(')');
        }
        _ => {
            let placeholder = bind(index, &predicate.operands[0], parameters);
            sql.push_str(&format!("{} {}", predicate.operator, placeholder));
            index += 1;
        }
    }
    index
}

fn bind(index: usize, value: &Value, parameters: &mut Parameters) -> String {
    let key = format_parameter_key(index);
    let placeholder = format_placeholder(&key);
    tracing::trace!("binding parameter {} = {}", key, value);
    parameters.insert(key, value.clone());
    placeholder
}

impl SelectModel {
    /// Render the statement with parameter numbering starting at 1
    pub fn render(&self) -> SelectStatement {
        self.render_at(1).0
    }

    /// Render with an explicit starting parameter index, returning the
    /// statement and the next free index. Used when the statement embeds
    /// into an enclosing numbering sequence.
    pub fn render_at(&self, start_index: usize) -> (SelectStatement, usize) {
        let mut sql = String::new();
        let mut parameters = Parameters::new();
        let next_index = self.render_into(start_index, &mut sql, &mut parameters);
        tracing::debug!(
            "rendered select statement on {} with {} parameters",
            self.table(),
            parameters.len()
        );
        (
            SelectStatement {
                select_statement: sql,
                parameters,
            },
            next_index,
        )
    }

    pub(crate) fn render_into(
        &self,
        index: usize,
        sql: &mut String,
        parameters: &mut Parameters,
    ) -> usize {
        sql.push_str("select ");
        if self.distinct {
            sql.push_str("distinct ");
        }
        match &self.projection {
            Projection::Star => sql.push('*'),
            Projection::Columns(columns) => {
                let list: Vec<String> = columns.iter().map(|column| column.to_string()).collect();
                sql.push_str(&list.join(", "));
            }
        }

        sql.push_str(" from ");
        sql.push_str(&self.table.to_string());

        let mut index = index;
        if let Some(criterion) = &self.where_clause {
            sql.push_str(" where ");
            index = render_node(criterion, index, sql, parameters);
        }

        if !self.group_by.is_empty() {
            sql.push_str(" group by ");
            let list: Vec<String> = self
                .group_by
                .iter()
                .map(|column| column.to_string())
                .collect();
            sql.push_str(&list.join(", "));
        }

        if !self.order_by.is_empty() {
            sql.push_str(" order by ");
            for (position, spec) in self.order_by.iter().enumerate() {
                if position > 0 {
                    sql.push_str(", ");
                }
                sql.push_str(&spec.column.to_string());
                if spec.direction == OrderDirection::Desc {
                    sql.push_str(" desc");
                }
            }
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" limit {}", limit));
        }
        if let Some(offset) = self.offset {
            sql.push_str(&format!(" offset {}", offset));
        }

        index
    }
}
