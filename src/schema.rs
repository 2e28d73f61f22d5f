//! Table and column reference tokens
//!
//! Columns and tables are opaque renderable names. Each token knows how to
//! print itself; no schema metadata is resolved here.

use std::fmt;

/// A renderable column reference, optionally qualified with a table name or
/// alias
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlColumn {
    name: String,
    qualifier: Option<String>,
}

impl SqlColumn {
    /// Create an unqualified column reference
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            qualifier: None,
        }
    }

    /// Qualify the column with a table name or alias
    pub fn qualified_with<S: Into<String>>(mut self, qualifier: S) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for SqlColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.qualifier {
            Some(qualifier) => write!(f, "{}.{}", qualifier, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

impl From<&str> for SqlColumn {
    fn from(name: &str) -> Self {
        SqlColumn::new(name)
    }
}

impl From<String> for SqlColumn {
    fn from(name: String) -> Self {
        SqlColumn::new(name)
    }
}

/// A renderable table reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlTable {
    name: String,
}

impl SqlTable {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for SqlTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for SqlTable {
    fn from(name: &str) -> Self {
        SqlTable::new(name)
    }
}

impl From<String> for SqlTable {
    fn from(name: String) -> Self {
        SqlTable::new(name)
    }
}
