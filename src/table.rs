//! Table：FROM 子句里的数据源。

use crate::error::Result;
use crate::sqlizer::Sqlizer;
use crate::value::SqlValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Sqlizer for Table {
    fn to_sql(&self) -> Result<(String, Vec<SqlValue>)> {
        Ok((self.name.clone(), Vec::new()))
    }
}
