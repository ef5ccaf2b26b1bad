//! Column：结果列片段。

use crate::error::Result;
use crate::sqlizer::Sqlizer;
use crate::value::SqlValue;

/// 一个结果列，按字面输出名字（或表达式），不带参数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Sqlizer for Column {
    fn to_sql(&self) -> Result<(String, Vec<SqlValue>)> {
        Ok((self.name.clone(), Vec::new()))
    }
}
