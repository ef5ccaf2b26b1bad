//! Join：`JOIN` / `LEFT JOIN` / `RIGHT JOIN` 片段。

use crate::error::Result;
use crate::sqlizer::Sqlizer;
use crate::value::SqlValue;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinType {
    Join,
    LeftJoin,
    RightJoin,
}

impl JoinType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Join => "JOIN",
            Self::LeftJoin => "LEFT JOIN",
            Self::RightJoin => "RIGHT JOIN",
        }
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 关键字与调用方给出的子句直接拼接，例如 `LEFT JOIN orders ON orders.user_id = users.id`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    join_type: JoinType,
    clause: String,
}

impl Join {
    pub fn new(join_type: JoinType, clause: impl Into<String>) -> Self {
        Self {
            join_type,
            clause: clause.into(),
        }
    }

    pub fn join_type(&self) -> JoinType {
        self.join_type
    }

    pub fn clause(&self) -> &str {
        &self.clause
    }
}

impl Sqlizer for Join {
    fn to_sql(&self) -> Result<(String, Vec<SqlValue>)> {
        Ok((format!("{} {}", self.join_type, self.clause), Vec::new()))
    }
}
