//! sequel：拼接 SELECT 语句，并把通用占位符 `?` 改写成驱动需要的方言（`$n`、`:n`）。
//!
//! 注意：占位符改写不识别引号与转义，字面量里的 `?` 也会被替换，`??` 会变成两个占位符。

pub mod column;
pub mod error;
#[cfg(test)]
mod fragment_tests;
pub mod join;
pub mod macros;
pub mod placeholder;
#[cfg(test)]
mod placeholder_tests;
pub mod runner;
pub mod select;
pub mod sqlizer;
pub mod statement;
mod string_builder;
pub mod table;
pub mod value;

pub use crate::column::Column;
pub use crate::error::{Error, Result};
pub use crate::join::{Join, JoinType};
pub use crate::macros::IntoStrings;
pub use crate::placeholder::{
    COLON, DOLLAR, DefaultFormatGuard, MARKER, PlaceholderFormat, QUESTION,
    default_placeholder_format, rewrite, set_default_placeholder_format,
    set_default_placeholder_format_scoped,
};
pub use crate::runner::{BaseRunner, QueryRower, exec_with, query_row_with, query_with};
pub use crate::select::SelectBuilder;
pub use crate::sqlizer::{Expr, Sqlizer, expr};
pub use crate::statement::{StatementBuilder, select};
pub use crate::table::Table;
pub use crate::value::SqlValue;
