//! StatementBuilder：携带占位符格式，产出各类语句 builder。

use crate::macros::{IntoStrings, collect_into_strings};
use crate::placeholder::{PlaceholderFormat, default_placeholder_format};
use crate::select::SelectBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementBuilder {
    placeholder_format: PlaceholderFormat,
}

impl StatementBuilder {
    /// 使用全局默认占位符格式（初始为 `?`）。
    pub fn new() -> Self {
        Self {
            placeholder_format: default_placeholder_format(),
        }
    }

    pub fn placeholder_format(&self) -> PlaceholderFormat {
        self.placeholder_format
    }

    /// 修改占位符格式，之后产出的 builder 都会使用它。
    pub fn set_placeholder_format(&mut self, format: PlaceholderFormat) -> &mut Self {
        self.placeholder_format = format;
        self
    }

    pub fn with_placeholder_format(mut self, format: PlaceholderFormat) -> Self {
        self.placeholder_format = format;
        self
    }

    pub fn select<T>(&self, columns: T) -> SelectBuilder
    where
        T: IntoStrings,
    {
        let mut sb = SelectBuilder::with_placeholder_format(self.placeholder_format);
        sb.columns(collect_into_strings(columns));
        sb
    }
}

impl Default for StatementBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// 用默认 `StatementBuilder` 开始一个 SELECT。
pub fn select<T>(columns: T) -> SelectBuilder
where
    T: IntoStrings,
{
    StatementBuilder::new().select(columns)
}
