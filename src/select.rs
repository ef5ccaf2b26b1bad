//! SelectBuilder：按顺序累积 SELECT 的各个部分，在 `to_sql` 时拼接并统一改写占位符。

use crate::column::Column;
use crate::error::{Error, Result};
use crate::join::{Join, JoinType};
use crate::macros::{IntoStrings, collect_into_strings};
use crate::placeholder::PlaceholderFormat;
use crate::runner::{BaseRunner, QueryRower, run_exec, run_query, run_query_row};
use crate::sqlizer::{Sqlizer, append_to_sql, expr};
use crate::string_builder::StringBuilder;
use crate::table::Table;
use crate::value::SqlValue;

#[derive(Debug, Clone, Default)]
pub struct SelectBuilder {
    placeholder_format: PlaceholderFormat,

    prefixes: Vec<Box<dyn Sqlizer>>,
    options: Vec<String>,
    columns: Vec<Box<dyn Sqlizer>>,
    from: Option<Box<dyn Sqlizer>>,
    joins: Vec<Box<dyn Sqlizer>>,
    where_parts: Vec<Box<dyn Sqlizer>>,
    group_by: Vec<String>,
    having_parts: Vec<Box<dyn Sqlizer>>,
    order_by: Vec<String>,
    limit: Option<u64>,
    offset: Option<u64>,
    suffixes: Vec<Box<dyn Sqlizer>>,
}

impl SelectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placeholder_format(format: PlaceholderFormat) -> Self {
        Self {
            placeholder_format: format,
            ..Self::default()
        }
    }

    pub fn placeholder_format(&self) -> PlaceholderFormat {
        self.placeholder_format
    }

    pub fn set_placeholder_format(&mut self, format: PlaceholderFormat) -> &mut Self {
        self.placeholder_format = format;
        self
    }

    /// 写在 SELECT 之前的片段，例如 `WITH ... AS (...)`。
    pub fn prefix(&mut self, part: impl Sqlizer + 'static) -> &mut Self {
        self.prefixes.push(Box::new(part));
        self
    }

    pub fn prefix_expr(
        &mut self,
        sql: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<SqlValue>>,
    ) -> &mut Self {
        self.prefix(expr(sql, args))
    }

    pub fn distinct(&mut self) -> &mut Self {
        self.options("DISTINCT")
    }

    /// SELECT 关键字后面的修饰，例如 `SQL_NO_CACHE`。
    pub fn options<T>(&mut self, options: T) -> &mut Self
    where
        T: IntoStrings,
    {
        self.options.extend(collect_into_strings(options));
        self
    }

    /// 追加结果列。
    pub fn columns<T>(&mut self, columns: T) -> &mut Self
    where
        T: IntoStrings,
    {
        for c in collect_into_strings(columns) {
            self.columns.push(Box::new(Column::new(c)));
        }
        self
    }

    /// 追加一个带参数的结果列，例如 `expr("COALESCE(nick, ?) AS nick", ["anonymous"])`。
    pub fn column(&mut self, column: impl Sqlizer + 'static) -> &mut Self {
        self.columns.push(Box::new(column));
        self
    }

    pub fn remove_columns(&mut self) -> &mut Self {
        self.columns.clear();
        self
    }

    pub fn from(&mut self, table: impl Into<String>) -> &mut Self {
        self.from = Some(Box::new(Table::new(table)));
        self
    }

    /// `FROM (<sub>) AS alias`；子查询的占位符与外层一起编号。
    pub fn from_select(&mut self, sub: SelectBuilder, alias: impl Into<String>) -> &mut Self {
        self.from = Some(Box::new(Aliased {
            sub,
            alias: alias.into(),
        }));
        self
    }

    pub fn join(&mut self, clause: impl Into<String>) -> &mut Self {
        self.join_with_type(JoinType::Join, clause)
    }

    pub fn left_join(&mut self, clause: impl Into<String>) -> &mut Self {
        self.join_with_type(JoinType::LeftJoin, clause)
    }

    pub fn right_join(&mut self, clause: impl Into<String>) -> &mut Self {
        self.join_with_type(JoinType::RightJoin, clause)
    }

    pub fn join_with_type(&mut self, join_type: JoinType, clause: impl Into<String>) -> &mut Self {
        self.joins.push(Box::new(Join::new(join_type, clause)));
        self
    }

    /// 追加 WHERE 条件，多个条件以 AND 连接。
    pub fn where_(&mut self, pred: impl Sqlizer + 'static) -> &mut Self {
        self.where_parts.push(Box::new(pred));
        self
    }

    pub fn where_expr(
        &mut self,
        sql: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<SqlValue>>,
    ) -> &mut Self {
        self.where_(expr(sql, args))
    }

    pub fn group_by<T>(&mut self, columns: T) -> &mut Self
    where
        T: IntoStrings,
    {
        self.group_by.extend(collect_into_strings(columns));
        self
    }

    /// HAVING 条件，多个条件以 AND 连接；只在有 GROUP BY 时才输出。
    pub fn having(&mut self, pred: impl Sqlizer + 'static) -> &mut Self {
        self.having_parts.push(Box::new(pred));
        self
    }

    pub fn having_expr(
        &mut self,
        sql: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<SqlValue>>,
    ) -> &mut Self {
        self.having(expr(sql, args))
    }

    pub fn order_by<T>(&mut self, columns: T) -> &mut Self
    where
        T: IntoStrings,
    {
        self.order_by.extend(collect_into_strings(columns));
        self
    }

    pub fn limit(&mut self, limit: u64) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    pub fn remove_limit(&mut self) -> &mut Self {
        self.limit = None;
        self
    }

    pub fn offset(&mut self, offset: u64) -> &mut Self {
        self.offset = Some(offset);
        self
    }

    pub fn remove_offset(&mut self) -> &mut Self {
        self.offset = None;
        self
    }

    /// 写在语句末尾的片段，例如 `FOR UPDATE`。
    pub fn suffix(&mut self, part: impl Sqlizer + 'static) -> &mut Self {
        self.suffixes.push(Box::new(part));
        self
    }

    pub fn suffix_expr(
        &mut self,
        sql: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<SqlValue>>,
    ) -> &mut Self {
        self.suffix(expr(sql, args))
    }

    /// 拼接出仍使用 `?` 的 SQL 与按出现顺序收集的参数。
    pub fn to_sql_raw(&self) -> Result<(String, Vec<SqlValue>)> {
        if self.columns.is_empty() {
            return Err(Error::NoColumns);
        }

        let mut buf = StringBuilder::new();
        let mut args = Vec::new();

        buf.write_clause("", &append_to_sql(&self.prefixes, " ", &mut args)?);

        buf.write_leading("SELECT");
        if !self.options.is_empty() {
            buf.write_str(" ");
            buf.write_str(&self.options.join(" "));
        }
        buf.write_str(" ");
        buf.write_str(&append_to_sql(&self.columns, ", ", &mut args)?);

        if let Some(from) = &self.from {
            let (sql, from_args) = from.to_sql()?;
            buf.write_clause("FROM", &sql);
            args.extend(from_args);
        }

        buf.write_clause("", &append_to_sql(&self.joins, " ", &mut args)?);
        buf.write_clause("WHERE", &append_to_sql(&self.where_parts, " AND ", &mut args)?);

        if !self.group_by.is_empty() {
            buf.write_clause("GROUP BY", &self.group_by.join(", "));
            buf.write_clause(
                "HAVING",
                &append_to_sql(&self.having_parts, " AND ", &mut args)?,
            );
        }

        buf.write_clause("ORDER BY", &self.order_by.join(", "));

        if let Some(limit) = self.limit {
            buf.write_clause("LIMIT", &limit.to_string());
        }
        if let Some(offset) = self.offset {
            buf.write_clause("OFFSET", &offset.to_string());
        }

        buf.write_clause("", &append_to_sql(&self.suffixes, " ", &mut args)?);

        Ok((buf.into_string(), args))
    }

    /// 拼接完整语句，并按 builder 的占位符格式改写一次。
    pub fn to_sql(&self) -> Result<(String, Vec<SqlValue>)> {
        let (sql, args) = self.to_sql_raw()?;
        let sql = self.placeholder_format.replace_placeholders(&sql)?;
        Ok((sql, args))
    }

    pub fn exec_with<R>(&self, runner: &R) -> std::result::Result<R::ExecResult, R::Error>
    where
        R: BaseRunner + ?Sized,
        R::Error: From<Error>,
    {
        let (sql, args) = self.to_sql()?;
        run_exec(runner, &sql, &args)
    }

    pub fn query_with<R>(&self, runner: &R) -> std::result::Result<R::Rows, R::Error>
    where
        R: BaseRunner + ?Sized,
        R::Error: From<Error>,
    {
        let (sql, args) = self.to_sql()?;
        run_query(runner, &sql, &args)
    }

    pub fn query_row_with<R>(&self, runner: &R) -> std::result::Result<R::Row, R::Error>
    where
        R: QueryRower + ?Sized,
        R::Error: From<Error>,
    {
        let (sql, args) = self.to_sql()?;
        run_query_row(runner, &sql, &args)
    }
}

/// 作为片段嵌入时输出带括号、未改写的 SQL，由最外层 builder 统一编号。
impl Sqlizer for SelectBuilder {
    fn to_sql(&self) -> Result<(String, Vec<SqlValue>)> {
        let (sql, args) = self.to_sql_raw()?;
        Ok((format!("({sql})"), args))
    }
}

/// 子查询：取未改写的 SQL，交给外层统一编号。
#[derive(Debug, Clone)]
struct Aliased {
    sub: SelectBuilder,
    alias: String,
}

impl Sqlizer for Aliased {
    fn to_sql(&self) -> Result<(String, Vec<SqlValue>)> {
        let (sql, args) = Sqlizer::to_sql(&self.sub)?;
        Ok((format!("{sql} AS {}", self.alias), args))
    }
}
