//! 执行接口：由驱动实现，builder 只负责把改写后的 SQL 与参数交给它。
//!
//! 驱动自己的错误类型原样返回给调用方；builder 的错误通过 `From<Error>` 转成驱动错误。

use crate::error::Error;
use crate::placeholder::PlaceholderFormat;
use crate::sqlizer::Sqlizer;
use crate::value::SqlValue;

/// 执行无结果语句与返回行集的查询。
pub trait BaseRunner {
    type Error;
    /// `exec` 的结果（如受影响行数）。
    type ExecResult;
    /// `query` 返回的行集/行流。
    type Rows;

    fn exec(&self, query: &str, args: &[SqlValue]) -> Result<Self::ExecResult, Self::Error>;

    fn query(&self, query: &str, args: &[SqlValue]) -> Result<Self::Rows, Self::Error>;
}

/// 额外支持单行查询的驱动。
pub trait QueryRower: BaseRunner {
    type Row;

    fn query_row(&self, query: &str, args: &[SqlValue]) -> Result<Self::Row, Self::Error>;
}

/// 渲染 `s`，按 `format` 改写一次后通过 `runner.exec` 执行。
///
/// `s` 渲染出的 SQL 应只含通用占位符 `?`（片段与嵌套 builder 都满足这一点）。
pub fn exec_with<R, S>(
    runner: &R,
    format: PlaceholderFormat,
    s: &S,
) -> Result<R::ExecResult, R::Error>
where
    R: BaseRunner + ?Sized,
    R::Error: From<Error>,
    S: Sqlizer + ?Sized,
{
    let (sql, args) = render(format, s)?;
    run_exec(runner, &sql, &args)
}

/// 渲染 `s`，按 `format` 改写一次后通过 `runner.query` 执行。
pub fn query_with<R, S>(runner: &R, format: PlaceholderFormat, s: &S) -> Result<R::Rows, R::Error>
where
    R: BaseRunner + ?Sized,
    R::Error: From<Error>,
    S: Sqlizer + ?Sized,
{
    let (sql, args) = render(format, s)?;
    run_query(runner, &sql, &args)
}

/// 渲染 `s`，按 `format` 改写一次后通过 `runner.query_row` 执行。
pub fn query_row_with<R, S>(runner: &R, format: PlaceholderFormat, s: &S) -> Result<R::Row, R::Error>
where
    R: QueryRower + ?Sized,
    R::Error: From<Error>,
    S: Sqlizer + ?Sized,
{
    let (sql, args) = render(format, s)?;
    run_query_row(runner, &sql, &args)
}

fn render<S: Sqlizer + ?Sized>(
    format: PlaceholderFormat,
    s: &S,
) -> crate::error::Result<(String, Vec<SqlValue>)> {
    let (sql, args) = s.to_sql()?;
    Ok((format.replace_placeholders(&sql)?, args))
}

pub(crate) fn run_exec<R>(runner: &R, sql: &str, args: &[SqlValue]) -> Result<R::ExecResult, R::Error>
where
    R: BaseRunner + ?Sized,
{
    tracing::debug!(sql = %sql, args = args.len(), "exec");
    runner
        .exec(sql, args)
        .inspect_err(|_| tracing::debug!(sql = %sql, "exec failed"))
}

pub(crate) fn run_query<R>(runner: &R, sql: &str, args: &[SqlValue]) -> Result<R::Rows, R::Error>
where
    R: BaseRunner + ?Sized,
{
    tracing::debug!(sql = %sql, args = args.len(), "query");
    runner
        .query(sql, args)
        .inspect_err(|_| tracing::debug!(sql = %sql, "query failed"))
}

pub(crate) fn run_query_row<R>(runner: &R, sql: &str, args: &[SqlValue]) -> Result<R::Row, R::Error>
where
    R: QueryRower + ?Sized,
{
    tracing::debug!(sql = %sql, args = args.len(), "query_row");
    runner
        .query_row(sql, args)
        .inspect_err(|_| tracing::debug!(sql = %sql, "query_row failed"))
}
