//! Sqlizer：可以渲染成 `(sql, args)` 的 SQL 片段。

use crate::error::Result;
use crate::value::SqlValue;
use dyn_clone::DynClone;

/// 片段渲染出的 SQL 只使用通用占位符 `?`；方言改写由最外层 builder 统一做一次。
pub trait Sqlizer: DynClone + std::fmt::Debug {
    fn to_sql(&self) -> Result<(String, Vec<SqlValue>)>;
}

dyn_clone::clone_trait_object!(Sqlizer);

impl Sqlizer for Box<dyn Sqlizer> {
    fn to_sql(&self) -> Result<(String, Vec<SqlValue>)> {
        (**self).to_sql()
    }
}

/// Expr：带 `?` 占位符和参数的原始 SQL 片段。
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    sql: String,
    args: Vec<SqlValue>,
}

impl Sqlizer for Expr {
    fn to_sql(&self) -> Result<(String, Vec<SqlValue>)> {
        Ok((self.sql.clone(), self.args.clone()))
    }
}

/// 构造一个 [`Expr`]。参数个数不做校验，按原样交给驱动。
pub fn expr(
    sql: impl Into<String>,
    args: impl IntoIterator<Item = impl Into<SqlValue>>,
) -> Expr {
    Expr {
        sql: sql.into(),
        args: args.into_iter().map(Into::into).collect(),
    }
}

/// 依次渲染 `parts` 并用 `sep` 连接；空片段会被跳过，参数按顺序追加到 `args`。
pub(crate) fn append_to_sql(
    parts: &[Box<dyn Sqlizer>],
    sep: &str,
    args: &mut Vec<SqlValue>,
) -> Result<String> {
    let mut out = Vec::with_capacity(parts.len());
    for p in parts {
        let (sql, part_args) = p.to_sql()?;
        if sql.is_empty() {
            continue;
        }
        out.push(sql);
        args.extend(part_args);
    }
    Ok(out.join(sep))
}
