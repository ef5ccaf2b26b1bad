//! 占位符格式：把通用的 `?` 改写成驱动需要的方言形式（`$1`、`:1`……）。
//!
//! 改写只做一次线性扫描，不识别引号、注释或转义：字符串字面量里的 `?` 一样会被替换，
//! 连续的 `??` 也会被当作两个独立的占位符（`$1$2`），而不是转义后的字面 `?`。

use crate::error::{Error, Result};
use std::fmt::{self, Write as _};
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard};

/// 输入 SQL 中唯一的通用占位符。
pub const MARKER: char = '?';

/// 占位符改写策略（封闭集合，新增方言需要在这里显式加一个分支）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaceholderFormat {
    /// 原样保留 `?`（MySQL/SQLite 等驱动可直接识别）。
    #[default]
    Question,
    /// `$1, $2, ...`（PostgreSQL）。
    Dollar,
    /// `:1, :2, ...`（Oracle）。
    Colon,
}

/// 原样输出 `?`。
pub const QUESTION: PlaceholderFormat = PlaceholderFormat::Question;
/// 改写为 `$n`。
pub const DOLLAR: PlaceholderFormat = PlaceholderFormat::Dollar;
/// 改写为 `:n`。
pub const COLON: PlaceholderFormat = PlaceholderFormat::Colon;

impl PlaceholderFormat {
    /// 编号占位符的前缀；`Question` 不编号，返回 `None`。
    pub const fn numbered_prefix(self) -> Option<char> {
        match self {
            Self::Question => None,
            Self::Dollar => Some('$'),
            Self::Colon => Some(':'),
        }
    }

    /// 该格式在 SQL 中呈现的占位符记号（用于日志和调试输出）。
    pub const fn debug_placeholder(self) -> &'static str {
        match self {
            Self::Question => "?",
            Self::Dollar => "$",
            Self::Colon => ":",
        }
    }

    /// 把 `sql` 中每个 `?` 按从左到右的顺序改写为本格式的占位符。
    ///
    /// 返回新字符串，不修改输入。当前实现对任何输入都返回 `Ok`。
    pub fn replace_placeholders(self, sql: &str) -> Result<String> {
        match self.numbered_prefix() {
            None => Ok(sql.to_owned()),
            Some(prefix) => Ok(replace_numbered(sql, prefix)),
        }
    }

    fn from_u8(v: u8) -> Self {
        match v {
            1 => Self::Dollar,
            2 => Self::Colon,
            _ => Self::Question,
        }
    }

    fn to_u8(self) -> u8 {
        self as u8
    }
}

/// 等价于 `format.replace_placeholders(sql)`。
pub fn rewrite(format: PlaceholderFormat, sql: &str) -> Result<String> {
    format.replace_placeholders(sql)
}

fn replace_numbered(sql: &str, prefix: char) -> String {
    let mut out = String::with_capacity(sql.len() + 8);
    let mut rest = sql;
    let mut n = 0usize;

    while let Some(p) = rest.find(MARKER) {
        n += 1;
        out.push_str(&rest[..p]);
        out.push(prefix);
        let _ = write!(out, "{n}");
        rest = &rest[p + MARKER.len_utf8()..];
    }
    out.push_str(rest);

    tracing::trace!(prefix = %prefix, rewritten = n, "replaced placeholders");
    out
}

impl fmt::Display for PlaceholderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Question => "question",
            Self::Dollar => "dollar",
            Self::Colon => "colon",
        };
        f.write_str(s)
    }
}

impl FromStr for PlaceholderFormat {
    type Err = Error;

    /// 支持格式名、记号本身以及常见方言名（大小写不敏感）。
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "question" | "?" | "mysql" | "sqlite" => Ok(Self::Question),
            "dollar" | "$" | "postgres" | "postgresql" => Ok(Self::Dollar),
            "colon" | ":" | "oracle" => Ok(Self::Colon),
            _ => Err(Error::UnknownPlaceholderFormat(s.to_owned())),
        }
    }
}

static DEFAULT_FORMAT: AtomicU8 = AtomicU8::new(PlaceholderFormat::Question as u8);
static DEFAULT_FORMAT_LOCK: Mutex<()> = Mutex::new(());

/// 当前全局默认的占位符格式，`StatementBuilder::new` 会使用它。
pub fn default_placeholder_format() -> PlaceholderFormat {
    PlaceholderFormat::from_u8(DEFAULT_FORMAT.load(Ordering::Relaxed))
}

/// 设置全局默认格式，返回旧值。
pub fn set_default_placeholder_format(format: PlaceholderFormat) -> PlaceholderFormat {
    let old = DEFAULT_FORMAT.swap(format.to_u8(), Ordering::Relaxed);
    PlaceholderFormat::from_u8(old)
}

/// 修改全局默认格式的 RAII guard（持有全局锁，drop 时恢复旧值）。
pub struct DefaultFormatGuard {
    _lock: MutexGuard<'static, ()>,
    old: PlaceholderFormat,
}

impl Drop for DefaultFormatGuard {
    fn drop(&mut self) {
        set_default_placeholder_format(self.old);
    }
}

/// 在一个作用域内临时设置默认格式，退出作用域后自动恢复。
pub fn set_default_placeholder_format_scoped(format: PlaceholderFormat) -> DefaultFormatGuard {
    let lock = DEFAULT_FORMAT_LOCK
        .lock()
        .unwrap_or_else(|e| e.into_inner());
    let old = set_default_placeholder_format(format);
    DefaultFormatGuard { _lock: lock, old }
}
