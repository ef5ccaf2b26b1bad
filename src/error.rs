//! 错误类型。

/// sequel 的统一错误。
///
/// 占位符改写本身不会产生错误；这里的变体只来自格式名解析与 builder 校验。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("sequel: unknown placeholder format {0:?}")]
    UnknownPlaceholderFormat(String),
    #[error("sequel: select statements must have at least one result column")]
    NoColumns,
}

pub type Result<T> = std::result::Result<T, Error>;
