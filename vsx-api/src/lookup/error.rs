use thiserror::Error;

/// 查询错误
///
/// 未找到不属于错误，由空结果表示。
#[derive(Error, Debug)]
pub enum LookupError {
    /// 存储层错误，原样传递
    #[error("Storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// 单条查询匹配到多条记录
    #[error("Inconsistent data: multiple {entity} records match {key}")]
    Inconsistent { entity: &'static str, key: String },
}

impl LookupError {
    pub fn storage<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        LookupError::Storage(Box::new(err))
    }
}

pub type LookupResult<T> = std::result::Result<T, LookupError>;
