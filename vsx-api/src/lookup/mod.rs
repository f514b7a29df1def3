pub mod error;

pub use error::{LookupError, LookupResult};

use async_trait::async_trait;
use vsx_domain::{Extension, ExtensionVersion};

/// VersionLookup trait 定义扩展版本的只读查询
///
/// 未找到不是错误：列表查询返回空集合，单条查询返回None。
#[async_trait]
pub trait VersionLookup: Send + Sync {
    /// 列出属于指定扩展的所有版本，顺序不保证
    async fn find_by_extension(&self, extension: &Extension) -> LookupResult<Vec<ExtensionVersion>>;

    /// 按版本字符串（区分大小写）和所属扩展精确查找
    async fn find_by_version_and_extension(
        &self,
        version: &str,
        extension: &Extension,
    ) -> LookupResult<Option<ExtensionVersion>>;

    /// 按版本字符串、扩展名和命名空间名查找
    ///
    /// 版本区分大小写，扩展名和命名空间名不区分大小写。
    async fn find_by_version_and_names(
        &self,
        version: &str,
        extension_name: &str,
        namespace_name: &str,
    ) -> LookupResult<Option<ExtensionVersion>>;
}

/// ExtensionLookup trait 按名称解析扩展
#[async_trait]
pub trait ExtensionLookup: Send + Sync {
    /// 扩展名和命名空间名均不区分大小写
    async fn find_by_names(
        &self,
        extension_name: &str,
        namespace_name: &str,
    ) -> LookupResult<Option<Extension>>;
}

/// 将查询结果收敛为至多一条记录，多条匹配时返回Inconsistent错误
pub fn at_most_one<T>(
    mut rows: Vec<T>,
    entity: &'static str,
    key: impl FnOnce() -> String,
) -> LookupResult<Option<T>> {
    match rows.len() {
        0 => Ok(None),
        1 => Ok(rows.pop()),
        _ => Err(LookupError::Inconsistent {
            entity,
            key: key(),
        }),
    }
}
