use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use vsx_api::{ExtensionLookup, LookupError, VersionLookup};
use vsx_domain::{sort_newest_first, Extension, ExtensionVersion};

/// 服务层错误
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// ExtensionVersions 解析后的扩展及其全部版本
#[derive(Debug, Clone)]
pub struct ExtensionVersions {
    pub extension: Extension,
    /// 从新到旧
    pub versions: Vec<ExtensionVersion>,
}

/// ExtensionDetail 扩展的某个版本及其全部版本号
#[derive(Debug, Clone)]
pub struct ExtensionDetail {
    pub extension: Extension,
    pub version: ExtensionVersion,
    /// 从新到旧
    pub all_versions: Vec<String>,
}

/// 扩展版本服务trait
///
/// 所有方法在扩展或版本不存在时返回None。
#[async_trait]
pub trait VersionService: Send + Sync {
    /// 列出扩展的所有版本（从新到旧），同时返回存储中的扩展名称
    async fn list_versions(&self, namespace: &str, extension: &str) -> ServiceResult<Option<ExtensionVersions>>;

    /// 获取指定版本，扩展名和命名空间名不区分大小写
    async fn get_version(&self, namespace: &str, extension: &str, version: &str) -> ServiceResult<Option<ExtensionVersion>>;

    /// 获取扩展详情，version为None时使用最新版本
    async fn get_detail(
        &self,
        namespace: &str,
        extension: &str,
        version: Option<&str>,
    ) -> ServiceResult<Option<ExtensionDetail>>;
}

pub struct DefaultVersionService<L: VersionLookup + ExtensionLookup> {
    lookup: Arc<L>,
}

impl<L: VersionLookup + ExtensionLookup> DefaultVersionService<L> {
    pub fn new(lookup: Arc<L>) -> Self {
        Self { lookup }
    }

    async fn sorted_versions(&self, extension: &Extension) -> ServiceResult<Vec<ExtensionVersion>> {
        let mut versions = self.lookup.find_by_extension(extension).await?;
        sort_newest_first(&mut versions);
        Ok(versions)
    }
}

#[async_trait]
impl<L: VersionLookup + ExtensionLookup> VersionService for DefaultVersionService<L> {
    async fn list_versions(&self, namespace: &str, extension: &str) -> ServiceResult<Option<ExtensionVersions>> {
        let Some(ext) = self.lookup.find_by_names(extension, namespace).await? else {
            debug!(namespace, extension, "Extension not found");
            return Ok(None);
        };
        let versions = self.sorted_versions(&ext).await?;
        Ok(Some(ExtensionVersions {
            extension: ext,
            versions,
        }))
    }

    async fn get_version(&self, namespace: &str, extension: &str, version: &str) -> ServiceResult<Option<ExtensionVersion>> {
        Ok(self
            .lookup
            .find_by_version_and_names(version, extension, namespace)
            .await?)
    }

    async fn get_detail(
        &self,
        namespace: &str,
        extension: &str,
        version: Option<&str>,
    ) -> ServiceResult<Option<ExtensionDetail>> {
        let Some(listed) = self.list_versions(namespace, extension).await? else {
            return Ok(None);
        };

        let selected = match version {
            Some(v) => self.get_version(namespace, extension, v).await?,
            None => listed.versions.first().cloned(),
        };

        Ok(selected.map(|selected| ExtensionDetail {
            all_versions: listed.versions.into_iter().map(|v| v.version).collect(),
            version: selected,
            extension: listed.extension,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vsx_api::LookupResult;
    use vsx_domain::Namespace;

    /// 内存中的注册表，用于替代数据库
    struct InMemoryRegistry {
        extensions: Vec<Extension>,
        versions: Vec<ExtensionVersion>,
        fail: bool,
    }

    impl InMemoryRegistry {
        fn check(&self) -> LookupResult<()> {
            if self.fail {
                let err = std::io::Error::new(std::io::ErrorKind::Other, "connection refused");
                return Err(LookupError::storage(err));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl VersionLookup for InMemoryRegistry {
        async fn find_by_extension(&self, extension: &Extension) -> LookupResult<Vec<ExtensionVersion>> {
            self.check()?;
            Ok(self.versions.iter().filter(|v| v.belongs_to(extension)).cloned().collect())
        }

        async fn find_by_version_and_extension(
            &self,
            version: &str,
            extension: &Extension,
        ) -> LookupResult<Option<ExtensionVersion>> {
            self.check()?;
            Ok(self
                .versions
                .iter()
                .find(|v| v.version == version && v.belongs_to(extension))
                .cloned())
        }

        async fn find_by_version_and_names(
            &self,
            version: &str,
            extension_name: &str,
            namespace_name: &str,
        ) -> LookupResult<Option<ExtensionVersion>> {
            match self.find_by_names(extension_name, namespace_name).await? {
                Some(ext) => self.find_by_version_and_extension(version, &ext).await,
                None => Ok(None),
            }
        }
    }

    #[async_trait]
    impl ExtensionLookup for InMemoryRegistry {
        async fn find_by_names(&self, extension_name: &str, namespace_name: &str) -> LookupResult<Option<Extension>> {
            self.check()?;
            Ok(self
                .extensions
                .iter()
                .find(|e| {
                    e.name.to_lowercase() == extension_name.to_lowercase()
                        && e.namespace.name.to_lowercase() == namespace_name.to_lowercase()
                })
                .cloned())
        }
    }

    fn registry(fail: bool) -> Arc<InMemoryRegistry> {
        let bar = Namespace::new(1, "bar");
        let foo = Extension::new(1, "foo", bar.clone());
        let empty = Extension::new(2, "empty", bar);
        let versions = ["1.0.0", "2.0.0", "2.0.0-beta.1", "1.10.0"]
            .iter()
            .enumerate()
            .map(|(i, v)| ExtensionVersion::new(i as i64 + 1, *v, foo.id))
            .collect();
        Arc::new(InMemoryRegistry {
            extensions: vec![foo, empty],
            versions,
            fail,
        })
    }

    fn service(fail: bool) -> DefaultVersionService<InMemoryRegistry> {
        DefaultVersionService::new(registry(fail))
    }

    #[tokio::test]
    async fn test_list_versions_newest_first() {
        let listed = service(false).list_versions("bar", "foo").await.unwrap().unwrap();
        let order: Vec<&str> = listed.versions.iter().map(|v| v.version.as_str()).collect();
        assert_eq!(order, vec!["2.0.0", "2.0.0-beta.1", "1.10.0", "1.0.0"]);
    }

    #[tokio::test]
    async fn test_list_versions_unknown_extension() {
        assert!(service(false).list_versions("bar", "missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_versions_extension_without_versions() {
        let listed = service(false).list_versions("BAR", "Empty").await.unwrap().unwrap();
        assert!(listed.versions.is_empty());
        // 返回存储中的名称而不是请求中的写法
        assert_eq!(listed.extension.full_name(), "bar.empty");
    }

    #[tokio::test]
    async fn test_get_version() {
        let svc = service(false);
        let found = svc.get_version("BAR", "FOO", "2.0.0").await.unwrap().unwrap();
        assert_eq!(found.version, "2.0.0");
        assert!(svc.get_version("bar", "foo", "3.0.0").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_detail_latest() {
        let detail = service(false).get_detail("bar", "foo", None).await.unwrap().unwrap();
        assert_eq!(detail.version.version, "2.0.0");
        assert_eq!(detail.extension.full_name(), "bar.foo");
        assert_eq!(detail.all_versions.len(), 4);
        assert_eq!(detail.all_versions[0], "2.0.0");
    }

    #[tokio::test]
    async fn test_get_detail_specific_version() {
        let svc = service(false);
        let detail = svc.get_detail("BAR", "Foo", Some("1.0.0")).await.unwrap().unwrap();
        assert_eq!(detail.version.version, "1.0.0");
        assert_eq!(detail.extension.full_name(), "bar.foo");
        assert_eq!(detail.all_versions[0], "2.0.0");

        assert!(svc.get_detail("bar", "foo", Some("9.9.9")).await.unwrap().is_none());
        assert!(svc.get_detail("bar", "empty", None).await.unwrap().is_none());
        assert!(svc.get_detail("bar", "missing", Some("1.0.0")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_detail_version_is_case_sensitive() {
        let bar = Namespace::new(1, "bar");
        let foo = Extension::new(1, "foo", bar);
        let registry = Arc::new(InMemoryRegistry {
            versions: vec![ExtensionVersion::new(1, "1.0.0-RC", foo.id)],
            extensions: vec![foo],
            fail: false,
        });
        let svc = DefaultVersionService::new(registry);

        assert!(svc.get_detail("bar", "foo", Some("1.0.0-rc")).await.unwrap().is_none());
        assert!(svc.get_detail("bar", "foo", Some("1.0.0-RC")).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_storage_error_propagates() {
        let err = service(true).list_versions("bar", "foo").await.unwrap_err();
        assert!(matches!(err, ServiceError::Lookup(LookupError::Storage(_))));
        assert!(err.to_string().contains("connection refused"));
    }
}
