use crate::database::{extension, extension_version, namespace};
use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter, QuerySelect, RelationTrait,
};
use std::sync::Arc;
use tracing::{debug, error};
use vsx_api::{at_most_one, ExtensionLookup, LookupError, LookupResult, VersionLookup};
use vsx_domain::{Extension, ExtensionVersion};

/// SeaOrmVersionLookup 使用Sea-ORM实现的版本查询
pub struct SeaOrmVersionLookup {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmVersionLookup {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// `LOWER(table.column) = LOWER(value)`
///
/// 两侧都交给数据库转换，保证与后端的大小写规则一致
/// （SQLite的LOWER只处理ASCII字符）。
fn lower_eq<E, C>(entity: E, column: C, value: &str) -> SimpleExpr
where
    E: EntityTrait + 'static,
    C: ColumnTrait + 'static,
{
    Expr::expr(Func::lower(Expr::col((entity, column)))).eq(Func::lower(Expr::val(value)))
}

/// 记录一致性错误后原样返回
fn log_inconsistency(err: LookupError) -> LookupError {
    if let LookupError::Inconsistent { entity, key } = &err {
        error!(entity = *entity, key = %key, "Uniqueness violated for singular lookup");
    }
    err
}

#[async_trait]
impl VersionLookup for SeaOrmVersionLookup {
    async fn find_by_extension(&self, extension: &Extension) -> LookupResult<Vec<ExtensionVersion>> {
        let rows = extension_version::Entity::find()
            .filter(extension_version::Column::ExtensionId.eq(extension.id))
            .all(&*self.db)
            .await
            .map_err(LookupError::storage)?;

        debug!(extension = %extension.full_name(), count = rows.len(), "Listed extension versions");
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_version_and_extension(
        &self,
        version: &str,
        extension: &Extension,
    ) -> LookupResult<Option<ExtensionVersion>> {
        let rows = extension_version::Entity::find()
            .filter(extension_version::Column::Version.eq(version))
            .filter(extension_version::Column::ExtensionId.eq(extension.id))
            .all(&*self.db)
            .await
            .map_err(LookupError::storage)?;

        // MySQL默认排序规则下 = 不区分大小写，这里再做一次精确比较
        let rows: Vec<_> = rows.into_iter().filter(|m| m.version == version).collect();

        debug!(version, extension = %extension.full_name(), found = !rows.is_empty(), "Looked up extension version");
        at_most_one(rows, "extension_version", || {
            format!("{}@{}", version, extension.full_name())
        })
        .map(|found| found.map(Into::into))
        .map_err(log_inconsistency)
    }

    async fn find_by_version_and_names(
        &self,
        version: &str,
        extension_name: &str,
        namespace_name: &str,
    ) -> LookupResult<Option<ExtensionVersion>> {
        let rows = extension_version::Entity::find()
            .join(JoinType::InnerJoin, extension_version::Relation::Extension.def())
            .join(JoinType::InnerJoin, extension::Relation::Namespace.def())
            .filter(extension_version::Column::Version.eq(version))
            .filter(lower_eq(extension::Entity, extension::Column::Name, extension_name))
            .filter(lower_eq(namespace::Entity, namespace::Column::Name, namespace_name))
            .all(&*self.db)
            .await
            .map_err(LookupError::storage)?;

        let rows: Vec<_> = rows.into_iter().filter(|m| m.version == version).collect();

        debug!(version, extension_name, namespace_name, found = !rows.is_empty(), "Looked up extension version by names");
        at_most_one(rows, "extension_version", || {
            format!("{}@{}.{}", version, namespace_name, extension_name)
        })
        .map(|found| found.map(Into::into))
        .map_err(log_inconsistency)
    }
}

#[async_trait]
impl ExtensionLookup for SeaOrmVersionLookup {
    async fn find_by_names(
        &self,
        extension_name: &str,
        namespace_name: &str,
    ) -> LookupResult<Option<Extension>> {
        let rows = extension::Entity::find()
            .find_also_related(namespace::Entity)
            .filter(lower_eq(extension::Entity, extension::Column::Name, extension_name))
            .filter(lower_eq(namespace::Entity, namespace::Column::Name, namespace_name))
            .all(&*self.db)
            .await
            .map_err(LookupError::storage)?;

        let extensions: Vec<Extension> = rows
            .into_iter()
            .filter_map(|(ext, ns)| ns.map(|ns| ext.into_domain(ns)))
            .collect();

        debug!(extension_name, namespace_name, found = !extensions.is_empty(), "Looked up extension by names");
        at_most_one(extensions, "extension", || {
            format!("{}.{}", namespace_name, extension_name)
        })
        .map_err(log_inconsistency)
    }
}
