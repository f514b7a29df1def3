use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Extension 实体，对应数据库中的extension表
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "extension")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "String(Some(255))")]
    pub name: String,

    pub namespace_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::namespace::Entity",
        from = "Column::NamespaceId",
        to = "super::namespace::Column::Id"
    )]
    Namespace,
    #[sea_orm(has_many = "super::extension_version::Entity")]
    ExtensionVersion,
}

impl Related<super::namespace::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Namespace.def()
    }
}

impl Related<super::extension_version::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExtensionVersion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 与所属命名空间组合为领域对象
    pub fn into_domain(self, namespace: super::namespace::Model) -> vsx_domain::Extension {
        vsx_domain::Extension::new(self.id, self.name, namespace.into())
    }
}
