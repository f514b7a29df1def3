use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// ExtensionVersion 实体，对应数据库中的extension_version表
///
/// (extension_id, version) 上有唯一索引。
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "extension_version")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "String(Some(255))")]
    pub version: String,

    pub extension_id: i64,

    #[sea_orm(column_type = "String(Some(255))", nullable)]
    pub display_name: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(nullable)]
    pub timestamp: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::extension::Entity",
        from = "Column::ExtensionId",
        to = "super::extension::Column::Id"
    )]
    Extension,
}

impl Related<super::extension::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Extension.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for vsx_domain::ExtensionVersion {
    fn from(model: Model) -> Self {
        vsx_domain::ExtensionVersion {
            id: model.id,
            version: model.version,
            extension_id: model.extension_id,
            display_name: model.display_name,
            description: model.description,
            timestamp: model.timestamp,
        }
    }
}
