use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Namespace 实体，对应数据库中的namespace表
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "namespace")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "String(Some(255))")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::extension::Entity")]
    Extension,
}

impl Related<super::extension::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Extension.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for vsx_domain::Namespace {
    fn from(model: Model) -> Self {
        vsx_domain::Namespace::new(model.id, model.name)
    }
}
