use serde::{Deserialize, Serialize};

/// Namespace 是扩展的命名空间，拥有零个或多个扩展
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    pub id: i64,
    pub name: String,
}

impl Namespace {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
