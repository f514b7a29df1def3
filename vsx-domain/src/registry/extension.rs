use serde::{Deserialize, Serialize};
use super::Namespace;

/// Extension 是在命名空间内按名称标识的可发布单元
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension {
    pub id: i64,
    pub name: String,
    pub namespace: Namespace,
}

impl Extension {
    pub fn new(id: i64, name: impl Into<String>, namespace: Namespace) -> Self {
        Self {
            id,
            name: name.into(),
            namespace,
        }
    }

    /// 完整名称，格式为 `namespace.name`
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.namespace.name, self.name)
    }
}
