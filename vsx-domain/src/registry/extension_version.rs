use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use super::Extension;

/// ExtensionVersion 是扩展的一个已发布版本
///
/// 同一扩展下版本字符串唯一。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionVersion {
    pub id: i64,
    pub version: String,
    /// 所属扩展的ID
    pub extension_id: i64,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl ExtensionVersion {
    pub fn new(id: i64, version: impl Into<String>, extension_id: i64) -> Self {
        Self {
            id,
            version: version.into(),
            extension_id,
            display_name: None,
            description: None,
            timestamp: None,
        }
    }

    /// 检查是否属于指定扩展
    pub fn belongs_to(&self, extension: &Extension) -> bool {
        self.extension_id == extension.id
    }

    /// 解析为语义化版本，无法解析时返回None
    pub fn semver(&self) -> Option<semver::Version> {
        semver::Version::parse(&self.version).ok()
    }

    /// 按语义化版本优先级比较
    ///
    /// 无法解析的版本排在所有合法版本之前（更旧），彼此之间按字符串比较。
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        match (self.semver(), other.semver()) {
            (Some(a), Some(b)) => a.cmp_precedence(&b).then_with(|| a.cmp(&b)),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => self.version.cmp(&other.version),
        }
    }
}

/// 按版本从新到旧排序
pub fn sort_newest_first(versions: &mut [ExtensionVersion]) {
    versions.sort_by(|a, b| b.cmp_precedence(a));
}
