pub mod namespace;
pub mod extension;
pub mod extension_version;

pub use namespace::Namespace;
pub use extension::Extension;
pub use extension_version::{ExtensionVersion, sort_newest_first};
