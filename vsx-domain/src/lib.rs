pub mod registry;

pub use registry::{Extension, ExtensionVersion, Namespace, sort_newest_first};
