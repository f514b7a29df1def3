pub mod registry;

pub use registry::{
    DefaultVersionService, ExtensionDetail, ExtensionVersions, ServiceError, ServiceResult, VersionService,
};
