pub mod version_service;

pub use version_service::{
    DefaultVersionService, ExtensionDetail, ExtensionVersions, ServiceError, ServiceResult, VersionService,
};
