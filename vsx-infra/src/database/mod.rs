pub mod namespace;
pub mod extension;
pub mod extension_version;
pub mod manager;
pub mod repository;


pub use manager::DatabaseManager;
pub use repository::SeaOrmVersionLookup;
