pub mod database;
pub mod logging;

pub use database::{DatabaseManager, SeaOrmVersionLookup};
