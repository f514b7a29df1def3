use thiserror::Error;

#[derive(Error, Debug)]
pub enum VsxError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for VsxError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        VsxError::Internal(err.to_string())
    }
}

impl From<String> for VsxError {
    fn from(err: String) -> Self {
        VsxError::Internal(err)
    }
}

pub type Result<T> = std::result::Result<T, VsxError>;
