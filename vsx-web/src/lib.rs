pub mod app_state;
pub mod handlers;
pub mod openapi;

pub use app_state::AppState;
pub use handlers::*;
