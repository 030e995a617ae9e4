pub mod backend;

pub use backend::config::AppConfig;
pub use backend::{build_app_state, create_router, cors_layer, initialize_backend, AppState};
