pub mod analytics;
pub mod debounce;
pub mod errors;
pub mod models;
pub mod ops;
pub mod query;
pub mod seed;
pub mod store;

pub use crate::errors::{AppError, AppResult};
pub use crate::models::OpsSettings;
pub use crate::ops::{OpsCore, OptimizationTask};
pub use crate::query::{run_query, QueryPage, QueryParams};

/// Called once by the embedding shell before any operation runs.
pub fn init_tracing() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init()
        .map_err(|error| error.to_string())
}
