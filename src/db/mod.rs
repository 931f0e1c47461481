pub mod monitor;
pub mod mongo;

use async_trait::async_trait;

use crate::{errors::AppError, models::Season};

pub use monitor::spawn_connection_monitor;
pub use mongo::MongoSeasonStore;

pub const SEASONS_COLLECTION: &str = "seasons";

/// The document store holding seeded seasons. Request handlers never read from it.
#[async_trait]
pub trait SeasonStore: Send + Sync {
    /// Round-trips to the store; used by the connection monitor.
    async fn ping(&self) -> Result<(), AppError>;

    /// Removes every season document, returning how many were deleted.
    async fn delete_all(&self) -> Result<u64, AppError>;

    /// Inserts all of `seasons` in one call, returning how many were written.
    async fn insert_many(&self, seasons: &[Season]) -> Result<usize, AppError>;

    async fn count(&self) -> Result<u64, AppError>;
}
