use std::time::Duration;

use async_trait::async_trait;
use mongodb::{
    Client, Collection, Database,
    bson::doc,
    error::ErrorKind,
    options::ClientOptions,
};
use tokio::sync::OnceCell;

use crate::{
    config::DEFAULT_DATABASE,
    db::{SEASONS_COLLECTION, SeasonStore},
    errors::AppError,
    models::Season,
};

/// Applied unless the URL sets `serverSelectionTimeoutMS` itself.
pub const DEFAULT_SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
struct Handle {
    database: Database,
    seasons: Collection<Season>,
}

pub struct MongoSeasonStore {
    mongo_url: String,
    handle: OnceCell<Handle>,
}

impl MongoSeasonStore {
    /// Parses `mongo_url` and builds a client. The driver connects lazily, so this
    /// returns without waiting for the server to be reachable.
    ///
    /// Only a malformed URL is an error. When parsing needs I/O that fails (SRV and TXT
    /// lookups for `mongodb+srv://`), the client is built on the next store call instead.
    pub async fn connect(mongo_url: &str) -> Result<Self, AppError> {
        let store = Self {
            mongo_url: mongo_url.to_string(),
            handle: OnceCell::new(),
        };

        match build_handle(mongo_url).await {
            Ok(handle) => {
                let _ = store.handle.set(handle);
            }
            Err(e) if is_malformed_url(&e) => {
                return Err(AppError::EnvError(format!("Invalid MONGO_URL: {}", e)));
            }
            Err(e) => {
                tracing::warn!("Could not resolve MONGO_URL yet, will retry: {}", e);
            }
        }

        Ok(store)
    }

    async fn handle(&self) -> Result<&Handle, AppError> {
        self.handle
            .get_or_try_init(|| async {
                build_handle(&self.mongo_url).await.map_err(|e| {
                    AppError::DatabaseError(format!("Failed to resolve MONGO_URL: {}", e))
                })
            })
            .await
    }
}

async fn build_handle(mongo_url: &str) -> Result<Handle, mongodb::error::Error> {
    let mut options = ClientOptions::parse(mongo_url).await?;
    apply_defaults(&mut options);

    let name = database_name(&options);
    let client = Client::with_options(options)?;
    let database = client.database(&name);

    tracing::info!("Using database '{}', collection '{}'", name, SEASONS_COLLECTION);

    let seasons = database.collection::<Season>(SEASONS_COLLECTION);
    Ok(Handle { database, seasons })
}

fn is_malformed_url(err: &mongodb::error::Error) -> bool {
    matches!(*err.kind, ErrorKind::InvalidArgument { .. })
}

/// The URL's default database, else `project-mongo`.
pub fn database_name(options: &ClientOptions) -> String {
    options
        .default_database
        .clone()
        .unwrap_or_else(|| DEFAULT_DATABASE.to_string())
}

// A seed against a down store should fail fast instead of holding startup for 30s.
pub fn apply_defaults(options: &mut ClientOptions) {
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    options
        .server_selection_timeout
        .get_or_insert(DEFAULT_SERVER_SELECTION_TIMEOUT);
}

#[async_trait]
impl SeasonStore for MongoSeasonStore {
    async fn ping(&self) -> Result<(), AppError> {
        self.handle()
            .await?
            .database
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let result = self
            .handle()
            .await?
            .seasons
            .delete_many(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to delete seasons: {}", e)))?;

        Ok(result.deleted_count)
    }

    async fn insert_many(&self, seasons: &[Season]) -> Result<usize, AppError> {
        // The driver rejects an empty batch.
        if seasons.is_empty() {
            return Ok(0);
        }

        let result = self
            .handle()
            .await?
            .seasons
            .insert_many(seasons)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to insert seasons: {}", e)))?;

        Ok(result.inserted_ids.len())
    }

    async fn count(&self) -> Result<u64, AppError> {
        let count = self
            .handle()
            .await?
            .seasons
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to count seasons: {}", e)))?;

        Ok(count)
    }
}
