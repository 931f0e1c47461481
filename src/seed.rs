use crate::{db::SeasonStore, errors::AppError, models::Season};

/// Replaces every season in the store with `seasons`.
///
/// Deletes first, then inserts the whole dataset in one batch, so running it twice still
/// leaves exactly `seasons.len()` documents. Nothing here is atomic: a reader hitting the
/// store mid-run can see it empty or partially filled.
pub async fn seed_database(store: &dyn SeasonStore, seasons: &[Season]) -> Result<usize, AppError> {
    tracing::info!("Resetting seasons collection...");

    let deleted = store.delete_all().await?;
    tracing::info!("Deleted {} existing seasons", deleted);

    let inserted = store.insert_many(seasons).await?;

    match store.count().await {
        Ok(count) => tracing::info!("Seeded {} seasons, store now holds {}", inserted, count),
        Err(e) => tracing::warn!("Seeded {} seasons, but count failed: {}", inserted, e),
    }

    Ok(inserted)
}
