use std::{sync::Arc, time::Duration};

use tokio::{task::JoinHandle, time::MissedTickBehavior};

use crate::{
    db::SeasonStore,
    state::{ConnectionState, StoreHealth},
};

/// Pings `store` every `interval` and publishes the outcome into `health`.
///
/// The first ping runs immediately. Until it completes the state stays whatever the caller
/// set, normally `Connecting`. Abort the returned handle to stop monitoring.
pub fn spawn_connection_monitor(
    store: Arc<dyn SeasonStore>,
    health: StoreHealth,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            check_connection(store.as_ref(), &health).await;
        }
    })
}

/// One monitor step. Returns the state it published.
pub async fn check_connection(store: &dyn SeasonStore, health: &StoreHealth) -> ConnectionState {
    match store.ping().await {
        Ok(()) => {
            let previous = health.set(ConnectionState::Connected);
            if previous != ConnectionState::Connected {
                tracing::info!("Store connected");
            }
            ConnectionState::Connected
        }
        Err(e) => {
            let previous = health.set(ConnectionState::Disconnected);
            match previous {
                ConnectionState::Connected => tracing::warn!("Store connection lost: {}", e),
                ConnectionState::Connecting => tracing::warn!("Store not reachable: {}", e),
                _ => tracing::debug!("Store still unreachable: {}", e),
            }
            ConnectionState::Disconnected
        }
    }
}
