use std::{
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicU8, Ordering},
    },
};

use crate::models::Season;

#[derive(Clone)]
pub struct AppState {
    pub seasons: Arc<Vec<Season>>,
    pub health: StoreHealth,
    pub index_html: PathBuf,
}

impl AppState {
    pub fn new(seasons: Vec<Season>, health: StoreHealth, index_html: PathBuf) -> Self {
        Self {
            seasons: Arc::new(seasons),
            health,
            index_html,
        }
    }
}

/// Store connection state, numbered the way the Mongo drivers report `readyState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ConnectionState {
    Disconnected = 0,
    Connected = 1,
    Connecting = 2,
    Disconnecting = 3,
}

impl ConnectionState {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => ConnectionState::Connected,
            2 => ConnectionState::Connecting,
            3 => ConnectionState::Disconnecting,
            _ => ConnectionState::Disconnected,
        }
    }
}

// Written by the connection monitor, read by the readiness gate on every request.
#[derive(Debug, Clone)]
pub struct StoreHealth(Arc<AtomicU8>);

impl StoreHealth {
    pub fn new(state: ConnectionState) -> Self {
        Self(Arc::new(AtomicU8::new(state as u8)))
    }

    pub fn state(&self) -> ConnectionState {
        ConnectionState::from_u8(self.0.load(Ordering::Acquire))
    }

    /// Stores `state` and returns the previous one.
    pub fn set(&self, state: ConnectionState) -> ConnectionState {
        ConnectionState::from_u8(self.0.swap(state as u8, Ordering::AcqRel))
    }

    pub fn is_connected(&self) -> bool {
        self.state() == ConnectionState::Connected
    }
}

impl Default for StoreHealth {
    fn default() -> Self {
        Self::new(ConnectionState::Connecting)
    }
}
