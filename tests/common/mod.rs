#![allow(dead_code)]

use std::{
    io::Write,
    sync::{
        Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use async_trait::async_trait;
use seasons_api::{db::SeasonStore, errors::AppError, models::Season};
use tempfile::NamedTempFile;

pub const INDEX_HTML: &str = "<html><body><h1>Seasons</h1></body></html>";

/// In-memory stand-in for the Mongo collection.
pub struct MemoryStore {
    docs: Mutex<Vec<Season>>,
    reachable: AtomicBool,
    fail_delete: AtomicBool,
    fail_insert: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            docs: Mutex::new(Vec::new()),
            reachable: AtomicBool::new(true),
            fail_delete: AtomicBool::new(false),
            fail_insert: AtomicBool::new(false),
        }
    }

    pub fn with_docs(docs: Vec<Season>) -> Self {
        let store = Self::new();
        *store.docs.lock().unwrap() = docs;
        store
    }

    pub fn docs(&self) -> Vec<Season> {
        self.docs.lock().unwrap().clone()
    }

    pub fn set_reachable(&self, reachable: bool) {
        self.reachable.store(reachable, Ordering::SeqCst);
    }

    pub fn fail_delete(&self) {
        self.fail_delete.store(true, Ordering::SeqCst);
    }

    pub fn fail_insert(&self) {
        self.fail_insert.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl SeasonStore for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        if self.reachable.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(AppError::DatabaseError("connection refused".into()))
        }
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError("delete rejected".into()));
        }
        let mut docs = self.docs.lock().unwrap();
        let deleted = docs.len() as u64;
        docs.clear();
        Ok(deleted)
    }

    async fn insert_many(&self, seasons: &[Season]) -> Result<usize, AppError> {
        if self.fail_insert.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError("insert rejected".into()));
        }
        self.docs.lock().unwrap().extend_from_slice(seasons);
        Ok(seasons.len())
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.docs.lock().unwrap().len() as u64)
    }
}

pub fn season(number: i64, winner: &str) -> Season {
    Season {
        season: number,
        released: 2008 + number,
        number_of_contestants: 12,
        winner: winner.to_string(),
        miss_congeniality: format!("{} runner-up", winner),
    }
}

pub fn index_file() -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".html")
        .tempfile()
        .unwrap();
    file.write_all(INDEX_HTML.as_bytes()).unwrap();
    file
}

pub fn sorted(mut seasons: Vec<Season>) -> Vec<Season> {
    seasons.sort_by_key(|s| s.season);
    seasons
}
