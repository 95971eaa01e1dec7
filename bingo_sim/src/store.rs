//! Sled-backed store for simulation result records.
//!
//! Records are JSON-encoded under sled's monotonic u64 ids (big-endian, so
//! key order is insertion order). The store is opened once per sweep and
//! released when dropped, whichever way the sweep ends.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use bingo_core::GameConfig;

/// Errors from the result store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Opening the database failed
    #[error("Failed to open store: {0}")]
    Open(String),

    /// Writing a record failed; the record is dropped, not retried
    #[error("Insert failed: {0}")]
    Insert(String),

    /// A stored record could not be read back
    #[error("Corrupt record: {0}")]
    Decode(String),
}

/// One persisted simulation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRecord {
    /// Board edge length
    pub board_size: usize,

    /// Pool the boards and winning numbers were drawn from
    pub number_pool_size: u32,

    /// Boards generated and checked
    pub num_boards: u32,

    /// Winning numbers drawn
    pub winning_number_size: u32,

    /// Boards whose verdict was won
    pub winning_boards_count: u32,

    /// When the run finished
    pub timestamp: DateTime<Utc>,
}

impl SimulationRecord {
    /// Wraps a run's winner count with its configuration, stamped now.
    pub fn new(config: &GameConfig, winning_boards_count: u32) -> Self {
        Self {
            board_size: config.board_size,
            number_pool_size: config.number_pool_size,
            num_boards: config.num_boards,
            winning_number_size: config.winning_number_size,
            winning_boards_count,
            timestamp: Utc::now(),
        }
    }
}

/// Persistent store of simulation records.
pub struct SimulationStore {
    db: sled::Db,
}

impl SimulationStore {
    /// Opens (or creates) a store at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path).map_err(|e| StoreError::Open(e.to_string()))?;
        Ok(Self { db })
    }

    /// Creates a temporary store (for testing).
    pub fn temporary() -> Result<Self, StoreError> {
        let config = sled::Config::new().temporary(true);
        let db = config
            .open()
            .map_err(|e| StoreError::Open(e.to_string()))?;
        Ok(Self { db })
    }

    /// Appends one record.
    pub fn insert(&self, record: &SimulationRecord) -> Result<(), StoreError> {
        let id = self
            .db
            .generate_id()
            .map_err(|e| StoreError::Insert(e.to_string()))?;
        let value =
            serde_json::to_vec(record).map_err(|e| StoreError::Insert(e.to_string()))?;

        self.db
            .insert(id.to_be_bytes(), value)
            .map_err(|e| StoreError::Insert(e.to_string()))?;
        self.db
            .flush()
            .map_err(|e| StoreError::Insert(e.to_string()))?;
        Ok(())
    }

    /// Returns up to `limit` records, most recent first.
    pub fn query(&self, limit: usize) -> Result<Vec<SimulationRecord>, StoreError> {
        let mut records = Vec::new();
        for result in self.db.iter().rev().take(limit) {
            let (_, value) = result.map_err(|e| StoreError::Decode(e.to_string()))?;
            let record = serde_json::from_slice(&value)
                .map_err(|e| StoreError::Decode(e.to_string()))?;
            records.push(record);
        }
        Ok(records)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// True if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }
}
