//! In-memory capture of records.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::backend::LevelHandle;
use crate::logger::{CallSite, Level, LogHandler, Metadata, Record};

/// Owned copy of a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRecord {
    pub label: String,
    pub level: Level,
    pub message: String,
    pub metadata: Option<Metadata>,
    pub call_site: CallSite,
}

impl From<Record<'_>> for CapturedRecord {
    fn from(record: Record<'_>) -> Self {
        Self {
            label: record.label.to_string(),
            level: record.level,
            message: record.message.into_string(),
            metadata: record.metadata,
            call_site: record.call_site,
        }
    }
}

/// Handler that keeps every accepted record in memory.
#[derive(Debug, Default)]
pub struct MemoryHandler {
    min_level: LevelHandle,
    records: Mutex<Vec<CapturedRecord>>,
}

impl MemoryHandler {
    pub fn new(min_level: Level) -> Self {
        Self {
            min_level: LevelHandle::new(min_level),
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn set_min_level(&self, level: Level) {
        self.min_level.set(level);
    }

    /// Snapshot of the captured records, oldest first.
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.lock().clone()
    }

    /// Remove and return the captured records.
    pub fn take(&self) -> Vec<CapturedRecord> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CapturedRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogHandler for MemoryHandler {
    fn log(&self, record: Record<'_>) {
        self.lock().push(record.into());
    }

    fn min_level(&self) -> Level {
        self.min_level.get()
    }
}
