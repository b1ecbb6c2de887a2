//! Shared utilities for integration tests.

use std::sync::{Arc, OnceLock};

use global_logger::backend::{CapturedRecord, MemoryHandler};
use global_logger::{bootstrap, Level, LogHandler};

/// Bootstrap a `MemoryHandler` as the process-wide backend.
///
/// Only the first call installs; later calls return the same handler, so a
/// test binary must always pass the same `min_level`.
pub fn memory_backend(min_level: Level) -> Arc<MemoryHandler> {
    static HANDLER: OnceLock<Arc<MemoryHandler>> = OnceLock::new();
    HANDLER
        .get_or_init(|| {
            let handler = Arc::new(MemoryHandler::new(min_level));
            let shared = handler.clone();
            bootstrap(move |_label| shared.clone() as Arc<dyn LogHandler>)
                .expect("backend bootstrapped before any logger was created");
            handler
        })
        .clone()
}

/// Captured records whose message contains `marker`.
///
/// Tests run in parallel against one backend; unique markers keep them apart.
#[allow(dead_code)]
pub fn records_with(handler: &MemoryHandler, marker: &str) -> Vec<CapturedRecord> {
    handler
        .records()
        .into_iter()
        .filter(|r| r.message.contains(marker))
        .collect()
}
