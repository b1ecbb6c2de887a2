//! Forwarding of records to `tracing`.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use crate::logger::{Level, LogHandler, Record};

/// Target of every event this handler emits.
///
/// Deliberately not a prefix of this crate's module paths, so a filter that
/// opens up façade entries does not also enable the crate's own diagnostics.
pub const TARGET: &str = "facade";

/// Shared, runtime-adjustable minimum level.
#[derive(Debug, Clone)]
pub struct LevelHandle(Arc<AtomicU8>);

impl LevelHandle {
    pub fn new(level: Level) -> Self {
        Self(Arc::new(AtomicU8::new(level as u8)))
    }

    pub fn get(&self) -> Level {
        Level::from(self.0.load(Ordering::Relaxed))
    }

    pub fn set(&self, level: Level) {
        self.0.store(level as u8, Ordering::Relaxed);
    }
}

impl Default for LevelHandle {
    fn default() -> Self {
        Self::new(Level::Trace)
    }
}

macro_rules! emit {
    ($tracing_level:expr, $record:expr) => {{
        let record = $record;
        let metadata = record.metadata.as_ref().map(tracing::field::display);
        tracing::event!(
            target: TARGET,
            $tracing_level,
            label = record.label,
            severity = record.level.as_str(),
            file = record.call_site.file,
            function = record.call_site.function,
            line = record.call_site.line,
            metadata,
            "{}",
            record.message
        )
    }};
}

/// Handler that turns records into `tracing` events.
///
/// Notice and critical have no `tracing` equivalent; they are emitted at
/// INFO and ERROR with the exact level in the `severity` field.
#[derive(Debug, Clone, Default)]
pub struct TracingHandler {
    min_level: LevelHandle,
}

impl TracingHandler {
    /// Handler that defers all filtering to the installed subscriber.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler whose minimum level is controlled through `handle`.
    pub fn with_level_handle(handle: LevelHandle) -> Self {
        Self { min_level: handle }
    }

    pub fn level_handle(&self) -> &LevelHandle {
        &self.min_level
    }
}

impl LogHandler for TracingHandler {
    fn log(&self, record: Record<'_>) {
        match record.level {
            Level::Trace => emit!(tracing::Level::TRACE, &record),
            Level::Debug => emit!(tracing::Level::DEBUG, &record),
            Level::Info | Level::Notice => emit!(tracing::Level::INFO, &record),
            Level::Warning => emit!(tracing::Level::WARN, &record),
            Level::Error | Level::Critical => emit!(tracing::Level::ERROR, &record),
        }
    }

    fn min_level(&self) -> Level {
        self.min_level.get()
    }

    fn enabled(&self, level: Level) -> bool {
        if level < self.min_level.get() {
            return false;
        }
        // Skip producers when the subscriber would drop the event anyway.
        match level {
            Level::Trace => tracing::enabled!(target: TARGET, tracing::Level::TRACE),
            Level::Debug => tracing::enabled!(target: TARGET, tracing::Level::DEBUG),
            Level::Info | Level::Notice => tracing::enabled!(target: TARGET, tracing::Level::INFO),
            Level::Warning => tracing::enabled!(target: TARGET, tracing::Level::WARN),
            Level::Error | Level::Critical => {
                tracing::enabled!(target: TARGET, tracing::Level::ERROR)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call_site;
    use crate::logger::{Logger, Metadata};
    use std::cell::Cell;
    use tracing::subscriber::with_default;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_level_handle_is_shared() {
        let handle = LevelHandle::new(Level::Info);
        let handler = TracingHandler::with_level_handle(handle.clone());
        assert_eq!(handler.min_level(), Level::Info);

        handle.set(Level::Error);
        assert_eq!(handler.min_level(), Level::Error);
        assert!(!handler.enabled(Level::Warning));
    }

    #[test]
    fn test_subscriber_filter_skips_producers() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(LevelFilter::WARN)
            .with_test_writer()
            .finish();

        with_default(subscriber, || {
            let logger = Logger::with_handler("tracing", Arc::new(TracingHandler::new()));
            let evaluated = Cell::new(false);

            logger.debug(
                || {
                    evaluated.set(true);
                    "dropped by subscriber"
                },
                || None,
                call_site!(),
            );
            assert!(!evaluated.get());
            assert!(logger.is_enabled(Level::Critical));
            assert!(!logger.is_enabled(Level::Notice));

            logger.warning(
                || {
                    evaluated.set(true);
                    "kept"
                },
                || Some(Metadata::from_iter([("k", "v")])),
                call_site!(),
            );
            assert!(evaluated.get());
        });
    }

    #[test]
    fn test_notice_and_critical_fold_into_info_and_error() {
        let handler = TracingHandler::new();

        let info_only = tracing_subscriber::fmt()
            .with_max_level(LevelFilter::INFO)
            .with_test_writer()
            .finish();
        with_default(info_only, || {
            assert!(handler.enabled(Level::Notice));
            assert!(handler.enabled(Level::Info));
            assert!(!handler.enabled(Level::Debug));
        });

        let error_only = tracing_subscriber::fmt()
            .with_max_level(LevelFilter::ERROR)
            .with_test_writer()
            .finish();
        with_default(error_only, || {
            assert!(handler.enabled(Level::Critical));
            assert!(handler.enabled(Level::Error));
            assert!(!handler.enabled(Level::Warning));
        });
    }
}
