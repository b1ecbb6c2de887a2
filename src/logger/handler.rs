//! Backend contract.
//!
//! # Responsibilities
//! - Define the record handed to a backend
//! - Define the `LogHandler` trait backends implement
//! - Hold the process-wide factory used to construct handlers from a label
//!
//! # Design Decisions
//! - The factory is resolved once; after that `bootstrap` is rejected
//! - Filtering by minimum level belongs to the handler, not the logger

use std::sync::{Arc, OnceLock};

use crate::backend::TracingHandler;
use crate::error::{Error, Result};
use crate::logger::{CallSite, Level, Message, Metadata};

/// A log entry as handed to a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<'a> {
    /// Label of the logger that produced the entry.
    pub label: &'a str,
    pub level: Level,
    pub message: Message,
    pub metadata: Option<Metadata>,
    pub call_site: CallSite,
}

/// A logging backend.
pub trait LogHandler: Send + Sync {
    /// Emit a record. Only called for levels `enabled` accepted.
    fn log(&self, record: Record<'_>);

    /// Least severe level this handler emits.
    fn min_level(&self) -> Level;

    /// Whether an entry at `level` would be emitted.
    fn enabled(&self, level: Level) -> bool {
        level >= self.min_level()
    }
}

/// Constructs a handler for a logger label.
pub type HandlerFactory = Box<dyn Fn(&str) -> Arc<dyn LogHandler> + Send + Sync>;

static FACTORY: OnceLock<HandlerFactory> = OnceLock::new();

/// Install the process-wide handler factory.
///
/// Must run before the first logger is constructed; once any logger has
/// resolved the factory this returns [`Error::AlreadyBootstrapped`].
///
/// The factory runs while the global logger is being initialized, so it
/// must not call [`global_logger`](crate::global_logger) itself; doing so
/// deadlocks.
pub fn bootstrap<F>(factory: F) -> Result<()>
where
    F: Fn(&str) -> Arc<dyn LogHandler> + Send + Sync + 'static,
{
    FACTORY
        .set(Box::new(factory))
        .map_err(|_| Error::AlreadyBootstrapped)
}

/// Whether the factory was installed or already resolved by a logger.
pub(crate) fn is_bootstrapped() -> bool {
    FACTORY.get().is_some()
}

/// Build a handler for `label` with the installed factory, falling back to
/// [`TracingHandler`] when nothing was bootstrapped.
pub(crate) fn make_handler(label: &str) -> Arc<dyn LogHandler> {
    let factory = FACTORY.get_or_init(|| {
        let default: HandlerFactory =
            Box::new(|_label: &str| Arc::new(TracingHandler::new()) as Arc<dyn LogHandler>);
        default
    });
    factory(label)
}
