//! Logger instances and the process-wide global logger.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::error::{Error, Result};
use crate::logger::handler::{make_handler, LogHandler, Record};
use crate::logger::{identity, CallSite, Level, Message, Metadata};

/// A labelled front-end over a [`LogHandler`].
///
/// Message and metadata are passed as producers and only evaluated after the
/// handler has accepted the level.
#[derive(Clone)]
pub struct Logger {
    label: String,
    handler: Arc<dyn LogHandler>,
}

impl Logger {
    /// Create a logger whose handler comes from the bootstrapped factory.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let handler = make_handler(&label);
        Self { label, handler }
    }

    /// Create a logger over an explicit handler, bypassing the factory.
    pub fn with_handler(label: impl Into<String>, handler: Arc<dyn LogHandler>) -> Self {
        Self {
            label: label.into(),
            handler,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether an entry at `level` would reach the backend.
    #[inline]
    pub fn is_enabled(&self, level: Level) -> bool {
        self.handler.enabled(level)
    }

    /// Emit an entry at `level`.
    pub fn log<M, F, G>(&self, level: Level, message: F, metadata: G, call_site: CallSite)
    where
        F: FnOnce() -> M,
        M: Into<Message>,
        G: FnOnce() -> Option<Metadata>,
    {
        if !self.handler.enabled(level) {
            return;
        }
        self.handler.log(Record {
            label: &self.label,
            level,
            message: message().into(),
            metadata: metadata(),
            call_site,
        });
    }

    pub fn trace<M, F, G>(&self, message: F, metadata: G, call_site: CallSite)
    where
        F: FnOnce() -> M,
        M: Into<Message>,
        G: FnOnce() -> Option<Metadata>,
    {
        self.log(Level::Trace, message, metadata, call_site)
    }

    pub fn debug<M, F, G>(&self, message: F, metadata: G, call_site: CallSite)
    where
        F: FnOnce() -> M,
        M: Into<Message>,
        G: FnOnce() -> Option<Metadata>,
    {
        self.log(Level::Debug, message, metadata, call_site)
    }

    pub fn info<M, F, G>(&self, message: F, metadata: G, call_site: CallSite)
    where
        F: FnOnce() -> M,
        M: Into<Message>,
        G: FnOnce() -> Option<Metadata>,
    {
        self.log(Level::Info, message, metadata, call_site)
    }

    pub fn notice<M, F, G>(&self, message: F, metadata: G, call_site: CallSite)
    where
        F: FnOnce() -> M,
        M: Into<Message>,
        G: FnOnce() -> Option<Metadata>,
    {
        self.log(Level::Notice, message, metadata, call_site)
    }

    pub fn warning<M, F, G>(&self, message: F, metadata: G, call_site: CallSite)
    where
        F: FnOnce() -> M,
        M: Into<Message>,
        G: FnOnce() -> Option<Metadata>,
    {
        self.log(Level::Warning, message, metadata, call_site)
    }

    pub fn error<M, F, G>(&self, message: F, metadata: G, call_site: CallSite)
    where
        F: FnOnce() -> M,
        M: Into<Message>,
        G: FnOnce() -> Option<Metadata>,
    {
        self.log(Level::Error, message, metadata, call_site)
    }

    /// Critical entries allow the backend to do heavier work, such as
    /// capturing system state, to help debugging.
    pub fn critical<M, F, G>(&self, message: F, metadata: G, call_site: CallSite)
    where
        F: FnOnce() -> M,
        M: Into<Message>,
        G: FnOnce() -> Option<Metadata>,
    {
        self.log(Level::Critical, message, metadata, call_site)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("label", &self.label)
            .field("min_level", &self.handler.min_level())
            .finish()
    }
}

static GLOBAL: OnceLock<Logger> = OnceLock::new();
static LABEL: OnceLock<String> = OnceLock::new();

/// The process-wide logger, created on first access.
///
/// Labelled with the value passed to [`set_label`] if any, else the
/// application identifier, else the empty string.
pub fn global_logger() -> &'static Logger {
    GLOBAL.get_or_init(|| {
        let label = LABEL
            .get_or_init(|| identity::application_identifier().unwrap_or_default())
            .clone();
        tracing::debug!(label = %label, "Global logger initialized");
        Logger::new(label)
    })
}

/// Whether the global label was set or already resolved.
pub(crate) fn is_label_set() -> bool {
    LABEL.get().is_some()
}

/// Override the global logger's label.
///
/// Fails with [`Error::LabelAlreadySet`] once the label was set or resolved
/// by the first call to [`global_logger`].
pub fn set_label(label: impl Into<String>) -> Result<()> {
    LABEL
        .set(label.into())
        .map_err(|_| Error::LabelAlreadySet)
}
