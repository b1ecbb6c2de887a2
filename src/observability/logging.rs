//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the `tracing` subscriber
//! - Route the global logger into it
//! - Expose the minimum level for runtime changes
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for production, human-readable formats for development
//! - Filter configurable via config and `RUST_LOG`

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::backend::{LevelHandle, TracingHandler};
use crate::config::{LogFormat, LoggerConfig, SubscriberConfig};
use crate::error::{Error, Result};
use crate::logger::global::is_label_set;
use crate::logger::handler::is_bootstrapped;
use crate::logger::{bootstrap, set_label, LogHandler};

/// Filter used when neither the config nor `RUST_LOG` provides one.
///
/// Façade entries pass at every level so `min_level` alone governs them;
/// the crate's own diagnostics stay at info.
pub const DEFAULT_FILTER: &str = "info,facade=trace";

/// Install the global `tracing` subscriber.
pub fn init_subscriber(config: &SubscriberConfig) -> Result<()> {
    let filter = match &config.filter {
        Some(directives) => {
            EnvFilter::try_new(directives).map_err(|e| Error::Subscriber(e.to_string()))?
        }
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    let layer = tracing_subscriber::fmt::layer()
        .with_ansi(config.ansi)
        .with_target(config.with_target);

    let layer = match config.format {
        LogFormat::Full => layer.boxed(),
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Pretty => layer.pretty().boxed(),
        LogFormat::Json => layer.json().flatten_event(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| Error::Subscriber(e.to_string()))
}

/// Set up the whole logging system from `config`.
///
/// Installs the subscriber, applies the label override and bootstraps a
/// [`TracingHandler`] factory. Every handler shares the returned
/// [`LevelHandle`], so changing it (directly or through
/// [`ConfigWatcher`](crate::config::ConfigWatcher)) affects all loggers.
///
/// Must run before the global logger is first used. Every precondition is
/// checked before anything global is installed, so a failed call leaves the
/// process untouched.
pub fn init(config: &LoggerConfig) -> Result<LevelHandle> {
    if is_bootstrapped() {
        return Err(Error::AlreadyBootstrapped);
    }
    if config.label.is_some() && is_label_set() {
        return Err(Error::LabelAlreadySet);
    }
    if tracing::dispatcher::has_been_set() {
        return Err(Error::Subscriber(
            "a global default subscriber has already been set".into(),
        ));
    }

    init_subscriber(&config.subscriber)?;

    if let Some(label) = &config.label {
        set_label(label.clone())?;
    }

    let handle = LevelHandle::new(config.min_level);
    let shared = handle.clone();
    bootstrap(move |_label| {
        Arc::new(TracingHandler::with_level_handle(shared.clone())) as Arc<dyn LogHandler>
    })?;

    tracing::debug!(
        min_level = %config.min_level,
        format = ?config.subscriber.format,
        "Logging initialized"
    );
    Ok(handle)
}
