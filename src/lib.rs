//! Global logging façade.
//!
//! A process-wide logger plus one function (and macro) per severity, with
//! call-site capture, lazily built messages and metadata, and a helper that
//! logs how long a unit of work took. Entries are handed to a pluggable
//! [`LogHandler`]; by default they become `tracing` events.

#[macro_use]
mod macros;

pub mod backend;
pub mod config;
pub mod error;
pub mod logger;
pub mod observability;

pub use config::LoggerConfig;
pub use error::{Error, Result};
pub use logger::{
    bootstrap, global_logger, log, log_c, log_d, log_e, log_elapsed_time, log_i, log_n, log_t,
    log_w, no_metadata, CallSite, Level, LogHandler, Logger, Message, Metadata, MetadataValue,
};
pub use observability::logging::init;
