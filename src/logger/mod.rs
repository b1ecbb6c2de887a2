//! Logging façade.
//!
//! # Data Flow
//! ```text
//! log_i!(...) / log_i(...)
//!     → emit.rs (pin the level, forward to the global logger)
//!     → global.rs (Logger: handler.enabled(level)?)
//!         no  → return, producers never run
//!         yes → evaluate message and metadata
//!     → handler.rs (LogHandler::log(Record))
//!
//! log_elapsed!(...) / log_elapsed_time(...)
//!     → timing.rs (clock, run work, log on success only)
//! ```
//!
//! # Design Decisions
//! - One global logger, created on first use, never torn down
//! - Call sites are captured by macros at the expansion point
//! - Emission never fails; backend errors are the backend's concern

pub mod call_site;
pub mod emit;
pub mod global;
pub mod handler;
pub mod identity;
pub mod level;
pub mod metadata;
pub mod timing;

pub use call_site::CallSite;
pub use emit::{log, log_c, log_d, log_e, log_i, log_n, log_t, log_w};
pub use global::{global_logger, set_label, Logger};
pub use handler::{bootstrap, HandlerFactory, LogHandler, Record};
pub use level::{Level, ParseLevelError};
pub use metadata::{no_metadata, Message, Metadata, MetadataValue};
pub use timing::{log_elapsed_time, Clock, MonotonicClock};
