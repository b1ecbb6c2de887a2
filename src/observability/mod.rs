//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! LoggerConfig
//!     → logging.rs (install tracing-subscriber: filter + fmt layer)
//!     → bootstrap TracingHandler factory sharing one LevelHandle
//!
//! Consumers:
//!     → stdout (full, compact, pretty or JSON)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Façade entries use the `global_logger` target so filters can single them out

pub mod logging;
