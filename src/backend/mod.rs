//! Handler implementations.
//!
//! # Data Flow
//! ```text
//! Logger::log → enabled? → Record
//!     → tracing_handler.rs (forward as a `tracing` event; default)
//!     → memory.rs (capture in memory; tests and diagnostics)
//! ```
//!
//! # Design Decisions
//! - Sinks, formatting and shipping stay with `tracing-subscriber`
//! - Minimum level is shared through `LevelHandle` so it can change at runtime

pub mod memory;
pub mod tracing_handler;

pub use memory::{CapturedRecord, MemoryHandler};
pub use tracing_handler::{LevelHandle, TracingHandler, TARGET};
