//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → LoggerConfig (validated, immutable)
//!     → observability::logging::init (subscriber, label, handler factory)
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → min_level applied to the shared LevelHandle
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so an empty file is a valid config
//! - Validation separates syntactic (serde) from semantic checks
//! - Only the minimum level is hot-reloaded; subscriber and label are fixed
//!   once installed

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config};
pub use schema::{LogFormat, LoggerConfig, SubscriberConfig};
pub use validation::{validate_config, ValidationError};
pub use watcher::ConfigWatcher;
