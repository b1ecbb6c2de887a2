//! Severity-tagged emission through the global logger.
//!
//! Each function is pinned to one level and forwards unchanged to
//! [`global_logger`]. The `log_*!` macros are the usual entry point; these
//! functions are what they expand to.

use crate::logger::global::global_logger;
use crate::logger::{CallSite, Level, Message, Metadata};

/// Emit at an explicit level.
pub fn log<M, F, G>(level: Level, message: F, metadata: G, call_site: CallSite)
where
    F: FnOnce() -> M,
    M: Into<Message>,
    G: FnOnce() -> Option<Metadata>,
{
    global_logger().log(level, message, metadata, call_site)
}

/// Information normally of use only when tracing the execution of a program.
pub fn log_t<M, F, G>(message: F, metadata: G, call_site: CallSite)
where
    F: FnOnce() -> M,
    M: Into<Message>,
    G: FnOnce() -> Option<Metadata>,
{
    global_logger().log(Level::Trace, message, metadata, call_site)
}

/// Information normally of use only when debugging a program.
pub fn log_d<M, F, G>(message: F, metadata: G, call_site: CallSite)
where
    F: FnOnce() -> M,
    M: Into<Message>,
    G: FnOnce() -> Option<Metadata>,
{
    global_logger().log(Level::Debug, message, metadata, call_site)
}

/// Informational messages.
pub fn log_i<M, F, G>(message: F, metadata: G, call_site: CallSite)
where
    F: FnOnce() -> M,
    M: Into<Message>,
    G: FnOnce() -> Option<Metadata>,
{
    global_logger().log(Level::Info, message, metadata, call_site)
}

/// Conditions that are not errors but may require special handling.
pub fn log_n<M, F, G>(message: F, metadata: G, call_site: CallSite)
where
    F: FnOnce() -> M,
    M: Into<Message>,
    G: FnOnce() -> Option<Metadata>,
{
    global_logger().log(Level::Notice, message, metadata, call_site)
}

/// Not an error condition, but more severe than notice.
pub fn log_w<M, F, G>(message: F, metadata: G, call_site: CallSite)
where
    F: FnOnce() -> M,
    M: Into<Message>,
    G: FnOnce() -> Option<Metadata>,
{
    global_logger().log(Level::Warning, message, metadata, call_site)
}

/// Error conditions.
pub fn log_e<M, F, G>(message: F, metadata: G, call_site: CallSite)
where
    F: FnOnce() -> M,
    M: Into<Message>,
    G: FnOnce() -> Option<Metadata>,
{
    global_logger().log(Level::Error, message, metadata, call_site)
}

/// Critical errors that usually require immediate attention.
pub fn log_c<M, F, G>(message: F, metadata: G, call_site: CallSite)
where
    F: FnOnce() -> M,
    M: Into<Message>,
    G: FnOnce() -> Option<Metadata>,
{
    global_logger().log(Level::Critical, message, metadata, call_site)
}
