//! Elapsed-time logging around a unit of work.
//!
//! # Data Flow
//! ```text
//! clock.now() → work() → clock.now()
//!     Ok(value)  → log "<message> <seconds>" at level → Ok(value)
//!     Err(error) → Err(error), nothing logged
//! ```

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use crate::logger::global::{global_logger, Logger};
use crate::logger::{CallSite, Level, Message, Metadata};

/// Source of monotonic timestamps, as an offset from an arbitrary origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall-clock time from [`Instant`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        static ORIGIN: OnceLock<Instant> = OnceLock::new();
        ORIGIN.get_or_init(Instant::now).elapsed()
    }
}

impl Logger {
    /// Run `work`, then log its elapsed time if it succeeded.
    pub fn log_elapsed_time<T, E, M, F, G, W>(
        &self,
        message: F,
        level: Level,
        metadata: G,
        call_site: CallSite,
        work: W,
    ) -> Result<T, E>
    where
        F: FnOnce() -> M,
        M: Into<Message>,
        G: FnOnce() -> Option<Metadata>,
        W: FnOnce() -> Result<T, E>,
    {
        self.log_elapsed_time_with_clock(&MonotonicClock, message, level, metadata, call_site, work)
    }

    /// [`Logger::log_elapsed_time`] measured with `clock`.
    pub fn log_elapsed_time_with_clock<C, T, E, M, F, G, W>(
        &self,
        clock: &C,
        message: F,
        level: Level,
        metadata: G,
        call_site: CallSite,
        work: W,
    ) -> Result<T, E>
    where
        C: Clock + ?Sized,
        F: FnOnce() -> M,
        M: Into<Message>,
        G: FnOnce() -> Option<Metadata>,
        W: FnOnce() -> Result<T, E>,
    {
        let start = clock.now();
        let result = work()?;
        let elapsed = clock.now().saturating_sub(start).as_secs_f64();

        self.log(
            level,
            || {
                let message: Message = message().into();
                format!("{} {}", message, elapsed)
            },
            metadata,
            call_site,
        );
        Ok(result)
    }
}

/// Run `work` and log its elapsed time through the global logger.
///
/// Failures of `work` are returned untouched and produce no log entry.
pub fn log_elapsed_time<T, E, M, F, G, W>(
    message: F,
    level: Level,
    metadata: G,
    call_site: CallSite,
    work: W,
) -> Result<T, E>
where
    F: FnOnce() -> M,
    M: Into<Message>,
    G: FnOnce() -> Option<Metadata>,
    W: FnOnce() -> Result<T, E>,
{
    global_logger().log_elapsed_time(message, level, metadata, call_site, work)
}
