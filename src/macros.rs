//! Logging macros.
//!
//! Every macro captures the call site at its expansion point and wraps the
//! message and metadata expressions in closures, so neither is evaluated
//! when the level is filtered out.
//!
//! ```rust,ignore
//! use global_logger::{log_i, log_w, log_elapsed};
//!
//! log_i!("listening on {}", addr);
//! log_w!(meta: { "attempt" => n, "peer" => peer }; "retrying");
//! let rows = log_elapsed!("loaded rows in", || db.load())?;
//! ```

/// Build a [`Metadata`](crate::logger::Metadata) from `key => value` pairs.
#[macro_export]
macro_rules! metadata {
    () => {
        $crate::logger::Metadata::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut metadata = $crate::logger::Metadata::new();
        $( metadata.insert($key, $value); )+
        metadata
    }};
}

/// Log through the global logger at an explicit level.
#[macro_export]
macro_rules! log {
    ($level:expr, meta: { $($key:expr => $value:expr),* $(,)? }; $($arg:tt)+) => {
        $crate::logger::emit::log(
            $level,
            || ::std::format!($($arg)+),
            || ::std::option::Option::Some($crate::metadata!($($key => $value),*)),
            $crate::call_site!(),
        )
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::logger::emit::log(
            $level,
            || ::std::format!($($arg)+),
            $crate::logger::no_metadata,
            $crate::call_site!(),
        )
    };
}

#[macro_export]
macro_rules! log_t {
    ($($arg:tt)+) => {
        $crate::log!($crate::logger::Level::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_d {
    ($($arg:tt)+) => {
        $crate::log!($crate::logger::Level::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_i {
    ($($arg:tt)+) => {
        $crate::log!($crate::logger::Level::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_n {
    ($($arg:tt)+) => {
        $crate::log!($crate::logger::Level::Notice, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_w {
    ($($arg:tt)+) => {
        $crate::log!($crate::logger::Level::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_e {
    ($($arg:tt)+) => {
        $crate::log!($crate::logger::Level::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_c {
    ($($arg:tt)+) => {
        $crate::log!($crate::logger::Level::Critical, $($arg)+)
    };
}

/// Time a fallible closure and log `"<message> <seconds>"` on success.
///
/// Defaults to trace; `level:` and `meta:` may precede the message.
#[macro_export]
macro_rules! log_elapsed {
    (level: $level:expr, meta: { $($key:expr => $value:expr),* $(,)? }, $message:expr, $work:expr $(,)?) => {
        $crate::logger::timing::log_elapsed_time(
            || $message,
            $level,
            || ::std::option::Option::Some($crate::metadata!($($key => $value),*)),
            $crate::call_site!(),
            $work,
        )
    };
    (level: $level:expr, $message:expr, $work:expr $(,)?) => {
        $crate::logger::timing::log_elapsed_time(
            || $message,
            $level,
            $crate::logger::no_metadata,
            $crate::call_site!(),
            $work,
        )
    };
    ($message:expr, $work:expr $(,)?) => {
        $crate::log_elapsed!(level: $crate::logger::Level::Trace, $message, $work)
    };
}
