//! Severity levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity of a log entry, ordered from least to most severe.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Information normally of use only when tracing the execution of a program.
    #[default]
    Trace = 0,
    /// Information normally of use only when debugging a program.
    Debug = 1,
    /// Informational messages.
    Info = 2,
    /// Conditions that are not errors but may require special handling.
    Notice = 3,
    /// Not an error condition, but more severe than notice.
    #[serde(alias = "warn")]
    Warning = 4,
    /// Error conditions.
    Error = 5,
    /// Critical errors that usually require immediate attention.
    Critical = 6,
}

impl Level {
    /// All levels in ascending order of severity.
    pub const ALL: [Level; 7] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Notice,
        Level::Warning,
        Level::Error,
        Level::Critical,
    ];

    /// Lowercase name of the level.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Notice => "notice",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Critical => "critical",
        }
    }
}

impl From<u8> for Level {
    fn from(val: u8) -> Self {
        match val {
            0 => Level::Trace,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Notice,
            4 => Level::Warning,
            5 => Level::Error,
            _ => Level::Critical,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level `{0}` (expected trace, debug, info, notice, warning, error or critical)")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "notice" => Ok(Level::Notice),
            "warning" | "warn" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            "critical" => Ok(Level::Critical),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_strictly_ordered() {
        for pair in Level::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort before {}", pair[0], pair[1]);
        }
        assert_eq!(Level::ALL[0], Level::Trace);
        assert_eq!(Level::ALL[6], Level::Critical);
    }

    #[test]
    fn test_u8_round_trip_and_saturation() {
        for level in Level::ALL {
            assert_eq!(Level::from(level as u8), level);
        }
        assert_eq!(Level::from(200), Level::Critical);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!(" NOTICE ".parse::<Level>().unwrap(), Level::Notice);
        assert_eq!("critical".parse::<Level>().unwrap(), Level::Critical);

        let err = "fatal".parse::<Level>().unwrap_err();
        assert_eq!(err, ParseLevelError("fatal".into()));
    }
}
