//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject blank labels
//! - Check that filter directives parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggerConfig → Result<(), Vec<ValidationError>>

use tracing_subscriber::EnvFilter;

use crate::config::schema::LoggerConfig;

/// A semantic problem with a config.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("label must not be blank")]
    EmptyLabel,

    #[error("invalid filter `{filter}`: {reason}")]
    InvalidFilter { filter: String, reason: String },
}

/// Check a parsed config, collecting every problem found.
pub fn validate_config(config: &LoggerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(label) = &config.label {
        if label.trim().is_empty() {
            errors.push(ValidationError::EmptyLabel);
        }
    }

    if let Some(filter) = &config.subscriber.filter {
        if let Err(e) = EnvFilter::try_new(filter) {
            errors.push(ValidationError::InvalidFilter {
                filter: filter.clone(),
                reason: e.to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(validate_config(&LoggerConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = LoggerConfig::default();
        config.label = Some(String::new());
        config.subscriber.filter = Some("global_logger=loudest".into());

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], ValidationError::EmptyLabel);
        assert!(matches!(errors[1], ValidationError::InvalidFilter { .. }));
    }
}
