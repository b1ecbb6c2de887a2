//! `init` with a label after the label was already set.

use global_logger::config::LoggerConfig;
use global_logger::logger::set_label;
use global_logger::{global_logger, Error, Level};

// One test: the label, factory and dispatcher are per-process.
#[test]
fn test_rejected_label_leaves_init_retryable() {
    set_label("com.example.preset").unwrap();

    let mut config = LoggerConfig::default();
    config.label = Some("com.example.other".into());
    config.min_level = Level::Error;
    config.subscriber.filter = Some("facade=trace".into());

    let err = global_logger::init(&config).unwrap_err();
    assert!(matches!(err, Error::LabelAlreadySet), "got {err}");
    assert!(!tracing::dispatcher::has_been_set());

    config.label = None;
    let handle = global_logger::init(&config).expect("retry without a label succeeds");
    assert!(tracing::dispatcher::has_been_set());
    assert_eq!(global_logger().label(), "com.example.preset");
    assert!(!global_logger().is_enabled(Level::Warning));

    handle.set(Level::Warning);
    assert!(global_logger().is_enabled(Level::Warning));
}
