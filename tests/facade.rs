//! Global logger, severity functions and macros against a captured backend.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use global_logger::logger::identity;
use global_logger::{
    bootstrap, call_site, global_logger, log_c, log_d, log_e, log_i, log_n, log_t, log_w,
    no_metadata, CallSite, Error, Level, LogHandler, Metadata, MetadataValue,
};

mod common;

const MIN_LEVEL: Level = Level::Notice;

type EmitFn = fn(Box<dyn FnOnce() -> String>, Box<dyn FnOnce() -> Option<Metadata>>, CallSite);

fn severity_functions() -> [(Level, EmitFn); 7] {
    [
        (Level::Trace, log_t),
        (Level::Debug, log_d),
        (Level::Info, log_i),
        (Level::Notice, log_n),
        (Level::Warning, log_w),
        (Level::Error, log_e),
        (Level::Critical, log_c),
    ]
}

#[test]
fn test_producers_only_run_for_accepted_levels() {
    let handler = common::memory_backend(MIN_LEVEL);

    for (level, emit) in severity_functions() {
        let messages = Arc::new(AtomicUsize::new(0));
        let metadata = Arc::new(AtomicUsize::new(0));
        let marker = format!("lazy-fn-{}", level);

        let (m, md) = (messages.clone(), metadata.clone());
        let text = marker.clone();
        emit(
            Box::new(move || {
                m.fetch_add(1, Ordering::SeqCst);
                text
            }),
            Box::new(move || {
                md.fetch_add(1, Ordering::SeqCst);
                Some(Metadata::from_iter([("level", level.as_str())]))
            }),
            call_site!(),
        );

        let expected = usize::from(level >= MIN_LEVEL);
        assert_eq!(messages.load(Ordering::SeqCst), expected, "message producer at {}", level);
        assert_eq!(metadata.load(Ordering::SeqCst), expected, "metadata producer at {}", level);

        let records = common::records_with(&handler, &marker);
        assert_eq!(records.len(), expected, "records at {}", level);
        if let Some(record) = records.first() {
            assert_eq!(record.level, level);
            assert_eq!(
                record.metadata.as_ref().and_then(|m| m.get("level")),
                Some(&MetadataValue::from(level.as_str()))
            );
        }
    }
}

#[test]
fn test_macros_are_lazy() {
    let handler = common::memory_backend(MIN_LEVEL);
    let calls = AtomicUsize::new(0);
    let expensive = || {
        calls.fetch_add(1, Ordering::SeqCst);
        "costly"
    };

    global_logger::log_t!("lazy-macro {}", expensive());
    global_logger::log_d!(meta: { "value" => expensive() }; "lazy-macro");
    global_logger::log_i!("lazy-macro {}", expensive());
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    global_logger::log_n!("lazy-macro {}", expensive());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(common::records_with(&handler, "lazy-macro").len(), 1);
}

#[test]
fn test_each_macro_maps_to_one_level() {
    let handler = common::memory_backend(MIN_LEVEL);

    global_logger::log_n!("macro-level n");
    global_logger::log_w!("macro-level w");
    global_logger::log_e!("macro-level e");
    global_logger::log_c!("macro-level c");
    global_logger::log!(Level::Warning, "macro-level explicit");

    let levels: Vec<(String, Level)> = common::records_with(&handler, "macro-level")
        .into_iter()
        .map(|r| (r.message, r.level))
        .collect();
    assert_eq!(
        levels,
        vec![
            ("macro-level n".to_string(), Level::Notice),
            ("macro-level w".to_string(), Level::Warning),
            ("macro-level e".to_string(), Level::Error),
            ("macro-level c".to_string(), Level::Critical),
            ("macro-level explicit".to_string(), Level::Warning),
        ]
    );
}

#[test]
fn test_macro_captures_call_site() {
    let handler = common::memory_backend(MIN_LEVEL);

    global_logger::log_w!("call-site-capture");
    let line = line!() - 1;

    let records = common::records_with(&handler, "call-site-capture");
    assert_eq!(records.len(), 1);
    let site = records[0].call_site;
    assert_eq!(site.file, file!());
    assert_eq!(site.line, line);
    assert!(
        site.function.ends_with("test_macro_captures_call_site"),
        "function was {}",
        site.function
    );
}

#[test]
fn test_explicit_call_site_is_passed_through() {
    let handler = common::memory_backend(MIN_LEVEL);
    let site = CallSite::new("jobs/sync.rs", "jobs::sync::run", 88);

    log_e(|| "call-site-override", no_metadata, site);

    let records = common::records_with(&handler, "call-site-override");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].call_site, site);
}

#[test]
fn test_macro_metadata() {
    let handler = common::memory_backend(MIN_LEVEL);
    let peer = "10.0.0.7";

    global_logger::log_e!(meta: { "peer" => peer, "attempt" => 3u8 }; "macro-metadata {}", 1);

    let records = common::records_with(&handler, "macro-metadata");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "macro-metadata 1");
    let metadata = records[0].metadata.as_ref().expect("metadata attached");
    assert_eq!(metadata.to_string(), "attempt=3 peer=10.0.0.7");
}

#[test]
fn test_global_logger_is_a_singleton_across_threads() {
    common::memory_backend(MIN_LEVEL);
    const THREADS: usize = 16;
    let barrier = Arc::new(Barrier::new(THREADS));

    let addresses: Vec<usize> = (0..THREADS)
        .map(|_| {
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                global_logger() as *const _ as usize
            })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();

    assert!(addresses.iter().all(|&a| a == addresses[0]));
    assert_eq!(addresses[0], global_logger() as *const _ as usize);
}

#[test]
fn test_global_label_is_application_identifier() {
    common::memory_backend(MIN_LEVEL);
    assert_eq!(
        global_logger().label(),
        identity::application_identifier().unwrap_or_default()
    );
}

#[test]
fn test_bootstrap_only_once() {
    common::memory_backend(MIN_LEVEL);
    let result = bootstrap(|_| {
        Arc::new(global_logger::backend::TracingHandler::new()) as Arc<dyn LogHandler>
    });
    assert!(matches!(result, Err(Error::AlreadyBootstrapped)));
}
