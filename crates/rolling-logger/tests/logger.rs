//! Installs the global subscriber, so it lives in its own test binary.

use rolling_logger::{init_logger, recent_lines, LoggerError};

#[test]
fn test_log_records_reach_file_and_buffer() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = dir.path().join("logs");

    init_logger(log_dir.clone(), "planner").expect("failed to init logger");

    log::info!("from log facade");
    rolling_logger::info("from helper").expect("helper should succeed once initialized");
    rolling_logger::error("something broke").unwrap();

    let lines = recent_lines();
    assert!(lines.iter().any(|l| l.contains("INFO") && l.ends_with("from log facade")), "{:?}", lines);
    assert!(lines.iter().any(|l| l.contains("INFO") && l.ends_with("from helper")), "{:?}", lines);
    assert!(lines.iter().any(|l| l.contains("ERROR") && l.ends_with("something broke")), "{:?}", lines);

    let content = std::fs::read_to_string(log_dir.join("planner.log")).unwrap();
    let file_lines: Vec<&str> = content.lines().collect();
    assert_eq!(file_lines, lines.iter().map(String::as_str).collect::<Vec<_>>());

    let again = init_logger(log_dir, "planner");
    assert!(matches!(again, Err(LoggerError::AlreadyInitialized)));
}
