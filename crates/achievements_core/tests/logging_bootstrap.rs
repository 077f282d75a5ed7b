use achievements_core::{init_logging, logging_status, LoggingError};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let first = tempfile::tempdir().expect("temp dir");
    let second = tempfile::tempdir().expect("temp dir");
    let first_dir = first.path().to_str().expect("utf-8 temp dir").to_string();
    let second_dir = second.path().to_str().expect("utf-8 temp dir").to_string();

    assert!(logging_status().is_none());
    init_logging("info", &first_dir).expect("first init should succeed");
    init_logging("INFO", &first_dir).expect("same config should be idempotent");

    let level_err = init_logging("debug", &first_dir).expect_err("level conflict");
    assert!(matches!(level_err, LoggingError::Conflict { .. }));
    assert!(level_err.to_string().contains("refusing to switch"));

    let dir_err = init_logging("info", &second_dir).expect_err("directory conflict");
    assert!(matches!(dir_err, LoggingError::Conflict { .. }));

    let (level, dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(dir, first.path());
}
