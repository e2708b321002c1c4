use maxdemo_core::{init_logging, init_stderr_logging, logging_status, LogSink};

#[test]
fn stderr_logging_is_idempotent_and_rejects_switching() {
    assert!(logging_status().is_none());

    init_stderr_logging("warn").expect("first init should succeed");
    init_stderr_logging("warning").expect("same level should be idempotent");

    let level_error = init_stderr_logging("trace").expect_err("level conflict should fail");
    assert!(level_error.contains("refusing to switch"));

    let dir = tempfile::tempdir().expect("temp dir should be created");
    let dir_str = dir.path().to_str().expect("temp dir should be valid UTF-8");
    let sink_error = init_logging("warn", dir_str).expect_err("switching to file sink should fail");
    assert!(sink_error.contains("refusing to switch"));

    assert_eq!(logging_status(), Some(("warn", LogSink::Stderr)));
}
