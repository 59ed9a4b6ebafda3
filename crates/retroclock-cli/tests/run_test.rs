use retroclock_testing::{TestWorld, fixtures};

#[test]
fn test_run_requires_a_terminal() {
    let world = TestWorld::new();
    let result = world.run(&["run"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("needs a terminal"));
    assert!(result.stdout().is_empty());
}

#[test]
fn test_bare_invocation_starts_the_clock() {
    let world = TestWorld::new();
    let result = world.run(&[]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("needs a terminal"));
}

#[test]
fn test_log_file_receives_records() {
    let world = TestWorld::new();
    let log = world.temp_dir().join("retroclock.log");
    let log_arg = log.display().to_string();
    let result = world
        .run(&[
            "--log-level",
            "debug",
            "--log-file",
            &log_arg,
            "show",
            "--at",
            fixtures::MIDNIGHT,
        ])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stderr().is_empty());
    let written = std::fs::read_to_string(&log).unwrap();
    assert!(written.contains("config loaded from"), "log: {written}");
}

#[test]
fn test_interactive_logs_go_only_to_the_file() {
    let world = TestWorld::new();
    let log = world.temp_dir().join("retroclock.log");
    let log_arg = log.display().to_string();
    let result = world
        .run(&["--log-level", "debug", "--log-file", &log_arg, "run"])
        .unwrap();

    assert!(!result.success());
    assert!(!result.stderr().contains("config loaded from"));
    assert!(!result.stderr().contains("DEBUG"));
    let written = std::fs::read_to_string(&log).unwrap();
    assert!(written.contains("config loaded from"), "log: {written}");
}

#[test]
fn test_interactive_without_log_file_keeps_stderr_clean() {
    let world = TestWorld::new();
    let result = world.run(&["--log-level", "debug", "run"]).unwrap();

    assert!(!result.success());
    assert!(!result.stderr().contains("DEBUG"));
    assert_eq!(result.stderr().lines().count(), 1);
}
