use retroclock_testing::{TestWorld, fixtures};

#[test]
fn test_init_writes_defaults() {
    let world = TestWorld::new();
    assert!(!world.config_path().exists());

    let result = world.run(&["config", "init"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Wrote default config to"));

    let written = std::fs::read_to_string(world.config_path()).unwrap();
    assert!(written.contains("[clock]"));
    assert!(written.contains("format = \"24h\""));
    assert!(written.contains("[clicker]"));
}

#[test]
fn test_init_keeps_existing_file() {
    let world = TestWorld::new().with_config(fixtures::TWENTY_FOUR_HOUR_CYAN);

    let result = world.run(&["config", "init"]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("Config already exists at"));
    assert!(result.stdout().contains("--force"));

    let kept = std::fs::read_to_string(world.config_path()).unwrap();
    assert_eq!(kept, fixtures::TWENTY_FOUR_HOUR_CYAN);
}

#[test]
fn test_init_force_overwrites() {
    let world = TestWorld::new().with_config(fixtures::TWENTY_FOUR_HOUR_CYAN);

    let result = world.run(&["config", "init", "--force"]).unwrap();
    assert!(result.success());

    let written = std::fs::read_to_string(world.config_path()).unwrap();
    assert!(!written.contains("cyan"));
}

#[test]
fn test_show_reports_missing_file_with_defaults() {
    let world = TestWorld::new();
    let result = world.run(&["config", "show"]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("not found, showing defaults"));
    assert!(result.stdout().contains("color = \"red\""));
}

#[test]
fn test_show_json() {
    let world = TestWorld::new().with_config(fixtures::TWENTY_FOUR_HOUR_CYAN);
    let result = world.run(&["config", "show", "--output", "json"]).unwrap();

    assert!(result.success());
    let json = result.json().unwrap();
    assert_eq!(json["content"]["config"]["clock"]["color"], "cyan");
    assert_eq!(json["content"]["config"]["clock"]["format"], "24h");
    assert_eq!(json["content"]["exists"], true);
}

#[test]
fn test_show_rejects_invalid_config() {
    let world = TestWorld::new().with_config(fixtures::ZERO_TICK);
    let result = world.run(&["config", "show"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Configuration error"));
}

#[test]
fn test_path() {
    let world = TestWorld::new();
    let result = world.run(&["config", "path"]).unwrap();

    assert!(result.success());
    assert_eq!(
        result.stdout().trim(),
        world.config_path().display().to_string()
    );
}
