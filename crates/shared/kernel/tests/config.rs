use rollcall_domain::config::AppConfig;
use rollcall_kernel::config::load_config;
use std::io::Write;

#[test]
fn missing_file_yields_defaults() {
    let cfg: AppConfig =
        load_config(Some("/definitely/not/here/rollcall")).expect("defaults should load");
    assert_eq!(cfg.submission.delay_ms, 2000);
    assert_eq!(cfg.window.title, "Rollcall");
}

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rollcall.toml");
    let mut file = std::fs::File::create(&path).expect("config file");
    writeln!(file, "[submission]\ndelay_ms = 25\n\n[window]\ntitle = \"Club Night\"")
        .expect("write config");

    let cfg: AppConfig = load_config(Some(&path)).expect("config should load");
    assert_eq!(cfg.submission.delay_ms, 25);
    assert_eq!(cfg.window.title, "Club Night");
    // Untouched sections keep their defaults.
    assert!(cfg.log.dir.is_none());
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rollcall.toml");
    std::fs::write(&path, "submission = \"not a table\"").expect("write config");

    let result: Result<AppConfig, _> = load_config(Some(&path));
    assert!(result.is_err());
}
