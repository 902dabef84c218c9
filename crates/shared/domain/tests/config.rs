use rollcall_domain::config::{AppConfig, SubmissionConfig, WindowConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let window = WindowConfig::default();
    assert_eq!(window.title, "Rollcall");
    assert!(window.width > 0.0);
    assert!(window.height > 0.0);

    let submission = SubmissionConfig::default();
    assert_eq!(submission.delay_ms, 2000);

    let cfg = AppConfig::default();
    assert!(cfg.log.filter.is_none());
    assert!(cfg.log.dir.is_none());
}

#[test]
fn app_config_deserializes() {
    let raw = json!({
        "window": { "title": "Club Night", "width": 800.0, "height": 600.0 },
        "submission": { "delay_ms": 50 },
        "log": { "filter": "rollcall=debug", "dir": "/tmp/logs" }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.window.title, "Club Night");
    assert_eq!(cfg.submission.delay_ms, 50);
    assert_eq!(cfg.log.dir, Some(std::path::PathBuf::from("/tmp/logs")));
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let raw = json!({ "submission": { "delay_ms": 10 } });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.submission.delay_ms, 10);
    assert_eq!(cfg.window.title, "Rollcall");
}
