use super::{apply_env_overrides, apply_file_config, load_settings, Settings, CONFIG_FILE};

use std::{
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

#[test]
fn defaults_point_at_local_server() {
    assert_eq!(Settings::default().server_url, "http://127.0.0.1:8000");
}

#[test]
fn file_config_overrides_defaults() {
    let mut settings = Settings::default();
    apply_file_config(&mut settings, r#"server_url = "http://transcriber.lan:9000""#)
        .expect("valid config");
    assert_eq!(settings.server_url, "http://transcriber.lan:9000");
}

#[test]
fn malformed_file_config_is_rejected() {
    let mut settings = Settings::default();
    apply_file_config(&mut settings, "server_url = [not a string").expect_err("must fail");
    assert_eq!(settings, Settings::default());
}

#[test]
fn app_prefixed_env_wins_over_plain_env() {
    let mut settings = Settings::default();
    apply_file_config(&mut settings, r#"server_url = "http://from-file""#).expect("valid config");
    apply_env_overrides(&mut settings, |key| match key {
        "MEMO_SERVER_URL" => Some("http://from-env".into()),
        "APP__SERVER_URL" => Some("http://from-app-env".into()),
        _ => None,
    });
    assert_eq!(settings.server_url, "http://from-app-env");
}

#[test]
fn unset_env_keeps_file_value() {
    let mut settings = Settings::default();
    apply_file_config(&mut settings, r#"server_url = "http://from-file""#).expect("valid config");
    apply_env_overrides(&mut settings, |_| None);
    assert_eq!(settings.server_url, "http://from-file");
}

#[test]
fn unparseable_config_file_fails_startup() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("memo_notes_uploader_config_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    fs::write(temp_root.join(CONFIG_FILE), "server_url = [broken").expect("write config");

    let original_dir = env::current_dir().expect("cwd");
    env::set_current_dir(&temp_root).expect("set cwd");
    let result = load_settings();
    env::set_current_dir(original_dir).expect("restore cwd");
    fs::remove_dir_all(temp_root).expect("cleanup");

    let err = result.expect_err("broken config must fail");
    assert!(
        err.to_string().contains(CONFIG_FILE),
        "unexpected error: {err}"
    );
}
