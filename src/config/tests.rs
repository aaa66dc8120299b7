use super::load::{default_config_path, default_log_path, resolve_config_path};
use super::schema::*;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_explicit_variable() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("MELODYSTREAM_CONFIG_PATH", "/tmp/melodystream-test.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        PathBuf::from("/tmp/melodystream-test.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/xdg-config-home")
            .join("melodystream")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("melodystream")
            .join("config.toml")
    );
}

#[test]
fn default_log_path_uses_state_dir() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_STATE_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_log_path().unwrap(),
        PathBuf::from("/tmp/home-dir/.local/state")
            .join("melodystream")
            .join("melodystream.log")
    );
}

#[test]
fn log_file_setting_overrides_default_path() {
    let mut s = Settings::default();
    s.logging.file = Some(PathBuf::from("/var/tmp/ms.log"));
    assert_eq!(s.log_file_path(), Some(PathBuf::from("/var/tmp/ms.log")));
}

#[test]
fn defaults_are_valid() {
    let s = Settings::default();
    assert!(s.validate().is_ok());
    assert_eq!(s.ui.header_text, "MelodyStream");
    assert_eq!(s.ui.toast_ms, 3000);
    assert_eq!(s.logging.level, "info");
    assert_eq!(s.logging.format, LogFormat::Pretty);
    assert!(s.catalog.seed_path.is_none());
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut s = Settings::default();
    s.ui.toast_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.ui.volume_step = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.ui.position_step = 101;
    assert!(s.validate().is_err());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[ui]
header_text = "Tunes"
tagline = "hello"
toast_ms = 1500
volume_step = 10
now_playing_fields = ["artist", "title", "duration"]
now_playing_separator = " • "

[catalog]
seed_path = "/tmp/seed.toml"

[logging]
level = "debug"
format = "json"
file = "/tmp/melodystream.log"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MELODYSTREAM_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("MELODYSTREAM__UI__TOAST_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.ui.header_text, "Tunes");
    assert_eq!(s.ui.tagline, "hello");
    assert_eq!(s.ui.toast_ms, 1500);
    assert_eq!(s.ui.volume_step, 10);
    assert_eq!(s.ui.position_step, 5);
    assert_eq!(
        s.ui.now_playing_fields,
        vec![
            TrackDisplayField::Artist,
            TrackDisplayField::Title,
            TrackDisplayField::Duration
        ]
    );
    assert_eq!(s.ui.now_playing_separator, " • ");
    assert_eq!(s.catalog.seed_path, Some(PathBuf::from("/tmp/seed.toml")));
    assert_eq!(s.logging.level, "debug");
    assert_eq!(s.logging.format, LogFormat::Json);
    assert_eq!(s.logging.file, Some(PathBuf::from("/tmp/melodystream.log")));
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[ui]
toast_ms = 1500
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MELODYSTREAM_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("MELODYSTREAM__UI__TOAST_MS", "250");

    let s = Settings::load().unwrap();
    assert_eq!(s.ui.toast_ms, 250);
}

#[test]
fn missing_config_file_yields_defaults() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("absent.toml");
    let _g1 = EnvGuard::set("MELODYSTREAM_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("MELODYSTREAM__UI__TOAST_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.ui.toast_ms, 3000);
    assert_eq!(s.ui.header_text, "MelodyStream");
}
