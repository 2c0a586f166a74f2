//! Tests for loading the TOML config file.

use ratatui::style::Color;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tictactoe_tui::{Palette, TuiConfig};

/// Shared in-memory log sink.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

fn capture_logs(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.text()
}

#[test]
fn test_load_without_path_uses_defaults() {
    let config = TuiConfig::load(None).expect("defaults");
    assert_eq!(config, TuiConfig::default());
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "x_color = \"magenta\"\nlog_filter = \"debug\"").expect("write config");

    let config = TuiConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.log_filter(), "debug");

    let palette = config.palette().expect("known colors");
    assert_eq!(palette.x, Color::Magenta);
    assert_eq!(palette.o, Color::Blue);
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");
    let err = TuiConfig::load(Some(path.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_bad_color_in_file_is_config_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "o_color = \"not-a-color\"").expect("write config");

    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("not-a-color"));
}

#[test]
fn test_malformed_toml_is_config_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "x_color = ").expect("write config");

    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_default_highlight_is_red_family() {
    let config = TuiConfig::default();
    assert_eq!(config.highlight_color(), "lightred");
    assert_eq!(config.palette().unwrap().highlight, Color::LightRed);
    assert_eq!(Palette::default().highlight, Color::LightRed);
}

#[test]
fn test_loaded_config_is_logged_once_tracing_is_up() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "x_color = \"magenta\"").expect("write config");

    let mut loaded = None;
    let during_load = capture_logs(|| loaded = Some(TuiConfig::from_file(file.path())));
    let config = loaded.expect("load ran").expect("valid config");
    assert!(during_load.is_empty());

    let logs = capture_logs(|| config.log_loaded(Some(file.path())));
    assert!(logs.contains("Config loaded from file"));
    assert!(logs.contains("x_color=magenta"));
}

#[test]
fn test_default_config_is_logged() {
    let logs = capture_logs(|| TuiConfig::default().log_loaded(None));
    assert!(logs.contains("Using default config"));
}
