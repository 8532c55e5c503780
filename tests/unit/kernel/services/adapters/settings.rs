use super::*;
use crate::core::event::KeyCode;
use crate::kernel::editor::FormatOp;
use crate::kernel::services::ports::{EditorConfig, KeybindingRule};

#[test]
fn test_parse_keybinding() {
    assert_eq!(
        parse_keybinding("ctrl+z"),
        Some(Key::ctrl(KeyCode::Char('z')))
    );
    assert_eq!(
        parse_keybinding("Ctrl + Shift + Z"),
        Some(Key::ctrl_shift(KeyCode::Char('z')))
    );
    assert_eq!(parse_keybinding("alt+1"), Some(Key::alt(KeyCode::Char('1'))));
    assert_eq!(parse_keybinding("tab"), Some(Key::simple(KeyCode::Tab)));
    assert_eq!(parse_keybinding("f5"), Some(Key::simple(KeyCode::F(5))));
    assert_eq!(parse_keybinding("f"), Some(Key::simple(KeyCode::Char('f'))));
}

#[test]
fn test_parse_keybinding_rejects_garbage() {
    assert_eq!(parse_keybinding(""), None);
    assert_eq!(parse_keybinding("ctrl+"), None);
    assert_eq!(parse_keybinding("ctrl+nope"), None);
}

#[test]
fn test_parse_command() {
    assert_eq!(parse_command("redo"), Some(Command::Redo));
    assert_eq!(parse_command(" quote "), Some(Command::Format(FormatOp::Quote)));
    assert_eq!(parse_command("nope"), None);
}

#[test]
fn test_write_then_read_default_settings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(".mdpad").join("settings.json");

    write_default_settings(&path).expect("write defaults");
    assert!(path.exists());

    let settings = read_settings(&path).expect("read settings");
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_write_default_settings_keeps_existing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"editor":{"indent_width":2}}"#).expect("write");

    write_default_settings(&path).expect("write defaults");

    let settings = read_settings(&path).expect("read settings");
    assert_eq!(settings.editor, EditorConfig { indent_width: 2 });
    assert!(settings.keybindings.is_empty());
}

#[test]
fn test_read_settings_with_keybindings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{"keybindings":[{"key":"ctrl+shift+z","command":"redo"}]}"#,
    )
    .expect("write");

    let settings = read_settings(&path).expect("read settings");
    assert_eq!(settings.editor, EditorConfig::default());
    assert_eq!(
        settings.keybindings,
        vec![KeybindingRule {
            key: "ctrl+shift+z".to_string(),
            command: "redo".to_string(),
        }]
    );
}

#[test]
fn test_read_settings_invalid_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").expect("write");

    assert!(matches!(read_settings(&path), Err(SettingsError::Parse(_))));
}

#[test]
fn test_read_settings_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing.json");

    assert!(matches!(read_settings(&path), Err(SettingsError::Io(_))));
}
