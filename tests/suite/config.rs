//! Config file to running app.

use std::fs;

use says_engine::{App, Button, ConfigError, FormFactor, Mode, SaysConfig};
use tempfile::tempdir;

#[test]
fn config_file_drives_app_options() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[app]
ascii_only = true
form_factor = "round"

[game]
seed = 8

[haptics]
enabled = false
"#,
    )
    .unwrap();

    let config = SaysConfig::load_from(&path).unwrap();
    let mut app = App::new(Some(&config));
    let options = app.ui_options();
    assert!(options.ascii_only);
    assert_eq!(options.form_factor, FormFactor::Round);
    assert_eq!(app.game().form_factor(), FormFactor::Round);

    app.press(Button::Select);
    assert_eq!(app.mode(), Mode::ShowingSequence);
    let mut twin = App::new(Some(&config));
    twin.press(Button::Select);
    assert_eq!(
        app.state().sequence().as_slice(),
        twin.state().sequence().as_slice()
    );
}

#[test]
fn broken_config_is_reported_with_its_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[app\nascii_only = ").unwrap();

    match SaysConfig::load_from(&path) {
        Err(ConfigError::Parse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}
