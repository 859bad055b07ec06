use cozy_board::dashboard::ControllerOptions;
use cozy_board::settings::Settings;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let settings = Settings::load(dir.path().join("settings.json")).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.grid_columns, 4);
}

#[test]
fn save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings {
        debug_logging: true,
        log_file: Some(dir.path().join("board.log")),
        data_dir: dir.path().join("data"),
        grid_columns: 6,
        placement_rows: 20,
        pomodoro_tick_ms: 250,
    };
    settings.save(&path).unwrap();
    assert_eq!(Settings::load(&path).unwrap(), settings);
}

#[test]
fn invalid_json_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{oops").unwrap();
    assert!(Settings::load(&path).is_err());
}

#[test]
fn controller_options_are_clamped() {
    let settings = Settings {
        grid_columns: 0,
        placement_rows: 0,
        pomodoro_tick_ms: 0,
        ..Settings::default()
    };
    let options = ControllerOptions::from_settings(&settings);
    assert_eq!(options.grid_columns, 1);
    assert_eq!(options.placement_rows, 1);
    assert_eq!(options.pomodoro_tick, Duration::from_millis(1));
}
