use relcalc_core::settings::{
    load_settings_file, load_settings_or_default, save_settings_file, SettingsSource,
    DEFAULT_LOG_FILE,
};
use relcalc_core::{CalculatorSettings, CopyPolicy, SettingsError};
use std::path::PathBuf;

#[test]
fn settings_survive_save_and_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("relcalc.toml");
    let settings = CalculatorSettings {
        copy_policy: CopyPolicy::ArgumentsOnly,
        log_file: PathBuf::from("calc.log"),
        always_on_top: false,
    };
    save_settings_file(&path, &settings).expect("save settings");
    let loaded = load_settings_file(&path).expect("load settings");
    assert_eq!(loaded, settings);
}

#[test]
fn missing_fields_use_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("relcalc.toml");
    std::fs::write(&path, "copy_policy = \"arguments_only\"\n").expect("write settings");
    let loaded = load_settings_file(&path).expect("load settings");
    assert_eq!(loaded.copy_policy, CopyPolicy::ArgumentsOnly);
    assert_eq!(loaded.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    assert!(loaded.always_on_top);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (loaded, source) =
        load_settings_or_default(&dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(loaded, CalculatorSettings::default());
    assert_eq!(source, SettingsSource::Defaults);
}

#[test]
fn existing_file_is_reported_as_source() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("relcalc.toml");
    std::fs::write(&path, "always_on_top = false\n").expect("write settings");
    let (loaded, source) = load_settings_or_default(&path).expect("load settings");
    assert!(!loaded.always_on_top);
    assert_eq!(source, SettingsSource::File);
}

#[test]
fn unknown_copy_policy_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("relcalc.toml");
    std::fs::write(&path, "copy_policy = \"sideways\"\n").expect("write settings");
    let err = load_settings_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }));
}

#[test]
fn empty_log_file_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("relcalc.toml");
    std::fs::write(&path, "log_file = \"\"\n").expect("write settings");
    let err = load_settings_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::EmptyLogFile));
}
