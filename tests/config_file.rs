//! config.toml 생성/로드 테스트.
use glass_kiln_toolbox::config::{self, Config};
use glass_kiln_toolbox::schedule::{Conservativeness, ShapeFactor};
use glass_kiln_toolbox::units::UnitSystem;

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = config::load_from(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
}

#[test]
fn saved_config_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = Config {
        unit_system: UnitSystem::Metric,
        language: "ko".to_string(),
        default_glass: "OC96".to_string(),
        conservativeness: Conservativeness::Cautious,
        shape: ShapeFactor::Hollow,
    };
    cfg.save_to(&path).expect("save");
    assert_eq!(config::load_from(&path).expect("load"), cfg);
}

#[test]
fn partial_config_fills_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "unit_system = \"metric\"\nconservativeness = \"fast\"\n").expect("write");
    let cfg = config::load_from(&path).expect("load");
    assert_eq!(cfg.unit_system, UnitSystem::Metric);
    assert_eq!(cfg.conservativeness, Conservativeness::Fast);
    assert_eq!(cfg.default_glass, "BE90");
}

#[test]
fn broken_config_reports_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "unit_system = 12").expect("write");
    assert!(matches!(
        config::load_from(&path),
        Err(config::ConfigError::Serde(_))
    ));
}
