use std::fs;
use urania::{EphemerisSource, HouseSystem, RulerPolicy, Sign};
use urania_config::{load_config, load_reference_data, parse_config, UraniaConfig};

#[test]
fn test_parse_full_config() {
    let config = parse_config(
        r#"
        reference_data = "tables/reference.toml"

        [engine]
        house_system = "koch"
        ruler_policy = "ascendant"
        ephemeris = "swiss_files"
        "#,
    )
    .unwrap();
    assert_eq!(config.engine.house_system, HouseSystem::Koch);
    assert_eq!(config.engine.ruler_policy, RulerPolicy::Ascendant);
    assert_eq!(config.engine.ephemeris, EphemerisSource::SwissFiles);
    assert_eq!(
        config.reference_data.as_deref(),
        Some(std::path::Path::new("tables/reference.toml"))
    );
}

#[test]
fn test_partial_config_uses_defaults() {
    let config = parse_config("[engine]\nhouse_system = \"equal\"").unwrap();
    assert_eq!(config.engine.house_system, HouseSystem::Equal);
    assert_eq!(config.engine.ruler_policy, RulerPolicy::SunSign);
    assert!(config.reference_data.is_none());
}

#[test]
fn test_rejects_unknown_house_system() {
    assert!(parse_config("[engine]\nhouse_system = \"topocentric\"").is_err());
    assert!(parse_config("colour = \"blue\"").is_err());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(Some(&dir.path().join("missing.toml"))).unwrap_err();
    assert!(format!("{err:#}").contains("missing.toml"));
}

#[test]
fn test_reference_override_relative_to_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("rulers.toml"),
        "[rulers]\nCapricorn = \"Chronos\"\n",
    )
    .unwrap();
    let config_path = dir.path().join("urania.toml");
    fs::write(&config_path, "reference_data = \"rulers.toml\"\n").unwrap();

    let config = load_config(Some(&config_path)).unwrap();
    assert_eq!(config.source.as_deref(), Some(config_path.as_path()));

    let reference = load_reference_data(&config).unwrap();
    assert_eq!(reference.ruler(Sign::Capricorn), Some("Chronos"));
    assert_eq!(reference.ruler(Sign::Aries), None);
}

#[test]
fn test_default_config_uses_embedded_tables() {
    let reference = load_reference_data(&UraniaConfig::default()).unwrap();
    assert_eq!(reference.ruler(Sign::Capricorn), Some("Saturn"));
}
