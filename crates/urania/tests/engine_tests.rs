mod support;

use support::{FixedZone, PanickingEphemeris, StubEphemeris, BUCHAREST};
use urania::chart::AstrologyResult;
use urania::western::{Element, Sign};
use urania::{
    CalculationCause, CalculationError, ChartError, Engine, EngineSettings, GeocodeError,
    ReferenceData, RulerPolicy, Stage, ValidationError,
};

fn stub_engine(settings: EngineSettings) -> Engine<StubEphemeris, FixedZone> {
    Engine::with_components(
        settings,
        ReferenceData::embedded().unwrap(),
        StubEphemeris::new(291.563, 45.0, 94.5),
        BUCHAREST,
    )
}

fn bucharest(engine: &Engine<StubEphemeris, FixedZone>) -> AstrologyResult {
    engine
        .astrology_from_raw("1988-01-12", "15:30", 44.4268, 26.1025)
        .unwrap()
}

#[test]
fn test_astrology_from_stub_positions() {
    let result = bucharest(&stub_engine(EngineSettings::default()));
    assert_eq!(result.sun_sign, Sign::Capricorn);
    assert_eq!(result.rising_sign, Sign::Cancer);
    assert_eq!(result.element, Element::Earth);
    assert_eq!(result.ruling_planet, "Saturn");
    assert_eq!(result.ascendant_degree, 94.5);
    assert_eq!(result.timezone_id, "Europe/Bucharest");
    assert!((result.julian_day - 2_447_173.0625).abs() < 1e-9);
    assert_eq!(result.sun_house.number, 7);
}

#[test]
fn test_ruler_policy_setting_is_applied() {
    let settings = EngineSettings {
        ruler_policy: RulerPolicy::Ascendant,
        ..EngineSettings::default()
    };
    assert_eq!(bucharest(&stub_engine(settings)).ruling_planet, "Moon");
}

#[test]
fn test_repeated_calls_serialize_identically() {
    let engine = stub_engine(EngineSettings::default());
    let first = serde_json::to_string(&bucharest(&engine)).unwrap();
    let second = serde_json::to_string(&bucharest(&engine)).unwrap();
    assert_eq!(first, second);

    let hd_first = engine
        .human_design_from_raw("1988-01-12", "15:30", 44.4268, 26.1025)
        .unwrap();
    let hd_second = engine
        .human_design_from_raw("1988-01-12", "15:30", 44.4268, 26.1025)
        .unwrap();
    assert_eq!(hd_first, hd_second);
}

#[test]
fn test_invalid_time_rejected_before_ephemeris() {
    let engine = Engine::with_components(
        EngineSettings::default(),
        ReferenceData::embedded().unwrap(),
        PanickingEphemeris,
        BUCHAREST,
    );
    let err = engine
        .astrology_from_raw("1988-01-12", "25:99", 44.4268, 26.1025)
        .unwrap_err();
    assert!(matches!(
        err,
        ChartError::Validation(ValidationError::InvalidTime { .. })
    ));

    let err = engine
        .human_design_from_raw("1988-13-12", "12:00", 44.4268, 26.1025)
        .unwrap_err();
    assert!(matches!(
        err,
        ChartError::Validation(ValidationError::InvalidDate { .. })
    ));

    let err = engine
        .human_design_from_raw("1988-01-12", "12:00", 91.0, 26.1025)
        .unwrap_err();
    assert!(matches!(
        err,
        ChartError::Validation(ValidationError::LatitudeOutOfRange(_))
    ));
}

#[test]
fn test_missing_timezone_is_a_calculation_error() {
    let engine = Engine::with_components(
        EngineSettings::default(),
        ReferenceData::embedded().unwrap(),
        PanickingEphemeris,
        FixedZone(None),
    );
    let err = engine
        .astrology_from_raw("1988-01-12", "15:30", 0.0, 0.0)
        .unwrap_err();
    match err {
        ChartError::Calculation(CalculationError { stage, cause }) => {
            assert_eq!(stage, Stage::Astrology);
            assert!(matches!(
                cause,
                CalculationCause::Geocode(GeocodeError::NoTimezone { .. })
            ));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unknown_timezone_name() {
    let engine = Engine::with_components(
        EngineSettings::default(),
        ReferenceData::embedded().unwrap(),
        PanickingEphemeris,
        FixedZone(Some("Mars/Olympus_Mons")),
    );
    let err = engine
        .human_design_from_raw("1988-01-12", "15:30", 0.0, 0.0)
        .unwrap_err();
    assert!(err.to_string().starts_with("Error calculating human design:"));
    assert!(err.to_string().contains("Mars/Olympus_Mons"));
}
