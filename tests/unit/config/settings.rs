use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = AppConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, AppConfig::default());
    cfg.validate().unwrap();
    assert_eq!(cfg.morph.particle_count, 4000);
    assert_eq!(cfg.morph.ease, Ease::OutQuart);
    assert_eq!(cfg.landing.readiness_timeout_ms, 8000);
}

#[test]
fn partial_override_keeps_other_defaults() {
    let s = r#"{ "morph": { "particle_count": 2000, "ease": "OutCubic" } }"#;
    let cfg = AppConfig::from_reader(s.as_bytes()).unwrap();
    assert_eq!(cfg.morph.particle_count, 2000);
    assert_eq!(cfg.morph.ease, Ease::OutCubic);
    assert_eq!(cfg.morph.duration_ms, 5000.0);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = AppConfig::from_reader(r#"{ "morph": { "speed": 3 } }"#.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn validation_catches_bad_ranges() {
    let mut cfg = AppConfig::default();
    cfg.morph.particle_count = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = AppConfig::default();
    cfg.morph.duration_ms = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = AppConfig::default();
    cfg.morph.camera.near = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = AppConfig::default();
    cfg.landing.readiness_poll_ms = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn non_finite_spin_rates_are_rejected() {
    let mut cfg = AppConfig::default();
    cfg.morph.spin_x = f32::NAN;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("spin_x"));

    let mut cfg = AppConfig::default();
    cfg.morph.spin_y = f32::INFINITY;
    assert!(cfg.validate().is_err());

    let mut cfg = AppConfig::default();
    cfg.morph.spin_y = -0.004;
    cfg.validate().unwrap();
}

#[test]
fn manifest_url_joins_base_and_name() {
    let cfg = LandingConfig {
        cdn_base: "https://cdn.example/".to_string(),
        ..LandingConfig::default()
    };
    assert_eq!(cfg.manifest_url(), "https://cdn.example/images.json");
}
