use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_are_absent() {
    let env = EnvironmentVariables::default();
    assert_eq!(env.plateau_api_url.get(), None);
    assert_eq!(env.google_street_view_api_key.get(), None);
    assert_eq!(env.initial_pedestrian_coordinates.get(), None);
    assert!(!env.hide_feedback.get());
}

#[test]
fn cells_are_independent() {
    let env = EnvironmentVariables::default();
    env.city_name.set(Some("Tokyo".to_owned()));
    assert_eq!(env.city_code.get(), None);
    assert_eq!(env.city_name.get().as_deref(), Some("Tokyo"));
}

// =============================================================
// Config document
// =============================================================

#[test]
fn from_json_reads_camel_case_keys() {
    let cfg = EnvironmentConfig::from_json(
        r#"{
            "plateauApiUrl": "https://api.example.test",
            "googleStreetViewApiKey": "key-123",
            "hideFeedback": true,
            "initialPedestrianCoordinates": {"lng": 139.76, "lat": 35.68, "height": 2.0},
            "somethingElse": 1
        }"#,
    )
    .unwrap();

    assert_eq!(cfg.plateau_api_url.as_deref(), Some("https://api.example.test"));
    assert_eq!(cfg.google_street_view_api_key.as_deref(), Some("key-123"));
    assert_eq!(cfg.hide_feedback, Some(true));
    let coords = cfg.initial_pedestrian_coordinates.unwrap();
    assert_eq!(coords.lng, 139.76);
    assert_eq!(coords.heading, 0.0);
}

#[test]
fn from_json_rejects_non_objects() {
    let err = EnvironmentConfig::from_json("[1, 2]").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn apply_only_touches_present_keys() {
    let env = EnvironmentVariables::default();
    env.city_name.set(Some("Osaka".to_owned()));
    env.logo.set(Some("logo.png".to_owned()));

    env.apply(EnvironmentConfig {
        city_name: Some("Sapporo".to_owned()),
        logo: Some("   ".to_owned()),
        hide_feedback: Some(true),
        ..EnvironmentConfig::default()
    });

    assert_eq!(env.city_name.get().as_deref(), Some("Sapporo"));
    assert_eq!(env.logo.get().as_deref(), Some("logo.png"));
    assert!(env.hide_feedback.get());
    assert_eq!(env.site_url.get(), None);
}

// =============================================================
// Required key
// =============================================================

#[test]
fn require_street_view_api_key_fails_when_missing() {
    let env = EnvironmentVariables::default();
    let err = env.require_street_view_api_key().unwrap_err();
    assert_eq!(err, ConfigError::MissingVariable(STREET_VIEW_API_KEY_VAR));
    assert_eq!(err.to_string(), "Missing environment variable: GOOGLE_STREET_VIEW_API_KEY");
}

#[test]
fn require_street_view_api_key_returns_configured_key() {
    let env = EnvironmentVariables::default();
    env.google_street_view_api_key.set(Some("abc".to_owned()));
    assert_eq!(env.require_street_view_api_key().unwrap(), "abc");
}
