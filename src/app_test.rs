use super::*;
use crate::error::ConfigError;

#[test]
fn from_config_applies_settings() {
    let ctx = ExtensionContext::from_config(
        r#"{"googleStreetViewApiKey":"key-1","cityName":"Tokyo","hideFeedback":true}"#,
        Host::absent(),
    )
    .expect("config");

    assert_eq!(ctx.env.require_street_view_api_key(), Ok("key-1".to_owned()));
    assert_eq!(ctx.env.city_name.get().as_deref(), Some("Tokyo"));
    assert!(ctx.env.hide_feedback.get());
    assert!(ctx.tree.is_empty());
    assert!(ctx.selection.layer_selection.get().is_empty());
}

#[test]
fn from_config_rejects_malformed_json() {
    let err = ExtensionContext::from_config("{not json", Host::absent()).err().expect("error");
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn missing_api_key_is_reported_by_name() {
    let ctx = ExtensionContext::from_config("{}", Host::absent()).expect("config");
    assert_eq!(
        ctx.env.require_street_view_api_key().map_err(|err| err.to_string()),
        Err("Missing environment variable: GOOGLE_STREET_VIEW_API_KEY".to_owned())
    );
}
