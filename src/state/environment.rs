//! Deployment configuration cells.
//!
//! DESIGN
//! ======
//! Each setting is an independent cell; the store enforces nothing across
//! keys. `None` means "use the platform default" or "feature disabled", and
//! every dependent must guard for it. The host page hands the settings over
//! as one JSON document, which [`EnvironmentVariables::apply`] fans out into
//! the cells.

#[cfg(test)]
#[path = "environment_test.rs"]
mod environment_test;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::host::types::CameraPosition;
use crate::state::atom::Atom;

/// Name the street-view key is reported under when it is missing.
pub const STREET_VIEW_API_KEY_VAR: &str = "GOOGLE_STREET_VIEW_API_KEY";

/// Reactive deployment settings shared through context.
#[derive(Clone, Debug, Default)]
pub struct EnvironmentVariables {
    // Platform settings.
    pub plateau_api_url: Atom<Option<String>>,
    pub project_id: Atom<Option<String>>,
    pub geo_api_url: Atom<Option<String>>,
    pub gsi_tile_url: Atom<Option<String>>,
    pub google_street_view_api_key: Atom<Option<String>>,
    pub hide_feedback: Atom<bool>,

    // Per-site customisation.
    pub city_name: Atom<Option<String>>,
    pub city_code: Atom<Option<String>>,
    pub primary_color: Atom<Option<String>>,
    pub logo: Atom<Option<String>>,
    pub site_url: Atom<Option<String>>,
    pub initial_pedestrian_coordinates: Atom<Option<CameraPosition>>,
    pub plateau_geojson_url: Atom<Option<String>>,
}

/// Configuration document as delivered by the host page.
///
/// Every key is optional; unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvironmentConfig {
    pub plateau_api_url: Option<String>,
    pub project_id: Option<String>,
    pub geo_api_url: Option<String>,
    pub gsi_tile_url: Option<String>,
    pub google_street_view_api_key: Option<String>,
    pub hide_feedback: Option<bool>,
    pub city_name: Option<String>,
    pub city_code: Option<String>,
    pub primary_color: Option<String>,
    pub logo: Option<String>,
    pub site_url: Option<String>,
    pub initial_pedestrian_coordinates: Option<CameraPosition>,
    pub plateau_geojson_url: Option<String>,
}

impl EnvironmentConfig {
    /// Parse the host's JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl EnvironmentVariables {
    /// Write every key present in `config` into its cell.
    ///
    /// Keys absent from the document leave their cells untouched, and empty
    /// strings count as absent.
    pub fn apply(&self, config: EnvironmentConfig) {
        set_present(&self.plateau_api_url, config.plateau_api_url);
        set_present(&self.project_id, config.project_id);
        set_present(&self.geo_api_url, config.geo_api_url);
        set_present(&self.gsi_tile_url, config.gsi_tile_url);
        set_present(&self.google_street_view_api_key, config.google_street_view_api_key);
        if let Some(hide) = config.hide_feedback {
            self.hide_feedback.set(hide);
        }
        set_present(&self.city_name, config.city_name);
        set_present(&self.city_code, config.city_code);
        set_present(&self.primary_color, config.primary_color);
        set_present(&self.logo, config.logo);
        set_present(&self.site_url, config.site_url);
        if let Some(coords) = config.initial_pedestrian_coordinates {
            self.initial_pedestrian_coordinates.set(Some(coords));
        }
        set_present(&self.plateau_geojson_url, config.plateau_geojson_url);
        log::debug!("environment configuration applied");
    }

    /// The street-view API key, which the pedestrian panel cannot render
    /// without.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVariable`] when no key is configured.
    pub fn require_street_view_api_key(&self) -> Result<String, ConfigError> {
        self.google_street_view_api_key
            .get()
            .ok_or(ConfigError::MissingVariable(STREET_VIEW_API_KEY_VAR))
    }
}

fn set_present(cell: &Atom<Option<String>>, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        cell.set(Some(value));
    }
}
