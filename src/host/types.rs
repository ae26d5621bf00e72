//! Value types exchanged with the host viewer.

use serde::{Deserialize, Serialize};

/// Camera pose in geographic terms, as the host reports and accepts it.
///
/// `lng`/`lat` are degrees, orientation angles are radians, and height is
/// metres above the ellipsoid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraPosition {
    pub lng: f64,
    pub lat: f64,
    pub height: f64,
    #[serde(default)]
    pub heading: f64,
    #[serde(default)]
    pub pitch: f64,
    #[serde(default)]
    pub roll: f64,
    /// Vertical field of view in radians.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fov: Option<f64>,
    /// Viewport width / height, only present on positions read from the host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
}

/// Earth-centred sphere enclosing a layer, used as a "move camera to" target.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingSphere {
    /// ECEF centre in metres.
    pub center: [f64; 3],
    pub radius: f64,
}

/// Orbit target for the host's `camera.lookAt`: a geographic point plus the
/// camera's heading, pitch (radians) and distance from it (metres).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LookAtTarget {
    pub lng: f64,
    pub lat: f64,
    pub height: f64,
    pub heading: f64,
    pub pitch: f64,
    pub range: f64,
}
