//! WGS84 helpers for turning geographic positions into host targets.

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use crate::host::types::{BoundingSphere, LookAtTarget};

/// WGS84 semi-major axis (meters).
pub const WGS84_A: f64 = 6_378_137.0;
/// WGS84 flattening.
pub const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// WGS84 first eccentricity squared.
pub const WGS84_E2: f64 = WGS84_F * (2.0 - WGS84_F);
/// WGS84 semi-minor axis (meters).
pub const WGS84_B: f64 = WGS84_A * (1.0 - WGS84_F);
/// WGS84 second eccentricity squared.
pub const WGS84_EP2: f64 = WGS84_E2 / (1.0 - WGS84_E2);

/// Pitch the camera looks down at a target with, in radians.
pub const LOOK_AT_PITCH: f64 = -0.5;
/// Vertical field of view assumed when framing a sphere, in radians.
pub const LOOK_AT_FOV: f64 = std::f64::consts::FRAC_PI_3;

/// Earth-centred, Earth-fixed coordinates (metres) of a point given in
/// degrees and metres above the ellipsoid.
#[must_use]
pub fn geodetic_to_ecef(lng_deg: f64, lat_deg: f64, height_m: f64) -> [f64; 3] {
    let (sin_lat, cos_lat) = lat_deg.to_radians().sin_cos();
    let (sin_lon, cos_lon) = lng_deg.to_radians().sin_cos();

    let n = WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
    [
        (n + height_m) * cos_lat * cos_lon,
        (n + height_m) * cos_lat * sin_lon,
        (n * (1.0 - WGS84_E2) + height_m) * sin_lat,
    ]
}

/// Sphere of `radius_m` around a geographic point.
#[must_use]
pub fn bounding_sphere_at(lng_deg: f64, lat_deg: f64, height_m: f64, radius_m: f64) -> BoundingSphere {
    BoundingSphere { center: geodetic_to_ecef(lng_deg, lat_deg, height_m), radius: radius_m }
}

/// Degrees and metres above the ellipsoid for an ECEF point, as
/// `(lng, lat, height)`.
///
/// Bowring's closed form; sub-millimetre for points near the surface.
#[must_use]
pub fn ecef_to_geodetic(ecef: [f64; 3]) -> (f64, f64, f64) {
    let [x, y, z] = ecef;
    let p = x.hypot(y);
    let lng = y.atan2(x);

    let theta = (z * WGS84_A).atan2(p * WGS84_B);
    let (sin_theta, cos_theta) = theta.sin_cos();
    let lat = (z + WGS84_EP2 * WGS84_B * sin_theta.powi(3)).atan2(p - WGS84_E2 * WGS84_A * cos_theta.powi(3));

    let (sin_lat, cos_lat) = lat.sin_cos();
    let n = WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
    let height = if cos_lat.abs() < 1e-10 { z.abs() - WGS84_B } else { p / cos_lat - n };

    (lng.to_degrees(), lat.to_degrees(), height)
}

/// Camera target that frames `sphere` whole: its geographic centre, looked at
/// from the north at [`LOOK_AT_PITCH`], far enough back that the sphere fills
/// a [`LOOK_AT_FOV`] view.
#[must_use]
pub fn look_at_target(sphere: &BoundingSphere) -> LookAtTarget {
    let (lng, lat, height) = ecef_to_geodetic(sphere.center);
    LookAtTarget {
        lng,
        lat,
        height,
        heading: 0.0,
        pitch: LOOK_AT_PITCH,
        range: sphere.radius / (LOOK_AT_FOV / 2.0).sin(),
    }
}
