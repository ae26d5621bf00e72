use super::*;

fn assert_close(a: f64, b: f64, eps: f64) {
    let diff = (a - b).abs();
    assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
}

#[test]
fn equator_prime_meridian_lies_on_x_axis() {
    let [x, y, z] = geodetic_to_ecef(0.0, 0.0, 0.0);
    assert_close(x, WGS84_A, 1e-6);
    assert_close(y, 0.0, 1e-6);
    assert_close(z, 0.0, 1e-6);
}

#[test]
fn north_pole_lies_on_z_axis() {
    let [x, y, z] = geodetic_to_ecef(0.0, 90.0, 0.0);
    assert_close(x, 0.0, 1e-6);
    assert_close(y, 0.0, 1e-6);
    assert_close(z, WGS84_A * (1.0 - WGS84_F), 1e-3);
}

#[test]
fn height_extends_along_normal() {
    let [x, _, _] = geodetic_to_ecef(0.0, 0.0, 100.0);
    assert_close(x, WGS84_A + 100.0, 1e-6);
}

#[test]
fn bounding_sphere_keeps_radius() {
    let sphere = bounding_sphere_at(139.767, 35.681, 0.0, 50.0);
    assert_eq!(sphere.radius, 50.0);
    let r = sphere.center.iter().map(|c| c * c).sum::<f64>().sqrt();
    assert!(r > 6_350_000.0 && r < WGS84_A + 1.0);
}

#[test]
fn ecef_converts_back_to_geodetic() {
    let (lng, lat, height) = ecef_to_geodetic(geodetic_to_ecef(139.767, 35.681, 40.0));
    assert_close(lng, 139.767, 1e-7);
    assert_close(lat, 35.681, 1e-7);
    assert_close(height, 40.0, 1e-2);
}

#[test]
fn ecef_at_pole_has_surface_height() {
    let (_, lat, height) = ecef_to_geodetic(geodetic_to_ecef(0.0, 90.0, 0.0));
    assert_close(lat, 90.0, 1e-7);
    assert_close(height, 0.0, 1e-2);
}

#[test]
fn look_at_target_frames_sphere_centre() {
    let target = look_at_target(&bounding_sphere_at(-73.9857, 40.7484, 10.0, 50.0));
    assert_close(target.lng, -73.9857, 1e-7);
    assert_close(target.lat, 40.7484, 1e-7);
    assert_close(target.height, 10.0, 1e-2);
    assert_close(target.heading, 0.0, 0.0);
    assert_close(target.pitch, LOOK_AT_PITCH, 0.0);
    // sin(30 deg) = 0.5, so the camera backs off twice the radius.
    assert_close(target.range, 100.0, 1e-9);
}
