//! Creating pedestrian (street-view) layers.

#[cfg(test)]
#[path = "pedestrian_test.rs"]
mod pedestrian_test;

use std::rc::Rc;

use uuid::Uuid;

use super::{HeadingPitch, LayerContent, LayerModel, Location, PedestrianContent};
use crate::state::environment::EnvironmentVariables;
use crate::host::types::BoundingSphere;
use crate::util::geo::bounding_sphere_at;

/// Radius of the "move camera to" target around a pedestrian location.
pub const PEDESTRIAN_SPHERE_RADIUS_M: f64 = 50.0;

/// Build a new pedestrian layer at `location`.
///
/// Without a location the environment's initial pedestrian coordinates are
/// used; with neither, the layer starts unplaced and has no bounding sphere.
#[must_use]
pub fn create_pedestrian_layer(
    location: Option<Location>,
    title: Option<String>,
    env: &EnvironmentVariables,
) -> Rc<LayerModel> {
    let initial = env.initial_pedestrian_coordinates.get();
    let location = location.or_else(|| {
        initial.map(|position| Location {
            lng: position.lng,
            lat: position.lat,
            height: Some(position.height),
        })
    });
    // Camera headings are radians; the panorama works in degrees.
    let heading_pitch = initial.map(|position| HeadingPitch {
        heading: position.heading.to_degrees(),
        pitch: position.pitch.to_degrees(),
    });

    let content = PedestrianContent::default();
    content.location.set_silent(location);
    content.heading_pitch.set_silent(heading_pitch);
    let location_cell = content.location.clone();

    let layer = LayerModel::new(Uuid::new_v4().to_string(), LayerContent::Pedestrian(content));
    layer.title.set_silent(title);
    layer.bounding_sphere.set_silent(location.map(|location| sphere_around(&location)));
    // Walking in the panorama moves the layer; the move target follows.
    let bounding_sphere = layer.bounding_sphere.clone();
    location_cell
        .subscribe(move |location| bounding_sphere.set(location.as_ref().map(sphere_around)))
        .forget();
    log::debug!("created pedestrian layer {} at {location:?}", layer.id);
    Rc::new(layer)
}

fn sphere_around(location: &Location) -> BoundingSphere {
    bounding_sphere_at(location.lng, location.lat, location.height.unwrap_or(0.0), PEDESTRIAN_SPHERE_RADIUS_M)
}
