//! Binds a pedestrian layer's cells to the street-view widget.
//!
//! DESIGN
//! ======
//! The controller lives exactly as long as the street-view panel is mounted.
//! Widget callbacks write into the layer's cells; while the layer is
//! synchronized, those writes are mirrored onto the host camera. Dropping the
//! controller desynchronizes the layer, whatever its previous state.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::rc::Rc;

use super::frame::FrameScheduler;
use super::widget::{WidgetEvent, WidgetState};
use crate::host::Host;
use crate::host::types::CameraPosition;
use crate::layers::{HeadingPitch, Location, PanoState, PedestrianContent};
use crate::state::atom::{Atom, Subscription};

/// Callback run one frame after a zoom change, with that zoom.
pub type ZoomSettled = Rc<dyn Fn(f64)>;

pub struct StreetViewController {
    cells: PedestrianContent,
    frames: Rc<dyn FrameScheduler>,
    on_zoom_settled: ZoomSettled,
    widget: Atom<WidgetState>,
    _camera_sync: Vec<Subscription>,
}

impl StreetViewController {
    #[must_use]
    pub fn new(
        cells: &PedestrianContent,
        host: Host,
        frames: Rc<dyn FrameScheduler>,
        on_zoom_settled: ZoomSettled,
    ) -> Self {
        let cells = cells.clone();
        let camera_sync = if host.camera().is_some() {
            vec![
                watch(&cells.location, &cells, &host),
                watch(&cells.heading_pitch, &cells, &host),
                watch(&cells.zoom, &cells, &host),
                watch(&cells.synchronized, &cells, &host),
            ]
        } else {
            Vec::new()
        };

        Self {
            cells,
            frames,
            on_zoom_settled,
            widget: Atom::new(WidgetState::Loading),
            _camera_sync: camera_sync,
        }
    }

    /// Load state of the widget, for the view's placeholder.
    #[must_use]
    pub fn widget(&self) -> &Atom<WidgetState> {
        &self.widget
    }

    #[must_use]
    pub fn cells(&self) -> &PedestrianContent {
        &self.cells
    }

    /// First successful load. All four cells are stored before any of them
    /// notifies.
    pub fn on_load(&self, pano: String, location: Location, heading_pitch: HeadingPitch, zoom: f64) {
        log::debug!("street view loaded pano {pano}");
        self.cells.pano.set_silent(PanoState::Id(pano));
        self.cells.location.set_silent(Some(location));
        self.cells.heading_pitch.set_silent(Some(heading_pitch));
        self.cells.zoom.set_silent(Some(zoom));

        self.cells.pano.notify();
        self.cells.location.notify();
        self.cells.heading_pitch.notify();
        self.cells.zoom.notify();
        self.advance(WidgetEvent::Loaded);
    }

    /// The user walked to another panorama.
    pub fn on_location_change(&self, pano: String, location: Location) {
        self.cells.pano.set(PanoState::Id(pano));
        self.cells.location.set(Some(location));
        self.advance(WidgetEvent::LocationChanged);
    }

    pub fn on_heading_pitch_change(&self, heading_pitch: HeadingPitch) {
        self.cells.heading_pitch.set(Some(heading_pitch));
    }

    /// The widget could not show this location. Only the pano is cleared.
    pub fn on_error(&self) {
        log::warn!("street view failed to load {:?}", self.cells.location.get());
        self.cells.pano.set(PanoState::Unavailable);
        self.advance(WidgetEvent::Failed);
    }

    /// Start following the panorama with the host camera.
    pub fn on_synchronize(&self) {
        self.cells.synchronized.set(true);
    }

    /// Store the zoom now; tell the layout about it on the next frame, after
    /// the re-render it triggers has settled.
    pub fn on_zoom_change(&self, zoom: f64) {
        self.cells.zoom.set(Some(zoom));
        let settled = Rc::clone(&self.on_zoom_settled);
        self.frames.request_frame(Box::new(move || settled(zoom)));
    }

    fn advance(&self, event: WidgetEvent) {
        let next = self.widget.with(|state| state.next(event));
        if self.widget.with(|state| *state != next) {
            self.widget.set(next);
        }
    }
}

impl Drop for StreetViewController {
    fn drop(&mut self) {
        self.cells.synchronized.set(false);
    }
}

fn watch<T: Clone + 'static>(atom: &Atom<T>, cells: &PedestrianContent, host: &Host) -> Subscription {
    let cells = cells.clone();
    let host = host.clone();
    atom.subscribe(move |_| sync_camera(&cells, &host))
}

/// Vertical field of view, in degrees, matching a panorama zoom level.
#[must_use]
pub fn zoom_to_fov_degrees(zoom: f64) -> f64 {
    180.0 / 2f64.powf(zoom)
}

/// Camera pose that looks out of the panorama.
#[must_use]
pub fn panorama_camera(
    location: Location,
    heading_pitch: Option<HeadingPitch>,
    zoom: Option<f64>,
) -> CameraPosition {
    let heading_pitch = heading_pitch.unwrap_or_default();
    CameraPosition {
        lng: location.lng,
        lat: location.lat,
        height: location.height.unwrap_or(0.0),
        heading: heading_pitch.heading.to_radians(),
        pitch: heading_pitch.pitch.to_radians(),
        roll: 0.0,
        fov: zoom.map(|zoom| zoom_to_fov_degrees(zoom).to_radians()),
        aspect_ratio: None,
    }
}

fn sync_camera(cells: &PedestrianContent, host: &Host) {
    if !cells.synchronized.get() {
        return;
    }
    let (Some(camera), Some(location)) = (host.camera(), cells.location.get()) else {
        return;
    };
    camera.set_view(&panorama_camera(location, cells.heading_pitch.get(), cells.zoom.get()));
}
