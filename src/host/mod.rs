//! Capabilities the host viewer exposes to the extension.
//!
//! SYSTEM CONTEXT
//! ==============
//! The viewer publishes its camera, clock, and event bus on a global object
//! that may be missing entirely, or missing individual members. Instead of
//! probing that object at every call site, adapters receive a [`Host`] whose
//! capabilities were resolved once at construction: each one is either a
//! live implementation or `None`, and callers no-op on `None`.

#[cfg(feature = "csr")]
pub mod browser;
#[cfg(test)]
pub(crate) mod fake;
pub mod types;


use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use types::{BoundingSphere, CameraPosition};

/// Clock bounds applied together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockTime {
    pub start: OffsetDateTime,
    pub stop: OffsetDateTime,
    pub current: OffsetDateTime,
}

/// What the clock does when it runs past `stop` (or before `start`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeType {
    /// Keep running past the bounds.
    #[default]
    Unbounded,
    /// Stop at the bounds.
    Clamped,
    /// Reverse direction at the bounds.
    Bounced,
}

impl RangeType {
    pub const ALL: [Self; 3] = [Self::Unbounded, Self::Clamped, Self::Bounced];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unbounded => "unbounded",
            Self::Clamped => "clamped",
            Self::Bounced => "bounced",
        }
    }
}

/// Host timeline clock.
pub trait Clock {
    fn set_time(&self, time: ClockTime);
    fn set_speed(&self, speed: f64);
    fn play(&self);
    fn pause(&self);
    fn set_range_type(&self, range_type: RangeType);
}

/// Host 3D camera.
pub trait Camera {
    /// Fly to frame the given sphere.
    fn look_at(&self, sphere: &BoundingSphere);
    /// Current pose, if the host reports one.
    fn position(&self) -> Option<CameraPosition>;
    /// Jump to the given pose.
    fn set_view(&self, position: &CameraPosition);
}

/// Callback invoked with the clock's current time on every tick.
pub type TickListener = Rc<dyn Fn(OffsetDateTime)>;

/// Host event bus; only the `tick` event is used here.
pub trait HostEvents {
    fn on_tick(&self, listener: &TickListener);
    /// Remove a listener previously added with the same `Rc`.
    fn off_tick(&self, listener: &TickListener);
}

/// Resolved set of host capabilities.
#[derive(Clone, Default)]
pub struct Host {
    clock: Option<Rc<dyn Clock>>,
    camera: Option<Rc<dyn Camera>>,
    events: Option<Rc<dyn HostEvents>>,
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Host")
            .field("clock", &self.clock.is_some())
            .field("camera", &self.camera.is_some())
            .field("events", &self.events.is_some())
            .finish()
    }
}

impl Host {
    /// A host with no capabilities; every adapter call becomes a no-op.
    #[must_use]
    pub fn absent() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Rc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    #[must_use]
    pub fn with_camera(mut self, camera: Rc<dyn Camera>) -> Self {
        self.camera = Some(camera);
        self
    }

    #[must_use]
    pub fn with_events(mut self, events: Rc<dyn HostEvents>) -> Self {
        self.events = Some(events);
        self
    }

    #[must_use]
    pub fn clock(&self) -> Option<&dyn Clock> {
        self.clock.as_deref()
    }

    #[must_use]
    pub fn camera(&self) -> Option<&dyn Camera> {
        self.camera.as_deref()
    }

    #[must_use]
    pub fn events(&self) -> Option<&dyn HostEvents> {
        self.events.as_deref()
    }

    /// Camera aspect ratio as reported by the host, if any.
    #[must_use]
    pub fn camera_aspect_ratio(&self) -> Option<f64> {
        self.camera()?.position()?.aspect_ratio
    }
}
