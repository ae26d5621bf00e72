//! Recording host used by unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use super::types::{BoundingSphere, CameraPosition};
use super::{Camera, Clock, ClockTime, Host, HostEvents, RangeType, TickListener};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    SetTime(ClockTime),
    SetSpeed(f64),
    Play,
    Pause,
    SetRangeType(RangeType),
    LookAt(BoundingSphere),
    SetView(CameraPosition),
    OnTick,
    OffTick,
}

/// Implements every capability and records calls in order.
#[derive(Default)]
pub struct FakeHost {
    pub calls: RefCell<Vec<Call>>,
    pub position: RefCell<Option<CameraPosition>>,
    pub listeners: RefCell<Vec<TickListener>>,
}

impl FakeHost {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// A `Host` wired to every capability of `fake`.
    pub fn host(fake: &Rc<Self>) -> Host {
        Host::absent()
            .with_clock(Rc::clone(fake) as Rc<dyn Clock>)
            .with_camera(Rc::clone(fake) as Rc<dyn Camera>)
            .with_events(Rc::clone(fake) as Rc<dyn HostEvents>)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn playing(&self) -> bool {
        let mut playing = false;
        for call in self.calls.borrow().iter() {
            match call {
                Call::Play => playing = true,
                Call::Pause => playing = false,
                _ => {}
            }
        }
        playing
    }

    pub fn tick(&self, at: time::OffsetDateTime) {
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener(at);
        }
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl Clock for FakeHost {
    fn set_time(&self, time: ClockTime) {
        self.record(Call::SetTime(time));
    }

    fn set_speed(&self, speed: f64) {
        self.record(Call::SetSpeed(speed));
    }

    fn play(&self) {
        self.record(Call::Play);
    }

    fn pause(&self) {
        self.record(Call::Pause);
    }

    fn set_range_type(&self, range_type: RangeType) {
        self.record(Call::SetRangeType(range_type));
    }
}

impl Camera for FakeHost {
    fn look_at(&self, sphere: &BoundingSphere) {
        self.record(Call::LookAt(*sphere));
    }

    fn position(&self) -> Option<CameraPosition> {
        *self.position.borrow()
    }

    fn set_view(&self, position: &CameraPosition) {
        self.record(Call::SetView(*position));
    }
}

impl HostEvents for FakeHost {
    fn on_tick(&self, listener: &TickListener) {
        self.record(Call::OnTick);
        self.listeners.borrow_mut().push(Rc::clone(listener));
    }

    fn off_tick(&self, listener: &TickListener) {
        self.record(Call::OffTick);
        self.listeners.borrow_mut().retain(|l| !Rc::ptr_eq(l, listener));
    }
}
