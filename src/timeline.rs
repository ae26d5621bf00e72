//! Timeline intents translated into host clock calls.
//!
//! Every operation is a stateless pass-through to the host clock. When the
//! host has no clock (or no event bus) the call is dropped silently; repeated
//! calls therefore repeat the same delegation and nothing more.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use std::rc::Rc;

use time::OffsetDateTime;

use crate::host::{Clock, ClockTime, Host, HostEvents, RangeType, TickListener};

/// Bounds and speed for a play request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayRequest {
    pub start: OffsetDateTime,
    pub stop: OffsetDateTime,
    pub current: OffsetDateTime,
    pub speed: f64,
}

impl PlayRequest {
    fn time(&self) -> ClockTime {
        ClockTime { start: self.start, stop: self.stop, current: self.current }
    }
}

/// Timeline controls bound to one host.
#[derive(Clone, Debug)]
pub struct Timeline {
    host: Host,
}

impl Timeline {
    #[must_use]
    pub fn new(host: Host) -> Self {
        Self { host }
    }

    /// The host clock, if there is one.
    #[must_use]
    pub fn clock(&self) -> Option<&dyn Clock> {
        self.host.clock()
    }

    fn with_clock(&self, op: &str, f: impl FnOnce(&dyn Clock)) {
        match self.host.clock() {
            Some(clock) => {
                log::debug!("timeline {op}");
                f(clock);
            }
            None => log::trace!("timeline {op} ignored: host clock absent"),
        }
    }

    fn with_events(&self, op: &str, f: impl FnOnce(&dyn HostEvents)) {
        match self.host.events() {
            Some(events) => f(events),
            None => log::trace!("timeline {op} ignored: host events absent"),
        }
    }

    /// Apply the bounds, set a forward speed, and start playing.
    pub fn play(&self, request: PlayRequest) {
        self.with_clock("play", |clock| {
            clock.set_time(request.time());
            clock.set_speed(request.speed);
            clock.play();
        });
    }

    /// Apply the bounds, set the negated speed, and start playing.
    pub fn play_reverse(&self, request: PlayRequest) {
        self.with_clock("play_reverse", |clock| {
            clock.set_time(request.time());
            clock.set_speed(-request.speed);
            clock.play();
        });
    }

    pub fn pause(&self) {
        self.with_clock("pause", |clock| clock.pause());
    }

    /// Pause, then move to the given bounds. Never resumes playback.
    pub fn jump(&self, start: OffsetDateTime, stop: OffsetDateTime, current: OffsetDateTime) {
        self.with_clock("jump", |clock| {
            clock.pause();
            clock.set_time(ClockTime { start, stop, current });
        });
    }

    pub fn set_speed(&self, speed: f64) {
        self.with_clock("set_speed", |clock| clock.set_speed(speed));
    }

    pub fn set_range_type(&self, range_type: RangeType) {
        self.with_clock("set_range_type", |clock| clock.set_range_type(range_type));
    }

    /// Start delivering clock ticks to `listener`.
    pub fn add_tick_listener(&self, listener: &TickListener) {
        self.with_events("add_tick_listener", |events| events.on_tick(listener));
    }

    /// Stop delivering ticks to a listener added with the same `Rc`.
    pub fn remove_tick_listener(&self, listener: &TickListener) {
        self.with_events("remove_tick_listener", |events| events.off_tick(listener));
    }

    /// Add `f` as a tick listener until the returned guard is dropped.
    #[must_use = "dropping the subscription removes the listener immediately"]
    pub fn subscribe_ticks(&self, f: impl Fn(OffsetDateTime) + 'static) -> TickSubscription {
        let listener: TickListener = Rc::new(f);
        self.add_tick_listener(&listener);
        TickSubscription { timeline: self.clone(), listener }
    }
}

/// Guard returned by [`Timeline::subscribe_ticks`].
pub struct TickSubscription {
    timeline: Timeline,
    listener: TickListener,
}

impl Drop for TickSubscription {
    fn drop(&mut self) {
        self.timeline.remove_tick_listener(&self.listener);
    }
}
