//! `window.reearth` binding for the host capabilities.
//!
//! Every member is looked up at call time, so a host that attaches its API
//! after the extension mounts (or detaches it) is tolerated. Missing objects,
//! missing functions, and thrown exceptions all collapse into a no-op.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Date, Function, Object, Reflect};
use time::OffsetDateTime;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use super::types::{BoundingSphere, CameraPosition};
use super::{Camera, Clock, ClockTime, Host, HostEvents, RangeType, TickListener};
use crate::util::geo::look_at_target;

const TICK_EVENT: &str = "tick";

fn reearth() -> Option<JsValue> {
    let window = web_sys::window()?;
    let api = Reflect::get(&window, &"reearth".into()).ok()?;
    (!api.is_undefined() && !api.is_null()).then_some(api)
}

fn member(target: &JsValue, name: &str) -> Option<JsValue> {
    let value = Reflect::get(target, &name.into()).ok()?;
    (!value.is_undefined() && !value.is_null()).then_some(value)
}

fn call(target: &JsValue, name: &str, args: &[JsValue]) -> Option<JsValue> {
    let function = member(target, name)?.dyn_into::<Function>().ok()?;
    let args = args.iter().collect::<Array>();
    match function.apply(target, &args) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("reearth.{name} threw: {err:?}");
            None
        }
    }
}

fn to_js_date(at: OffsetDateTime) -> Date {
    #[allow(clippy::cast_precision_loss)]
    let millis = (at.unix_timestamp_nanos() / 1_000_000) as f64;
    Date::new(&JsValue::from_f64(millis))
}

fn from_js_date(value: &JsValue) -> Option<OffsetDateTime> {
    let millis = value.dyn_ref::<Date>()?.get_time();
    if !millis.is_finite() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let nanos = (millis as i128) * 1_000_000;
    OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()
}

fn set_number(target: &Object, key: &str, value: f64) {
    let _ = Reflect::set(target, &key.into(), &JsValue::from_f64(value));
}

/// Clock backed by `window.reearth.clock`.
#[derive(Debug, Default)]
pub struct BrowserClock;

impl BrowserClock {
    fn clock() -> Option<JsValue> {
        member(&reearth()?, "clock")
    }
}

impl Clock for BrowserClock {
    fn set_time(&self, time: ClockTime) {
        let Some(clock) = Self::clock() else { return };
        let arg = Object::new();
        let _ = Reflect::set(&arg, &"start".into(), &to_js_date(time.start));
        let _ = Reflect::set(&arg, &"stop".into(), &to_js_date(time.stop));
        let _ = Reflect::set(&arg, &"current".into(), &to_js_date(time.current));
        call(&clock, "setTime", &[arg.into()]);
    }

    fn set_speed(&self, speed: f64) {
        let Some(clock) = Self::clock() else { return };
        call(&clock, "setSpeed", &[JsValue::from_f64(speed)]);
    }

    fn play(&self) {
        let Some(clock) = Self::clock() else { return };
        call(&clock, "play", &[]);
    }

    fn pause(&self) {
        let Some(clock) = Self::clock() else { return };
        call(&clock, "pause", &[]);
    }

    fn set_range_type(&self, range_type: RangeType) {
        let Some(clock) = Self::clock() else { return };
        call(&clock, "setRangeType", &[range_type.as_str().into()]);
    }
}

/// Camera backed by `window.reearth.camera`.
#[derive(Debug, Default)]
pub struct BrowserCamera;

impl BrowserCamera {
    fn camera() -> Option<JsValue> {
        member(&reearth()?, "camera")
    }
}

impl Camera for BrowserCamera {
    fn look_at(&self, sphere: &BoundingSphere) {
        let Some(camera) = Self::camera() else { return };
        let target = look_at_target(sphere);
        let destination = Object::new();
        set_number(&destination, "lng", target.lng);
        set_number(&destination, "lat", target.lat);
        set_number(&destination, "height", target.height);
        set_number(&destination, "heading", target.heading);
        set_number(&destination, "pitch", target.pitch);
        set_number(&destination, "range", target.range);
        call(&camera, "lookAt", &[destination.into()]);
    }

    fn position(&self) -> Option<CameraPosition> {
        let position = member(&Self::camera()?, "position")?;
        let number = |key: &str| member(&position, key).and_then(|v| v.as_f64());
        Some(CameraPosition {
            lng: number("lng")?,
            lat: number("lat")?,
            height: number("height")?,
            heading: number("heading").unwrap_or_default(),
            pitch: number("pitch").unwrap_or_default(),
            roll: number("roll").unwrap_or_default(),
            fov: number("fov"),
            aspect_ratio: number("aspectRatio"),
        })
    }

    fn set_view(&self, position: &CameraPosition) {
        let Some(camera) = Self::camera() else { return };
        let view = Object::new();
        set_number(&view, "lng", position.lng);
        set_number(&view, "lat", position.lat);
        set_number(&view, "height", position.height);
        set_number(&view, "heading", position.heading);
        set_number(&view, "pitch", position.pitch);
        set_number(&view, "roll", position.roll);
        if let Some(fov) = position.fov {
            set_number(&view, "fov", fov);
        }
        call(&camera, "setView", &[view.into()]);
    }
}

type JsTickClosure = Closure<dyn Fn(JsValue)>;

/// Event bus backed by `window.reearth.on` / `off`.
///
/// The host identifies listeners by function identity, so each Rust listener
/// keeps its JS closure here until it is removed.
#[derive(Default)]
pub struct BrowserEvents {
    closures: RefCell<Vec<(TickListener, JsTickClosure)>>,
}

impl HostEvents for BrowserEvents {
    fn on_tick(&self, listener: &TickListener) {
        let Some(api) = reearth() else { return };
        let callback = Rc::clone(listener);
        let closure: JsTickClosure = Closure::new(move |date: JsValue| {
            if let Some(at) = from_js_date(&date) {
                callback(at);
            }
        });
        call(&api, "on", &[TICK_EVENT.into(), closure.as_ref().clone()]);
        self.closures.borrow_mut().push((Rc::clone(listener), closure));
    }

    fn off_tick(&self, listener: &TickListener) {
        let mut closures = self.closures.borrow_mut();
        let Some(index) = closures.iter().position(|(l, _)| Rc::ptr_eq(l, listener)) else {
            return;
        };
        let (_, closure) = closures.remove(index);
        if let Some(api) = reearth() {
            call(&api, "off", &[TICK_EVENT.into(), closure.as_ref().clone()]);
        }
    }
}

/// Host wired to the browser's `window.reearth`.
#[must_use]
pub fn browser_host() -> Host {
    if reearth().is_none() {
        log::info!("window.reearth not found; host calls will be ignored until it appears");
    }
    Host::absent()
        .with_clock(Rc::new(BrowserClock))
        .with_camera(Rc::new(BrowserCamera))
        .with_events(Rc::new(BrowserEvents::default()))
}
