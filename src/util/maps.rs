//! Binding to the Google Maps JavaScript street-view panorama.
//!
//! SYSTEM CONTEXT
//! ==============
//! The panorama is a third-party widget. This module loads its script once
//! per page, creates a `google.maps.StreetViewPanorama` inside a container,
//! and translates its events into [`StreetViewController`] callbacks.
//! Listeners hold the controller weakly; the controller's lifetime is the
//! view's.

#[cfg(test)]
#[path = "maps_test.rs"]
mod maps_test;

use serde_json::{Map, Value, json};

use crate::layers::{HeadingPitch, Location, PanoState, PedestrianContent};

#[cfg(feature = "csr")]
use crate::content::StreetViewController;

/// DOM id of the injected Maps script.
pub const MAPS_SCRIPT_ID: &str = "google-maps-js";

/// Panorama status string for a successful load.
pub const STATUS_OK: &str = "OK";

/// URL of the Maps JavaScript API for `api_key`.
#[must_use]
pub fn maps_script_url(api_key: &str) -> String {
    format!("https://maps.googleapis.com/maps/api/js?key={}&v=weekly", encode_key(api_key))
}

#[cfg(feature = "csr")]
fn encode_key(api_key: &str) -> String {
    js_sys::encode_uri_component(api_key).into()
}

#[cfg(not(feature = "csr"))]
fn encode_key(api_key: &str) -> String {
    api_key.to_owned()
}

/// Callback waiting for the Maps script; `false` means it failed to load.
pub type ReadyCallback = Box<dyn FnOnce(bool)>;

/// What the caller of [`MapsLoader::request`] must do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStep {
    /// Nothing loaded or loading: inject a fresh script tag.
    Inject,
    /// A script is in flight; the callback was queued.
    Wait,
    /// Already loaded; the callback was returned to run now.
    Ready,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
}

/// Page-wide bookkeeping for the Maps script.
///
/// Every mount waiting on the same script is queued, and all of them hear the
/// outcome. A failed load returns to idle so the next request injects again
/// instead of waiting on a script that will never fire.
#[derive(Default)]
pub struct MapsLoader {
    state: LoadState,
    waiting: Vec<ReadyCallback>,
}

impl MapsLoader {
    /// Register `on_ready`. With [`LoadStep::Ready`] the callback comes back
    /// for the caller to run outside any borrow of the loader.
    pub fn request(&mut self, on_ready: ReadyCallback) -> (LoadStep, Option<ReadyCallback>) {
        match self.state {
            LoadState::Loaded => (LoadStep::Ready, Some(on_ready)),
            LoadState::Loading => {
                self.waiting.push(on_ready);
                (LoadStep::Wait, None)
            }
            LoadState::Idle => {
                self.state = LoadState::Loading;
                self.waiting.push(on_ready);
                (LoadStep::Inject, None)
            }
        }
    }

    /// Record the script's outcome and hand back every queued callback.
    pub fn finish(&mut self, loaded: bool) -> Vec<ReadyCallback> {
        self.state = if loaded { LoadState::Loaded } else { LoadState::Idle };
        std::mem::take(&mut self.waiting)
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Loaded
    }

    #[must_use]
    pub fn waiting(&self) -> usize {
        self.waiting.len()
    }
}

/// What the panorama should open on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanoramaView {
    pub pano: Option<String>,
    pub location: Option<Location>,
    pub heading_pitch: Option<HeadingPitch>,
    pub zoom: Option<f64>,
}

impl PanoramaView {
    /// Current view stored in a layer's cells.
    #[must_use]
    pub fn from_cells(cells: &PedestrianContent) -> Self {
        Self {
            pano: cells.pano.with(|pano| pano.id().map(str::to_owned)),
            location: cells.location.get(),
            heading_pitch: cells.heading_pitch.get(),
            zoom: cells.zoom.get(),
        }
    }

    /// `StreetViewPanoramaOptions` for this view.
    ///
    /// A known pano id takes priority over the location.
    #[must_use]
    pub fn options(&self) -> Value {
        let mut options = Map::new();
        if let Some(pano) = &self.pano {
            options.insert("pano".into(), json!(pano));
        } else if let Some(location) = self.location {
            options.insert("position".into(), json!({ "lat": location.lat, "lng": location.lng }));
        }
        let pov = self.heading_pitch.unwrap_or_default();
        options.insert("pov".into(), json!({ "heading": pov.heading, "pitch": pov.pitch }));
        if let Some(zoom) = self.zoom {
            options.insert("zoom".into(), json!(zoom));
        }
        options.insert("addressControl".into(), json!(false));
        options.insert("fullscreenControl".into(), json!(false));
        options.insert("motionTracking".into(), json!(false));
        Value::Object(options)
    }
}

/// Whether a layer has enough to open a panorama.
#[must_use]
pub fn has_view(pano: &PanoState, location: Option<Location>) -> bool {
    pano.id().is_some() || location.is_some()
}

#[cfg(feature = "csr")]
mod browser {
    use std::cell::{Cell, RefCell};
    use std::rc::{Rc, Weak};

    use js_sys::{Array, Function, Reflect};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use super::{LoadStep, MAPS_SCRIPT_ID, MapsLoader, PanoramaView, STATUS_OK, StreetViewController, maps_script_url};
    use crate::layers::{HeadingPitch, Location};

    fn get(target: &JsValue, key: &str) -> Option<JsValue> {
        Reflect::get(target, &JsValue::from_str(key))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
    }

    fn call(target: &JsValue, method: &str, args: &[JsValue]) -> Option<JsValue> {
        let function = get(target, method)?.dyn_into::<Function>().ok()?;
        let args = args.iter().collect::<Array>();
        match function.apply(target, &args) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("maps {method} threw: {err:?}");
                None
            }
        }
    }

    fn maps_namespace() -> Option<JsValue> {
        let window = web_sys::window()?;
        get(&get(&window, "google")?, "maps")
    }

    thread_local! {
        static LOADER: RefCell<MapsLoader> = RefCell::new(MapsLoader::default());
    }

    /// Run `on_ready` once the Maps API is usable, injecting its script on
    /// first use. `on_ready(false)` means the script failed to load.
    pub fn ensure_maps_api(api_key: &str, on_ready: impl FnOnce(bool) + 'static) {
        if maps_namespace().and_then(|maps| get(&maps, "StreetViewPanorama")).is_some() {
            on_ready(true);
            return;
        }
        let (step, ready) = LOADER.with_borrow_mut(|loader| loader.request(Box::new(on_ready)));
        match step {
            LoadStep::Ready => {
                if let Some(ready) = ready {
                    ready(true);
                }
            }
            LoadStep::Wait => {}
            LoadStep::Inject => {
                if !inject_script(api_key) {
                    finish(false);
                }
            }
        }
    }

    fn finish(loaded: bool) {
        let waiting = LOADER.with_borrow_mut(|loader| loader.finish(loaded));
        for on_ready in waiting {
            on_ready(loaded);
        }
    }

    fn inject_script(api_key: &str) -> bool {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        if let Some(stale) = document.get_element_by_id(MAPS_SCRIPT_ID) {
            stale.remove();
        }
        let Ok(script) = document.create_element("script") else {
            return false;
        };
        script.set_id(MAPS_SCRIPT_ID);
        let _ = script.set_attribute("async", "");
        let _ = script.set_attribute("src", &maps_script_url(api_key));

        let fired = Rc::new(Cell::new(false));
        for (event, loaded) in [("load", true), ("error", false)] {
            let (fired, element) = (Rc::clone(&fired), script.clone());
            let callback = Closure::once_into_js(move || {
                if fired.replace(true) {
                    return;
                }
                // A failed tag never fires again; the next request injects a new one.
                if !loaded {
                    element.remove();
                }
                finish(loaded);
            });
            let _ = script.add_event_listener_with_callback(event, callback.unchecked_ref());
        }

        let Some(head) = document.head() else {
            return false;
        };
        if head.append_child(&script).is_err() {
            log::error!("could not inject maps script");
            return false;
        }
        true
    }

    /// A live panorama. Dropping it detaches every listener.
    pub struct Panorama {
        instance: JsValue,
        _listeners: Vec<Closure<dyn FnMut()>>,
    }

    impl Panorama {
        /// Create a panorama in `container` showing `view`, reporting to
        /// `controller`.
        pub fn attach(
            container: &web_sys::HtmlElement,
            view: &PanoramaView,
            controller: Weak<StreetViewController>,
        ) -> Option<Self> {
            let maps = maps_namespace()?;
            let constructor = get(&maps, "StreetViewPanorama")?.dyn_into::<Function>().ok()?;
            let options = js_sys::JSON::parse(&view.options().to_string()).ok()?;
            let args = Array::of2(container, &options);
            let instance = match Reflect::construct(&constructor, &args) {
                Ok(instance) => instance,
                Err(err) => {
                    log::error!("StreetViewPanorama failed: {err:?}");
                    return None;
                }
            };

            let event = get(&maps, "event")?;
            let loaded = Rc::new(Cell::new(false));
            let mut listeners = Vec::new();
            let mut listen = |name: &str, handler: Box<dyn FnMut()>| {
                let closure = Closure::wrap(handler);
                call(&event, "addListener", &[instance.clone(), JsValue::from_str(name), closure.as_ref().clone()]);
                listeners.push(closure);
            };

            {
                let (instance, controller, loaded) = (instance.clone(), controller.clone(), Rc::clone(&loaded));
                listen(
                    "status_changed",
                    Box::new(move || {
                        let Some(controller) = controller.upgrade() else { return };
                        let status = call(&instance, "getStatus", &[]).and_then(|s| s.as_string());
                        if status.as_deref() != Some(STATUS_OK) {
                            controller.on_error();
                            return;
                        }
                        if loaded.replace(true) {
                            return;
                        }
                        if let (Some(pano), Some(location)) = (pano_id(&instance), location(&instance)) {
                            let zoom = call(&instance, "getZoom", &[]).and_then(|z| z.as_f64()).unwrap_or(1.0);
                            controller.on_load(pano, location, heading_pitch(&instance), zoom);
                        }
                    }),
                );
            }
            {
                let (instance, controller, loaded) = (instance.clone(), controller.clone(), Rc::clone(&loaded));
                listen(
                    "position_changed",
                    Box::new(move || {
                        let Some(controller) = controller.upgrade() else { return };
                        if !loaded.get() {
                            return;
                        }
                        if let (Some(pano), Some(location)) = (pano_id(&instance), location(&instance)) {
                            controller.on_location_change(pano, location);
                        }
                    }),
                );
            }
            {
                let (instance, controller) = (instance.clone(), controller.clone());
                listen(
                    "pov_changed",
                    Box::new(move || {
                        if let Some(controller) = controller.upgrade() {
                            controller.on_heading_pitch_change(heading_pitch(&instance));
                        }
                    }),
                );
            }
            {
                let instance = instance.clone();
                listen(
                    "zoom_changed",
                    Box::new(move || {
                        let Some(controller) = controller.upgrade() else { return };
                        if let Some(zoom) = call(&instance, "getZoom", &[]).and_then(|z| z.as_f64()) {
                            controller.on_zoom_change(zoom);
                        }
                    }),
                );
            }

            Some(Self { instance, _listeners: listeners })
        }
    }

    impl Drop for Panorama {
        fn drop(&mut self) {
            if let Some(event) = maps_namespace().and_then(|maps| get(&maps, "event")) {
                call(&event, "clearInstanceListeners", &[self.instance.clone()]);
            }
        }
    }

    fn pano_id(instance: &JsValue) -> Option<String> {
        call(instance, "getPano", &[])?.as_string()
    }

    fn location(instance: &JsValue) -> Option<Location> {
        let position = call(instance, "getPosition", &[])?;
        Some(Location {
            lng: call(&position, "lng", &[])?.as_f64()?,
            lat: call(&position, "lat", &[])?.as_f64()?,
            height: None,
        })
    }

    fn heading_pitch(instance: &JsValue) -> HeadingPitch {
        let pov = call(instance, "getPov", &[]);
        let read = |key: &str| pov.as_ref().and_then(|pov| get(pov, key)).and_then(|v| v.as_f64()).unwrap_or(0.0);
        HeadingPitch { heading: read("heading"), pitch: read("pitch") }
    }
}

#[cfg(feature = "csr")]
pub use browser::{Panorama, ensure_maps_api};
