//! # view-extension
//!
//! Leptos + WASM inspector extension for a 3D geospatial viewer.
//!
//! The crate renders layer inspectors (a street-view panel for pedestrian
//! layers, field summaries and timeline controls for dataset layers) over
//! reactive layer state, and forwards user actions to the host viewer's
//! camera and clock. The host's global API is reached only through the
//! capability traits in [`host`], so every adapter runs natively in tests;
//! browser bindings sit behind the `csr` feature.

pub mod app;
pub mod components;
pub mod content;
pub mod error;
pub mod fields;
pub mod host;
pub mod layers;
pub mod state;
pub mod timeline;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

/// Entry point for the host page: parse `config_json`, bind to the host's
/// global API, and mount the extension into `<body>`.
///
/// # Errors
///
/// Returns the configuration error message when `config_json` does not
/// parse.
#[cfg(feature = "csr")]
#[wasm_bindgen]
pub fn mount_extension(config_json: &str) -> Result<(), JsValue> {
    use leptos::prelude::*;

    use crate::app::{ExtensionContext, ExtensionRoot};

    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("logger already initialized");
    }

    let context = ExtensionContext::from_config(config_json, host::browser::browser_host()).map_err(|err| {
        log::error!("{err}");
        JsValue::from_str(&err.to_string())
    })?;
    log::info!("mounting view extension");
    leptos::mount::mount_to_body(move || view! { <ExtensionRoot context=context/> });
    Ok(())
}
