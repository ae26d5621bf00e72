//! Inspector for a selected pedestrian layer.

#[cfg(test)]
#[path = "pedestrian_layer_content_test.rs"]
mod pedestrian_layer_content_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::app::use_extension;
use crate::components::inspector_header::{InspectorHeader, LayerActions};
use crate::components::street_view::StreetViewContent;
use crate::content::{ContentActions, resolve_layer, street_view_aspect_ratio};
use crate::error::ConfigError;
use crate::host::Host;
use crate::layers::LayerModel;
use crate::state::selection::SelectionValue;
use crate::util::reactive::use_atom;
use crate::util::viewport::use_is_mobile;

/// Resolve `values` to a pedestrian layer and render it; renders nothing
/// when the layer is gone.
#[component]
pub fn PedestrianLayerContent(values: Vec<SelectionValue>) -> impl IntoView {
    let ctx = use_extension();
    let layers = use_atom(&ctx.tree.layers);
    let tree = StoredValue::new_local(ctx.tree);
    let values = StoredValue::new_local(values);

    let resolve = move || tree.with_value(|tree| values.with_value(|values| resolve_layer(values, tree)));

    // Rebuild only when the resolved layer changes, not on every tree edit;
    // rebuilding would unmount the street view and desynchronize it.
    let resolved_id = Memo::new(move |_| {
        layers.track();
        resolve().map(|layer| layer.id.clone())
    });

    move || {
        resolved_id.track();
        untrack(resolve).map(|layer| view! { <Content layer=layer/> })
    }
}

/// Header and street view for one pedestrian layer.
#[component]
pub fn Content(layer: Rc<LayerModel>) -> impl IntoView {
    let body = content_body(&layer);
    view! {
        <ErrorBoundary fallback=|errors| {
            view! {
                <div class="inspector-error" role="alert">
                    {move || {
                        errors
                            .get()
                            .into_iter()
                            .map(|(_, err)| view! { <p>{err.to_string()}</p> })
                            .collect_view()
                    }}
                </div>
            }
        }>{body}</ErrorBoundary>
    }
}

fn content_body(layer: &Rc<LayerModel>) -> Result<impl IntoView + use<>, ConfigError> {
    let ctx = use_extension();
    let api_key = ctx.env.require_street_view_api_key().inspect_err(|err| log::error!("{err}"))?;
    let Some(cells) = layer.pedestrian().cloned() else {
        log::warn!("layer {} is not a pedestrian layer", layer.id);
        return Ok(None);
    };

    let title = use_atom(&layer.title);
    let hidden = use_atom(&layer.hidden);
    let bounding_sphere = use_atom(&layer.bounding_sphere);
    let can_move = Signal::derive(move || bounding_sphere.with(Option::is_some));

    let actions = StoredValue::new_local(ContentActions::new(
        Rc::clone(layer),
        ctx.tree.clone(),
        ctx.selection.clone(),
        ctx.host.clone(),
    ));
    let on_toggle_hidden = Callback::new(move |()| actions.with_value(ContentActions::toggle_hidden));
    let on_move = Callback::new(move |()| {
        actions.with_value(|actions| {
            actions.move_to_layer();
        });
    });
    let on_remove = Callback::new(move |()| {
        actions.with_value(|actions| {
            actions.remove();
        });
    });
    let on_close = Callback::new(move |()| actions.with_value(ContentActions::close));

    // Keep the panorama from stretching too far in portrait.
    let host = StoredValue::new_local(ctx.host);
    let zoom = RwSignal::new(0.0_f64);
    let aspect_ratio = street_view_aspect(use_is_mobile().into(), zoom.read_only(), move || {
        host.with_value(Host::camera_aspect_ratio)
    });
    let on_zoom_change = Callback::new(move |settled: f64| zoom.set(settled));

    let layer_id = layer.id.clone();
    Ok(Some(view! {
        <div class="pedestrian-layer-content">
            <InspectorHeader title=title icon="pedestrian" on_close=on_close>
                <LayerActions
                    hidden=hidden
                    can_move=can_move
                    on_toggle_hidden=on_toggle_hidden
                    on_move=on_move
                    on_remove=on_remove
                />
            </InspectorHeader>
            <div
                class="pedestrian-layer-content__street-view"
                style:aspect-ratio=move || aspect_ratio.get().to_string()
            >
                <StreetViewContent
                    layer_id=layer_id
                    cells=cells
                    api_key=api_key
                    on_zoom_change=on_zoom_change
                />
            </div>
        </div>
    }))
}

/// Aspect ratio of the street-view container. Recomputed when the viewport
/// crosses the mobile breakpoint and after every settled zoom, when the
/// host's camera aspect is read again.
pub fn street_view_aspect(
    mobile: Signal<bool>,
    zoom: ReadSignal<f64>,
    camera_aspect: impl Fn() -> Option<f64> + Send + Sync + 'static,
) -> Memo<f64> {
    Memo::new(move |_| {
        zoom.track();
        street_view_aspect_ratio(mobile.get(), camera_aspect())
    })
}
