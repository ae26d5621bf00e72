//! Street-view panel for a pedestrian layer.
//!
//! DESIGN
//! ======
//! The panorama widget loads asynchronously. Until it reports back the panel
//! shows a placeholder; it never gives up waiting. The controller created here
//! lives exactly as long as the panel, and dropping it on cleanup leaves the
//! layer desynchronized from the host camera.

use std::rc::Rc;

use leptos::prelude::*;

use crate::app::use_extension;
use crate::content::controller::{StreetViewController, ZoomSettled};
use crate::content::widget::WidgetState;
use crate::layers::PedestrianContent;
use crate::util::reactive::{hold_until_cleanup, use_atom};

/// Panorama bound to `cells`, with the "move camera here" overlay.
#[component]
pub fn StreetViewContent(
    layer_id: String,
    cells: PedestrianContent,
    api_key: String,
    on_zoom_change: Callback<f64>,
) -> impl IntoView {
    let ctx = use_extension();
    let settled: ZoomSettled = Rc::new(move |zoom: f64| on_zoom_change.run(zoom));
    let controller = Rc::new(StreetViewController::new(&cells, ctx.host.clone(), Rc::clone(&ctx.frames), settled));

    let widget = use_atom(controller.widget());
    let synchronized = use_atom(&cells.synchronized);
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    attach_panorama(container, &cells, &api_key, &controller);
    #[cfg(not(feature = "csr"))]
    let _ = &api_key;

    let controller = hold_until_cleanup(controller);
    let on_synchronize = move |_| {
        controller.try_with_value(|controller| {
            if let Some(controller) = controller {
                controller.on_synchronize();
            }
        });
    };

    view! {
        <div class="street-view" data-layer-id=layer_id>
            <div class="street-view__panorama" node_ref=container></div>
            <Show when=move || widget.get() == WidgetState::Loading>
                <div class="street-view__placeholder">"Loading street view…"</div>
            </Show>
            <Show when=move || widget.get() == WidgetState::Failed>
                <div class="street-view__placeholder">"No street view is available here."</div>
            </Show>
            <div class="street-view__overlay">
                <Show when=move || !synchronized.get()>
                    <button class="street-view__sync" on:click=on_synchronize>
                        "Move camera here"
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[cfg(feature = "csr")]
fn attach_panorama(
    container: NodeRef<leptos::html::Div>,
    cells: &PedestrianContent,
    api_key: &str,
    controller: &Rc<StreetViewController>,
) {
    use crate::util::maps::{Panorama, PanoramaView, ensure_maps_api};

    let panorama = hold_until_cleanup(None::<Panorama>);
    let cells = StoredValue::new_local(cells.clone());
    let controller = StoredValue::new_local(Rc::downgrade(controller));
    let api_key = api_key.to_owned();

    Effect::new(move |_| {
        let Some(element) = container.get() else {
            return;
        };
        ensure_maps_api(&api_key, move |loaded| {
            let Some(controller) = controller.try_get_value() else {
                return;
            };
            if !loaded {
                log::error!("maps script failed to load");
                if let Some(controller) = controller.upgrade() {
                    controller.on_error();
                }
                return;
            }
            let Some(view) = cells.try_with_value(PanoramaView::from_cells) else {
                return;
            };
            let attached = Panorama::attach(&element, &view, controller);
            // A panel unmounted while the script loaded drops this at once.
            panorama.try_update_value(|slot| *slot = Some(attached));
        });
    });
}
