//! Inspector for whatever is currently selected.

use leptos::prelude::*;

use crate::app::use_extension;
use crate::components::dataset_layer_content::DatasetLayerContent;
use crate::components::pedestrian_layer_content::PedestrianLayerContent;
use crate::content::resolve_selected;
use crate::layers::LayerType;
use crate::util::reactive::use_atom;

/// Renders the inspector matching the selected layer's type, or nothing.
///
/// Layer selections win over screen-space selections.
#[component]
pub fn SelectionPanel() -> impl IntoView {
    let ctx = use_extension();
    let layer_selection = use_atom(&ctx.selection.layer_selection);
    let screen_space_selection = use_atom(&ctx.selection.screen_space_selection);
    let layers = use_atom(&ctx.tree.layers);
    let tree = StoredValue::new_local(ctx.tree);

    let values = move || {
        let values = layer_selection.get();
        if values.is_empty() { screen_space_selection.get() } else { values }
    };
    let selected = Memo::new(move |_| {
        layers.track();
        let values = values();
        tree.with_value(|tree| resolve_selected(&values, tree)).map(|layer| (layer.layer_type(), layer.id.clone()))
    });

    move || {
        let (layer_type, _) = selected.get()?;
        let values = untrack(values);
        Some(match layer_type {
            LayerType::Pedestrian => view! { <PedestrianLayerContent values=values/> }.into_any(),
            LayerType::Dataset => {
                let layer = tree.with_value(|tree| resolve_selected(&values, tree))?;
                view! { <DatasetLayerContent layer=layer/> }.into_any()
            }
        })
    }
}
