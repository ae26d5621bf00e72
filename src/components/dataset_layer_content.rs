//! Inspector for a selected dataset layer.

use std::rc::Rc;

use leptos::prelude::*;

use crate::app::use_extension;
use crate::components::field_view::FieldListView;
use crate::components::inspector_header::{InspectorHeader, LayerActions};
use crate::components::timeline_controls::TimelineControls;
use crate::content::ContentActions;
use crate::fields::evaluate::evaluate;
use crate::layers::LayerModel;
use crate::util::reactive::use_atom;

/// Header, field summary, and timeline controls for one dataset layer.
#[component]
pub fn DatasetLayerContent(layer: Rc<LayerModel>) -> impl IntoView {
    let ctx = use_extension();
    let Some(dataset) = layer.dataset().cloned() else {
        log::warn!("layer {} is not a dataset layer", layer.id);
        return None;
    };

    let title = use_atom(&layer.title);
    let hidden = use_atom(&layer.hidden);
    let bounding_sphere = use_atom(&layer.bounding_sphere);
    let fields = use_atom(&dataset.fields);
    let can_move = Signal::derive(move || bounding_sphere.with(Option::is_some));

    let actions = StoredValue::new_local(ContentActions::new(
        Rc::clone(&layer),
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

    let appearance = Memo::new(move |_| fields.with(|fields| evaluate(fields)));
    let opacity = move || format!("{:.0}%", appearance.with(|a| a.opacity) * 100.0);
    let description = move || appearance.with(|a| a.layer_description.clone());
    let timeline = move || {
        appearance
            .with(|a| a.timeline.clone())
            .map(|range| view! { <TimelineControls range=range/> })
    };

    Some(view! {
        <div class="dataset-layer-content" data-dataset-id=dataset.dataset_id>
            <InspectorHeader title=title icon="dataset" on_close=on_close>
                <LayerActions
                    hidden=hidden
                    can_move=can_move
                    on_toggle_hidden=on_toggle_hidden
                    on_move=on_move
                    on_remove=on_remove
                />
            </InspectorHeader>
            <p class="dataset-layer-content__description">{description}</p>
            <div class="dataset-layer-content__opacity">"Opacity " {opacity}</div>
            {timeline}
            <FieldListView fields=fields/>
        </div>
    })
}
