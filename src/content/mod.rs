//! Layer content adapters, independent of the view layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The inspector resolves the current selection to a layer, renders a header
//! of [`actions::ContentActions`], and mounts a street-view widget driven by
//! a [`controller::StreetViewController`]. Everything here is plain Rust so
//! it can be exercised without a browser; `components` wraps it in views.

pub mod actions;
pub mod controller;
pub mod frame;
pub mod widget;


use std::rc::Rc;

use crate::layers::{LayerModel, LayerTree, LayerType, parse_identifier};
use crate::state::selection::SelectionValue;

pub use actions::ContentActions;
pub use controller::StreetViewController;
pub use widget::WidgetState;

/// Resolve the pedestrian layer a selection points at.
///
/// Only the first selected value is considered. Identifiers are looked up in
/// `tree` by their decoded key; layer handles are returned as they are.
/// Returns `None` when the layer is gone.
#[must_use]
pub fn resolve_layer(values: &[SelectionValue], tree: &LayerTree) -> Option<Rc<LayerModel>> {
    resolve_layer_of(values, tree, LayerType::Pedestrian)
}

/// [`resolve_layer`] for any layer type.
#[must_use]
pub fn resolve_layer_of(values: &[SelectionValue], tree: &LayerTree, layer_type: LayerType) -> Option<Rc<LayerModel>> {
    if values.len() > 1 {
        log::debug!("{} layers selected; showing the first", values.len());
    }
    match values.first()? {
        SelectionValue::Id(raw) => tree.find(layer_type, &parse_identifier(raw).key),
        SelectionValue::Layer(layer) => Some(Rc::clone(layer)),
    }
}

/// Resolve a selection to whichever layer it names: pedestrian layers first,
/// then dataset layers.
#[must_use]
pub fn resolve_selected(values: &[SelectionValue], tree: &LayerTree) -> Option<Rc<LayerModel>> {
    resolve_layer(values, tree).or_else(|| resolve_layer_of(values, tree, LayerType::Dataset))
}

/// Width / height for the street-view container.
///
/// Portrait viewports would stretch the panorama, so the ratio never drops
/// below 2 on mobile or 1 elsewhere. A missing camera counts as square.
#[must_use]
pub fn street_view_aspect_ratio(is_mobile: bool, camera_aspect: Option<f64>) -> f64 {
    let aspect = camera_aspect.unwrap_or(1.0);
    if is_mobile { aspect.max(2.0) } else { aspect.max(1.0) }
}
