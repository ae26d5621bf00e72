//! Inspector header actions for one layer.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use std::rc::Rc;

use crate::host::Host;
use crate::layers::{LayerModel, LayerTree};
use crate::state::selection::Selection;

#[derive(Clone, Debug)]
pub struct ContentActions {
    layer: Rc<LayerModel>,
    tree: LayerTree,
    selection: Selection,
    host: Host,
}

impl ContentActions {
    #[must_use]
    pub fn new(layer: Rc<LayerModel>, tree: LayerTree, selection: Selection, host: Host) -> Self {
        Self { layer, tree, selection, host }
    }

    #[must_use]
    pub fn layer(&self) -> &Rc<LayerModel> {
        &self.layer
    }

    pub fn toggle_hidden(&self) {
        self.layer.hidden.update(|hidden| *hidden = !*hidden);
    }

    /// Whether "move camera to layer" has a target.
    #[must_use]
    pub fn can_move(&self) -> bool {
        self.layer.bounding_sphere.with(Option::is_some)
    }

    /// Fly the host camera to the layer. Returns whether a request was sent.
    pub fn move_to_layer(&self) -> bool {
        let Some(sphere) = self.layer.bounding_sphere.get() else {
            return false;
        };
        let Some(camera) = self.host.camera() else {
            log::trace!("no host camera; not moving to {}", self.layer.id);
            return false;
        };
        camera.look_at(&sphere);
        true
    }

    /// Remove the layer from the tree.
    pub fn remove(&self) -> bool {
        self.tree.remove(&self.layer.id).is_some()
    }

    /// Close the inspector: clears layer and screen-space selections.
    pub fn close(&self) {
        self.selection.clear();
    }
}
