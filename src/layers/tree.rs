//! The scene's layer collection.

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;

use std::rc::Rc;

use super::{LayerModel, LayerType};
use crate::state::atom::Atom;

/// Decoded form of a persisted `type:key` layer identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifier {
    pub type_name: Option<String>,
    pub key: String,
}

/// Split a `type:key` identifier at its first colon.
///
/// An identifier without a colon is all key.
#[must_use]
pub fn parse_identifier(raw: &str) -> Identifier {
    match raw.split_once(':') {
        Some((type_name, key)) => Identifier { type_name: Some(type_name.to_owned()), key: key.to_owned() },
        None => Identifier { type_name: None, key: raw.to_owned() },
    }
}

/// Ordered, observable list of root layers.
#[derive(Clone, Debug, Default)]
pub struct LayerTree {
    pub layers: Atom<Vec<Rc<LayerModel>>>,
}

impl LayerTree {
    /// Append a layer. A layer whose id is already present is not added.
    ///
    /// Returns whether the tree changed.
    pub fn add(&self, layer: Rc<LayerModel>) -> bool {
        if self.layers.with(|layers| layers.iter().any(|l| l.id == layer.id)) {
            log::warn!("layer {} already in tree", layer.id);
            return false;
        }
        log::debug!("adding {} layer {}", layer.layer_type().as_str(), layer.id);
        self.layers.update(|layers| layers.push(layer));
        true
    }

    /// Remove a layer by id, returning it when it was present.
    pub fn remove(&self, id: &str) -> Option<Rc<LayerModel>> {
        let index = self.layers.with(|layers| layers.iter().position(|l| l.id == id))?;
        let mut removed = None;
        self.layers.update(|layers| removed = Some(layers.remove(index)));
        log::debug!("removed layer {id}");
        removed
    }

    /// Find a layer of the given type by id.
    #[must_use]
    pub fn find(&self, layer_type: LayerType, id: &str) -> Option<Rc<LayerModel>> {
        self.layers.with(|layers| {
            layers
                .iter()
                .find(|l| l.layer_type() == layer_type && l.id == id)
                .cloned()
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.with(Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
