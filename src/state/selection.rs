//! What the user currently has selected.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::fmt;
use std::rc::Rc;

use crate::layers::LayerModel;
use crate::state::atom::Atom;

/// One entry in a selection.
///
/// Persisted selections carry `type:key` identifiers; selections made in the
/// current session can carry the layer itself.
#[derive(Clone)]
pub enum SelectionValue {
    Id(String),
    Layer(Rc<LayerModel>),
}

impl fmt::Debug for SelectionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => f.debug_tuple("Id").field(id).finish(),
            Self::Layer(layer) => f.debug_tuple("Layer").field(&layer.id).finish(),
        }
    }
}

impl From<&str> for SelectionValue {
    fn from(id: &str) -> Self {
        Self::Id(id.to_owned())
    }
}

impl From<Rc<LayerModel>> for SelectionValue {
    fn from(layer: Rc<LayerModel>) -> Self {
        Self::Layer(layer)
    }
}

/// Layer selection and screen-space selection, cleared together when an
/// inspector closes.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    pub layer_selection: Atom<Vec<SelectionValue>>,
    pub screen_space_selection: Atom<Vec<SelectionValue>>,
}

impl Selection {
    pub fn select_layer(&self, value: impl Into<SelectionValue>) {
        self.layer_selection.set(vec![value.into()]);
    }

    pub fn clear(&self) {
        self.layer_selection.set(Vec::new());
        self.screen_space_selection.set(Vec::new());
    }
}
