//! Layer entities and the scene's layer tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! A layer owns its cells. Views and adapters only ever hold handles onto
//! those cells, so a layer removed from the tree stops rendering as soon as
//! nothing resolves it any more.

pub mod pedestrian;
pub mod tree;

use serde::{Deserialize, Serialize};

use crate::fields::FieldList;
use crate::host::types::BoundingSphere;
use crate::state::atom::Atom;

pub use tree::{Identifier, LayerTree, parse_identifier};

/// Kinds of layer the extension manages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayerType {
    /// Street-level panorama pinned to a location.
    Pedestrian,
    /// Dataset layer configured through schema fields.
    Dataset,
}

impl LayerType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pedestrian => "PEDESTRIAN_LAYER",
            Self::Dataset => "DATASET_LAYER",
        }
    }
}

/// Geographic position of a panorama, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lng: f64,
    pub lat: f64,
    /// Metres above the ellipsoid, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// Panorama view direction, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadingPitch {
    pub heading: f64,
    pub pitch: f64,
}

/// What the pano cell knows about the panorama.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PanoState {
    /// Nothing loaded yet.
    #[default]
    Unset,
    /// The viewer reported it could not load this location.
    Unavailable,
    /// Panorama the viewer is showing.
    Id(String),
}

impl PanoState {
    /// The panorama id, if one is loaded.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Id(id) => Some(id),
            Self::Unset | Self::Unavailable => None,
        }
    }
}

/// Cells specific to a pedestrian layer.
#[derive(Clone, Debug, Default)]
pub struct PedestrianContent {
    pub pano: Atom<PanoState>,
    pub location: Atom<Option<Location>>,
    pub heading_pitch: Atom<Option<HeadingPitch>>,
    pub zoom: Atom<Option<f64>>,
    /// Whether the host camera follows the panorama.
    pub synchronized: Atom<bool>,
}

/// Cells specific to a dataset layer.
#[derive(Clone, Debug, Default)]
pub struct DatasetContent {
    pub dataset_id: String,
    pub fields: Atom<FieldList>,
}

#[derive(Clone, Debug)]
pub enum LayerContent {
    Pedestrian(PedestrianContent),
    Dataset(DatasetContent),
}

/// One layer in the scene.
#[derive(Debug)]
pub struct LayerModel {
    pub id: String,
    pub title: Atom<Option<String>>,
    pub hidden: Atom<bool>,
    /// Extent used for "move camera to layer"; absent until known.
    pub bounding_sphere: Atom<Option<BoundingSphere>>,
    pub content: LayerContent,
}

impl LayerModel {
    #[must_use]
    pub fn new(id: impl Into<String>, content: LayerContent) -> Self {
        Self {
            id: id.into(),
            title: Atom::new(None),
            hidden: Atom::new(false),
            bounding_sphere: Atom::new(None),
            content,
        }
    }

    #[must_use]
    pub fn layer_type(&self) -> LayerType {
        match self.content {
            LayerContent::Pedestrian(_) => LayerType::Pedestrian,
            LayerContent::Dataset(_) => LayerType::Dataset,
        }
    }

    #[must_use]
    pub fn pedestrian(&self) -> Option<&PedestrianContent> {
        match &self.content {
            LayerContent::Pedestrian(content) => Some(content),
            LayerContent::Dataset(_) => None,
        }
    }

    #[must_use]
    pub fn dataset(&self) -> Option<&DatasetContent> {
        match &self.content {
            LayerContent::Dataset(content) => Some(content),
            LayerContent::Pedestrian(_) => None,
        }
    }
}
