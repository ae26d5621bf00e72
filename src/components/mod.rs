//! Leptos views over the layer and field models.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared stores through [`crate::app::use_extension`],
//! mirror the cells they render into local signals, and forward user actions
//! to the adapters in [`crate::content`] and [`crate::timeline`].

pub mod dataset_layer_content;
pub mod field_view;
pub mod inspector_header;
pub mod pedestrian_layer_content;
pub mod selection_panel;
pub mod street_view;
pub mod timeline_controls;
