//! Helpers shared by adapters and views.

pub mod geo;
pub mod maps;
pub mod reactive;
pub mod viewport;
