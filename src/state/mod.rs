//! Shared reactive state.
//!
//! DESIGN
//! ======
//! Stores are plain structs of [`atom::Atom`] cells. The root view provides
//! them through Leptos context; components read them with `expect_context`
//! and mirror the cells they render into signals.

pub mod atom;
pub mod environment;
pub mod selection;
