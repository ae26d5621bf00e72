//! Bridging [`Atom`] cells into the Leptos reactive graph.
//!
//! DESIGN
//! ======
//! Views never read atoms directly. Each mounted view mirrors the cells it
//! renders into local signals; the atom subscription lives exactly as long as
//! the reactive owner that created it.

use leptos::prelude::*;

use crate::state::atom::{Atom, Subscription};

/// Keep `value` alive until the current reactive owner is cleaned up, then
/// drop it.
pub fn hold_until_cleanup<T: 'static>(value: T) -> StoredValue<Option<T>, LocalStorage> {
    let stored = StoredValue::new_local(Some(value));
    on_cleanup(move || drop(stored.try_update_value(Option::take)));
    stored
}

/// A read-only signal that follows `atom`.
pub fn use_atom<T: Clone + 'static>(atom: &Atom<T>) -> ReadSignal<T, LocalStorage> {
    let signal = RwSignal::new_local(atom.get());
    let subscription: Subscription = atom.subscribe(move |value| signal.set(value.clone()));
    hold_until_cleanup(subscription);
    signal.read_only()
}
