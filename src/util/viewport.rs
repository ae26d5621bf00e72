//! Viewport queries.

use leptos::prelude::*;

/// Media query matching the mobile breakpoint.
pub const MOBILE_QUERY: &str = "(max-width: 599px)";

/// A signal tracking `query` for as long as the current owner lives.
pub fn use_media_query(query: &'static str) -> ReadSignal<bool> {
    #[cfg(feature = "csr")]
    {
        let Some(list) = media_query_list(query) else {
            return RwSignal::new(false).read_only();
        };
        let signal = RwSignal::new(list.matches());
        crate::util::reactive::hold_until_cleanup(listener::MediaListener::attach(list, signal));
        signal.read_only()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = query;
        RwSignal::new(false).read_only()
    }
}

/// [`use_media_query`] on the mobile breakpoint.
pub fn use_is_mobile() -> ReadSignal<bool> {
    use_media_query(MOBILE_QUERY)
}

#[cfg(feature = "csr")]
fn media_query_list(query: &str) -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(query).ok().flatten()
}

#[cfg(feature = "csr")]
mod listener {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::MediaQueryList;

    const CHANGE: &str = "change";

    /// `change` listener on a media query list, removed on drop.
    pub(super) struct MediaListener {
        list: MediaQueryList,
        closure: Closure<dyn Fn()>,
    }

    impl MediaListener {
        pub(super) fn attach(list: MediaQueryList, signal: RwSignal<bool>) -> Self {
            let source = list.clone();
            let closure: Closure<dyn Fn()> = Closure::new(move || {
                let _ = signal.try_set(source.matches());
            });
            let _ = list.add_event_listener_with_callback(CHANGE, closure.as_ref().unchecked_ref());
            Self { list, closure }
        }
    }

    impl Drop for MediaListener {
        fn drop(&mut self) {
            let _ = self
                .list
                .remove_event_listener_with_callback(CHANGE, self.closure.as_ref().unchecked_ref());
        }
    }
}
