//! Inspector header: icon, title, layer actions, and a close button.

use leptos::prelude::*;

/// Header row shared by layer inspectors.
#[component]
pub fn InspectorHeader(
    title: ReadSignal<Option<String>, LocalStorage>,
    #[prop(into)] icon: String,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="inspector-header">
            <span class=format!("inspector-header__icon inspector-header__icon--{icon}")></span>
            <span class="inspector-header__title">
                {move || title.get().unwrap_or_default()}
            </span>
            <div class="inspector-header__actions">{children()}</div>
            <button
                class="inspector-header__close"
                aria-label="Close"
                on:click=move |_| on_close.run(())
            >
                "×"
            </button>
        </div>
    }
}

/// Layer actions shown in the header: visibility, move, remove.
#[component]
pub fn LayerActions(
    hidden: ReadSignal<bool, LocalStorage>,
    #[prop(into)] can_move: Signal<bool>,
    on_toggle_hidden: Callback<()>,
    on_move: Callback<()>,
    on_remove: Callback<()>,
) -> impl IntoView {
    let visibility_label = move || if hidden.get() { "Show" } else { "Hide" };

    view! {
        <button
            class="inspector-header__action"
            class:inspector-header__action--off=move || hidden.get()
            title=visibility_label
            aria-label=visibility_label
            on:click=move |_| on_toggle_hidden.run(())
        >
            {move || if hidden.get() { "◌" } else { "●" }}
        </button>
        <button
            class="inspector-header__action"
            title="Move"
            aria-label="Move"
            disabled=move || !can_move.get()
            on:click=move |_| on_move.run(())
        >
            "⌖"
        </button>
        <button
            class="inspector-header__action"
            title="Remove"
            aria-label="Remove"
            on:click=move |_| on_remove.run(())
        >
            "🗑"
        </button>
    }
}
