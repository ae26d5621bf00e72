//! Root view and shared context.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::selection_panel::SelectionPanel;
use crate::content::frame::{FrameScheduler, default_scheduler};
use crate::error::ConfigError;
use crate::host::Host;
use crate::layers::LayerTree;
use crate::state::environment::{EnvironmentConfig, EnvironmentVariables};
use crate::state::selection::Selection;

/// Everything a view can reach through context.
#[derive(Clone)]
pub struct ExtensionContext {
    pub env: EnvironmentVariables,
    pub tree: LayerTree,
    pub selection: Selection,
    pub host: Host,
    pub frames: Rc<dyn FrameScheduler>,
}

impl ExtensionContext {
    #[must_use]
    pub fn new(env: EnvironmentVariables, host: Host) -> Self {
        Self {
            env,
            tree: LayerTree::default(),
            selection: Selection::default(),
            host,
            frames: default_scheduler(),
        }
    }

    /// Context for a host page's JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the document does not parse.
    pub fn from_config(config_json: &str, host: Host) -> Result<Self, ConfigError> {
        let env = EnvironmentVariables::default();
        env.apply(EnvironmentConfig::from_json(config_json)?);
        Ok(Self::new(env, host))
    }
}

/// Context handle. The stores are single-threaded, so they live in local
/// storage behind a `Copy` handle.
pub type ExtensionHandle = StoredValue<ExtensionContext, LocalStorage>;

/// The extension context provided by [`ExtensionRoot`].
pub fn use_extension() -> ExtensionContext {
    expect_context::<ExtensionHandle>().get_value()
}

/// Root component. Provides the shared stores and renders the inspector for
/// the current selection.
#[component]
pub fn ExtensionRoot(context: ExtensionContext) -> impl IntoView {
    provide_context::<ExtensionHandle>(StoredValue::new_local(context));

    view! {
        <div class="view-extension">
            <SelectionPanel/>
        </div>
    }
}
