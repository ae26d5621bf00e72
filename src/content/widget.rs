//! Load state of the embedded street-view widget.
//!
//! The view shows a placeholder while `Loading` and swaps in the panorama on
//! `Ready`. There is no timeout: a widget that never reports back stays
//! `Loading`.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

/// Where the widget is in its load sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidgetState {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Events the widget reports that move its load state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetEvent {
    Loaded,
    LocationChanged,
    Failed,
}

impl WidgetState {
    #[must_use]
    pub fn next(self, event: WidgetEvent) -> Self {
        match (self, event) {
            (_, WidgetEvent::Failed) => Self::Failed,
            (_, WidgetEvent::Loaded) | (Self::Ready | Self::Failed, WidgetEvent::LocationChanged) => Self::Ready,
            (Self::Loading, WidgetEvent::LocationChanged) => Self::Loading,
        }
    }

    #[must_use]
    pub fn is_ready(self) -> bool {
        self == Self::Ready
    }
}
