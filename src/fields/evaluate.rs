//! Folding a layer's fields into the appearance the viewer applies.

#[cfg(test)]
#[path = "evaluate_test.rs"]
mod evaluate_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::general::{CustomLegendSchemeValue, LinkButtonPreset, StoryPage};
use super::{Field, GeneralField};
use crate::timeline::{PlayRequest, Timeline};

/// Everything the layer's fields say about how it should be displayed.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerAppearance {
    pub opacity: f64,
    pub layer_description: Option<String>,
    pub legend_description: Option<String>,
    pub style_code: Option<String>,
    pub time_based_display: bool,
    pub time_property: Option<String>,
    pub timeline: Option<TimelineRange>,
    pub month_timeline: bool,
    pub prioritize_performance: bool,
    pub link_buttons: Vec<LinkButtonPreset>,
    pub story_pages: Vec<StoryPage>,
    pub custom_legend: Option<CustomLegendSchemeValue>,
}

impl Default for LayerAppearance {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            layer_description: None,
            legend_description: None,
            style_code: None,
            time_based_display: false,
            time_property: None,
            timeline: None,
            month_timeline: false,
            prioritize_performance: false,
            link_buttons: Vec::new(),
            story_pages: Vec::new(),
            custom_legend: None,
        }
    }
}

/// Timeline bounds an author pinned to a layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineRange {
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
    pub current: OffsetDateTime,
    pub timezone: Option<String>,
}

impl TimelineRange {
    /// Move the host clock onto this range without starting playback.
    pub fn apply(&self, timeline: &Timeline) {
        timeline.jump(self.start, self.end, self.current);
    }

    /// Play this range at `speed` (negative plays backwards).
    #[must_use]
    pub fn play_request(&self, speed: f64) -> PlayRequest {
        PlayRequest { start: self.start, stop: self.end, current: self.current, speed }
    }
}

pub(crate) fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(raw.trim(), &Rfc3339).ok()
}

/// Fold `fields` into a [`LayerAppearance`].
///
/// Opacity resolves as: opacity value, then opacity preset default, then
/// style-code opacity, then fully opaque. Descriptions prefer the user value
/// over the preset. When a kind appears more than once the last one wins,
/// except link buttons and story pages, which accumulate.
pub fn evaluate<'a>(fields: impl IntoIterator<Item = &'a Field>) -> LayerAppearance {
    let mut out = LayerAppearance::default();
    let mut opacity_field = None;
    let mut style_opacity = None;

    for field in fields {
        match &field.body {
            GeneralField::Opacity(f) => {
                opacity_field = f.value.or_else(|| f.preset.as_ref().and_then(|p| p.default_value));
            }
            GeneralField::LayerDescription(f) => {
                out.layer_description =
                    f.value.clone().or_else(|| f.preset.as_ref().and_then(|p| p.description.clone()));
            }
            GeneralField::LegendDescription(f) => {
                out.legend_description =
                    f.value.clone().or_else(|| f.preset.as_ref().and_then(|p| p.description.clone()));
            }
            GeneralField::StyleCode(f) => {
                style_opacity = f.value.as_ref().and_then(|v| v.opacity);
                out.style_code = f.preset.as_ref().and_then(|p| p.code.clone());
            }
            GeneralField::ApplyTimeValue(f) => {
                out.time_based_display = f.value.as_ref().and_then(|v| v.time_based_display).unwrap_or(false);
                out.time_property = f.preset.as_ref().and_then(|p| p.property_name.clone());
            }
            GeneralField::TimelineCustomized(f) => {
                out.timeline = f.preset.as_ref().and_then(|p| {
                    let start = parse_timestamp(p.start.as_deref()?)?;
                    let end = parse_timestamp(p.end.as_deref()?)?;
                    let current = p.current.as_deref().and_then(parse_timestamp).unwrap_or(start);
                    if end < start {
                        log::warn!("field {}: timeline end precedes start, ignoring", field.id);
                        return None;
                    }
                    Some(TimelineRange { start, end, current: current.clamp(start, end), timezone: p.timezone.clone() })
                });
            }
            GeneralField::TimelineMonth => out.month_timeline = true,
            GeneralField::PrioritizePerformanceGeoJson => out.prioritize_performance = true,
            GeneralField::LinkButton(f) => out.link_buttons.push(f.preset.clone()),
            GeneralField::DatasetStory(f) => out.story_pages.extend(f.preset.pages.iter().cloned()),
            GeneralField::CustomLegend(f) => {
                out.custom_legend = Some(f.value.clone().unwrap_or_else(|| CustomLegendSchemeValue {
                    title: f.preset.title.clone(),
                    legends: f.preset.legends.clone(),
                }));
            }
        }
    }

    out.opacity = opacity_field.or(style_opacity).unwrap_or(1.0).clamp(0.0, 1.0);
    out
}
