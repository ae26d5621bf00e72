//! Value and preset shapes of the general-purpose layer fields.
//!
//! `value` is what the viewer's user set; `preset` is the author-time
//! configuration written in the editor. Both are optional unless the field
//! kind cannot mean anything without its preset.

use serde::{Deserialize, Serialize};

use crate::host::types::CameraPosition;

/// Layer opacity in `[0, 1]`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OpacityField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<OpacityPreset>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpacityPreset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<f64>,
}

/// Free-text description, used for both the layer and its legend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptionField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<DescriptionPreset>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptionPreset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Raw style code supplied by the author.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleCodeField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<StyleCodeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<StyleCodePreset>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleCodeValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleCodePreset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Whether features are shown according to a time-valued property.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplyTimeValueField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ApplyTimeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<ApplyTimeValuePreset>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyTimeValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_based_display: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyTimeValuePreset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
}

/// Author-defined timeline range for the layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineCustomizedField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<TimelineCustomizedPreset>,
}

/// RFC 3339 timestamps as typed by the author.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineCustomizedPreset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Button linking out to an external page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkButtonField {
    pub preset: LinkButtonPreset,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkButtonPreset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Guided story through camera positions of a dataset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetStoryField {
    pub preset: DatasetStoryPreset,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetStoryPreset {
    #[serde(default)]
    pub pages: Vec<StoryPage>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryPage {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<CameraPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Hand-authored legend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomLegendField {
    pub preset: CustomLegendPreset,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<CustomLegendSchemeValue>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomLegendPreset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub legends: Vec<CustomLegend>,
}

/// Legend as currently shown, after user edits.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomLegendSchemeValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub legends: Vec<CustomLegend>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomLegend {
    #[serde(rename = "type", default)]
    pub style: LegendStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    /// Image source, required for [`LegendStyle::Icon`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendStyle {
    #[default]
    Square,
    Circle,
    Line,
    Icon,
}
