//! Schema-tagged editable layer fields.
//!
//! DESIGN
//! ======
//! A field is a closed sum type keyed by its `type` tag. The tag fixes the
//! shape of both `value` and `preset`, so one instance can never mix shapes
//! from two kinds. Instances are snapshots: edits replace the whole field
//! (see [`FieldList::replace`]) rather than mutating it in place.
//!
//! Consumers dispatch with an exhaustive `match`; adding a kind means adding a
//! variant here, a tag to [`FieldKind`], and an arm in every consumer, which
//! the compiler enforces.

pub mod evaluate;
pub mod general;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use general::{
    ApplyTimeValueField, CustomLegendField, DatasetStoryField, DescriptionField, LegendStyle, LinkButtonField,
    OpacityField, StyleCodeField, TimelineCustomizedField,
};

/// Tag identifying the kind of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Opacity,
    LayerDescription,
    LegendDescription,
    StyleCode,
    ApplyTimeValue,
    TimelineCustomized,
    TimelineMonth,
    PrioritizePerformanceGeoJson,
    LinkButton,
    DatasetStory,
    CustomLegend,
}

impl FieldKind {
    pub const ALL: [Self; 11] = [
        Self::Opacity,
        Self::LayerDescription,
        Self::LegendDescription,
        Self::StyleCode,
        Self::ApplyTimeValue,
        Self::TimelineCustomized,
        Self::TimelineMonth,
        Self::PrioritizePerformanceGeoJson,
        Self::LinkButton,
        Self::DatasetStory,
        Self::CustomLegend,
    ];

    /// Wire tag, as stored in the `type` property.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Opacity => "OPACITY_FIELD",
            Self::LayerDescription => "LAYER_DESCRIPTION_FIELD",
            Self::LegendDescription => "LEGEND_DESCRIPTION_FIELD",
            Self::StyleCode => "STYLE_CODE_FIELD",
            Self::ApplyTimeValue => "APPLY_TIME_VALUE_FIELD",
            Self::TimelineCustomized => "TIMELINE_CUSTOMIZED_FIELD",
            Self::TimelineMonth => "TIMELINE_MONTH_FIELD",
            Self::PrioritizePerformanceGeoJson => "PRIORITIZE_PERFORMANCE_GEOJSON_FIELD",
            Self::LinkButton => "LINK_BUTTON_FIELD",
            Self::DatasetStory => "DATASET_STORY_FIELD",
            Self::CustomLegend => "CUSTOM_LEGEND_FIELD",
        }
    }

    /// Human-readable name for editor lists.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Opacity => "Opacity",
            Self::LayerDescription => "Layer description",
            Self::LegendDescription => "Legend description",
            Self::StyleCode => "Style code",
            Self::ApplyTimeValue => "Apply time value",
            Self::TimelineCustomized => "Custom timeline",
            Self::TimelineMonth => "Monthly timeline",
            Self::PrioritizePerformanceGeoJson => "Prioritize performance",
            Self::LinkButton => "Link button",
            Self::DatasetStory => "Story",
            Self::CustomLegend => "Custom legend",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| FieldError::UnknownType(s.to_owned()))
    }
}

/// Per-kind payload of a field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeneralField {
    #[serde(rename = "OPACITY_FIELD")]
    Opacity(OpacityField),
    #[serde(rename = "LAYER_DESCRIPTION_FIELD")]
    LayerDescription(DescriptionField),
    #[serde(rename = "LEGEND_DESCRIPTION_FIELD")]
    LegendDescription(DescriptionField),
    #[serde(rename = "STYLE_CODE_FIELD")]
    StyleCode(StyleCodeField),
    #[serde(rename = "APPLY_TIME_VALUE_FIELD")]
    ApplyTimeValue(ApplyTimeValueField),
    #[serde(rename = "TIMELINE_CUSTOMIZED_FIELD")]
    TimelineCustomized(TimelineCustomizedField),
    #[serde(rename = "TIMELINE_MONTH_FIELD")]
    TimelineMonth,
    #[serde(rename = "PRIORITIZE_PERFORMANCE_GEOJSON_FIELD")]
    PrioritizePerformanceGeoJson,
    #[serde(rename = "LINK_BUTTON_FIELD")]
    LinkButton(LinkButtonField),
    #[serde(rename = "DATASET_STORY_FIELD")]
    DatasetStory(DatasetStoryField),
    #[serde(rename = "CUSTOM_LEGEND_FIELD")]
    CustomLegend(CustomLegendField),
}

impl GeneralField {
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Opacity(_) => FieldKind::Opacity,
            Self::LayerDescription(_) => FieldKind::LayerDescription,
            Self::LegendDescription(_) => FieldKind::LegendDescription,
            Self::StyleCode(_) => FieldKind::StyleCode,
            Self::ApplyTimeValue(_) => FieldKind::ApplyTimeValue,
            Self::TimelineCustomized(_) => FieldKind::TimelineCustomized,
            Self::TimelineMonth => FieldKind::TimelineMonth,
            Self::PrioritizePerformanceGeoJson => FieldKind::PrioritizePerformanceGeoJson,
            Self::LinkButton(_) => FieldKind::LinkButton,
            Self::DatasetStory(_) => FieldKind::DatasetStory,
            Self::CustomLegend(_) => FieldKind::CustomLegend,
        }
    }
}

/// One field instance attached to a layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(flatten)]
    pub body: GeneralField,
}

impl Field {
    #[must_use]
    pub fn new(id: impl Into<String>, body: GeneralField) -> Self {
        Self { id: id.into(), group: None, body }
    }

    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.body.kind()
    }

    /// Decode a field, rejecting tags outside the closed set.
    ///
    /// # Errors
    ///
    /// [`FieldError::UnknownType`] when the `type` tag is missing or unknown,
    /// [`FieldError::Malformed`] when the body does not fit its kind.
    pub fn from_value(value: serde_json::Value) -> Result<Self, FieldError> {
        let tag = value.get("type").and_then(serde_json::Value::as_str).unwrap_or_default();
        let kind = tag.parse::<FieldKind>()?;
        serde_json::from_value(value).map_err(|err| FieldError::Malformed(format!("{kind}: {err}")))
    }

    /// Check the payload against the constraints of its kind.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Invalid`] describing the first violation found.
    pub fn validate(&self) -> Result<(), FieldError> {
        let invalid = |reason: String| FieldError::Invalid { id: self.id.clone(), kind: self.kind().as_str(), reason };

        match &self.body {
            GeneralField::Opacity(field) => {
                let default = field.preset.as_ref().and_then(|p| p.default_value);
                for v in [field.value, default].into_iter().flatten() {
                    if !is_unit_interval(v) {
                        return Err(invalid(format!("opacity {v} outside [0, 1]")));
                    }
                }
            }
            GeneralField::StyleCode(field) => {
                if let Some(v) = field.value.as_ref().and_then(|v| v.opacity) {
                    if !is_unit_interval(v) {
                        return Err(invalid(format!("opacity {v} outside [0, 1]")));
                    }
                }
            }
            GeneralField::TimelineCustomized(field) => {
                if let Some(preset) = &field.preset {
                    for raw in [&preset.start, &preset.end, &preset.current].into_iter().flatten() {
                        if evaluate::parse_timestamp(raw).is_none() {
                            return Err(invalid(format!("unparseable timestamp {raw:?}")));
                        }
                    }
                }
            }
            GeneralField::LinkButton(field) => {
                if let Some(url) = &field.preset.url {
                    if !is_http_url(url) {
                        return Err(invalid(format!("url {url:?} is not http(s)")));
                    }
                }
            }
            GeneralField::DatasetStory(field) => {
                let mut seen = std::collections::HashSet::new();
                for page in &field.preset.pages {
                    if page.id.is_empty() {
                        return Err(invalid("story page without id".to_owned()));
                    }
                    if !seen.insert(page.id.as_str()) {
                        return Err(invalid(format!("duplicate story page {}", page.id)));
                    }
                }
            }
            GeneralField::CustomLegend(field) => {
                let value_legends = field.value.iter().flat_map(|v| v.legends.iter());
                for legend in field.preset.legends.iter().chain(value_legends) {
                    if legend.style == LegendStyle::Icon && legend.url.is_none() {
                        return Err(invalid("icon legend without url".to_owned()));
                    }
                }
            }
            GeneralField::LayerDescription(_)
            | GeneralField::LegendDescription(_)
            | GeneralField::ApplyTimeValue(_)
            | GeneralField::TimelineMonth
            | GeneralField::PrioritizePerformanceGeoJson => {}
        }
        Ok(())
    }
}

fn is_unit_interval(v: f64) -> bool {
    (0.0..=1.0).contains(&v)
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Ordered fields of one layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldList {
    fields: Vec<Field>,
}

impl FieldList {
    #[must_use]
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Decode a JSON array of fields.
    ///
    /// # Errors
    ///
    /// Fails on the first element that [`Field::from_value`] rejects, or
    /// with [`FieldError::Malformed`] when `raw` is not a JSON array.
    pub fn from_json(raw: &str) -> Result<Self, FieldError> {
        let values: Vec<serde_json::Value> =
            serde_json::from_str(raw).map_err(|err| FieldError::Malformed(err.to_string()))?;
        let fields = values.into_iter().map(Field::from_value).collect::<Result<Vec<_>, _>>()?;
        Ok(Self { fields })
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Swap in a new snapshot of an existing field.
    ///
    /// # Errors
    ///
    /// [`FieldError::NotFound`] when no field has `field.id`;
    /// [`FieldError::KindMismatch`] when the replacement changes the kind.
    pub fn replace(&mut self, field: Field) -> Result<(), FieldError> {
        let Some(slot) = self.fields.iter_mut().find(|f| f.id == field.id) else {
            return Err(FieldError::NotFound(field.id));
        };
        if slot.kind() != field.kind() {
            let actual = field.kind().as_str();
            return Err(FieldError::KindMismatch {
                id: field.id,
                expected: slot.kind().as_str(),
                actual,
            });
        }
        *slot = field;
        Ok(())
    }

    /// Remove a field by id, returning it.
    pub fn remove(&mut self, id: &str) -> Option<Field> {
        let index = self.fields.iter().position(|f| f.id == id)?;
        Some(self.fields.remove(index))
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
