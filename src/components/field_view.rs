//! Read-only rendering of layer fields.

#[cfg(test)]
#[path = "field_view_test.rs"]
mod field_view_test;

use leptos::prelude::*;

use crate::fields::general::LegendStyle;
use crate::fields::{Field, FieldList, GeneralField};

/// Label/value rows summarizing one field.
#[must_use]
pub fn field_rows(body: &GeneralField) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    let mut push = |label: &'static str, value: Option<String>| {
        if let Some(value) = value {
            rows.push((label, value));
        }
    };

    match body {
        GeneralField::Opacity(field) => {
            push("Opacity", field.value.map(percent));
            push("Default", field.preset.as_ref().and_then(|p| p.default_value).map(percent));
        }
        GeneralField::LayerDescription(field) | GeneralField::LegendDescription(field) => {
            push("Description", field.value.clone());
            push("Preset", field.preset.as_ref().and_then(|p| p.description.clone()));
        }
        GeneralField::StyleCode(field) => {
            push("Opacity", field.value.as_ref().and_then(|v| v.opacity).map(percent));
            push("Code", field.preset.as_ref().and_then(|p| p.code.clone()));
        }
        GeneralField::ApplyTimeValue(field) => {
            let enabled = field.value.as_ref().and_then(|v| v.time_based_display).unwrap_or(false);
            push("Time-based display", Some(on_off(enabled)));
            push("Property", field.preset.as_ref().and_then(|p| p.property_name.clone()));
        }
        GeneralField::TimelineCustomized(field) => {
            let preset = field.preset.clone().unwrap_or_default();
            push("Start", preset.start);
            push("End", preset.end);
            push("Current", preset.current);
            push("Time zone", preset.timezone);
        }
        GeneralField::TimelineMonth | GeneralField::PrioritizePerformanceGeoJson => {
            push("Enabled", Some(on_off(true)));
        }
        GeneralField::LinkButton(field) => {
            push("Title", field.preset.title.clone());
            push("URL", field.preset.url.clone());
        }
        GeneralField::DatasetStory(field) => {
            push("Pages", Some(field.preset.pages.len().to_string()));
        }
        GeneralField::CustomLegend(field) => {
            let (title, legends) = match &field.value {
                Some(value) => (value.title.clone(), &value.legends),
                None => (field.preset.title.clone(), &field.preset.legends),
            };
            push("Title", title);
            for legend in legends {
                push(legend_style_label(legend.style), legend.title.clone());
            }
        }
    }
    rows
}

fn percent(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

fn on_off(enabled: bool) -> String {
    if enabled { "On" } else { "Off" }.to_owned()
}

fn legend_style_label(style: LegendStyle) -> &'static str {
    match style {
        LegendStyle::Square => "■",
        LegendStyle::Circle => "●",
        LegendStyle::Line => "─",
        LegendStyle::Icon => "◆",
    }
}

/// One field as a titled list of rows.
#[component]
pub fn FieldView(field: Field) -> impl IntoView {
    let rows = field_rows(&field.body);
    view! {
        <section class="field-view" data-field-type=field.kind().as_str()>
            <h3 class="field-view__title">{field.kind().label()}</h3>
            <dl class="field-view__rows">
                {rows
                    .into_iter()
                    .map(|(label, value)| view! {
                        <dt class="field-view__label">{label}</dt>
                        <dd class="field-view__value">{value}</dd>
                    })
                    .collect_view()}
            </dl>
        </section>
    }
}

/// Every field of a layer, in order.
#[component]
pub fn FieldListView(fields: ReadSignal<FieldList, LocalStorage>) -> impl IntoView {
    move || {
        fields.with(|fields| {
            fields
                .iter()
                .cloned()
                .map(|field| view! { <FieldView field=field/> })
                .collect_view()
        })
    }
}
