use serde_json::json;

use super::general::*;
use super::*;

// =============================================================
// FieldKind
// =============================================================

#[test]
fn kind_tags_round_trip_through_from_str() {
    for kind in FieldKind::ALL {
        assert_eq!(kind.as_str().parse::<FieldKind>().unwrap(), kind);
    }
}

#[test]
fn unknown_kind_tag_is_rejected() {
    assert_eq!("HEIGHT_FIELD".parse::<FieldKind>(), Err(FieldError::UnknownType("HEIGHT_FIELD".to_owned())));
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn decodes_opacity_field_with_preset() {
    let field = Field::from_value(json!({
        "id": "f1",
        "type": "OPACITY_FIELD",
        "value": 0.4,
        "preset": {"defaultValue": 0.8}
    }))
    .unwrap();

    assert_eq!(field.kind(), FieldKind::Opacity);
    assert_eq!(
        field.body,
        GeneralField::Opacity(OpacityField { value: Some(0.4), preset: Some(OpacityPreset { default_value: Some(0.8) }) })
    );
}

#[test]
fn decodes_tag_only_fields() {
    let field = Field::from_value(json!({"id": "m", "group": "g1", "type": "TIMELINE_MONTH_FIELD"})).unwrap();
    assert_eq!(field.body, GeneralField::TimelineMonth);
    assert_eq!(field.group.as_deref(), Some("g1"));
}

#[test]
fn decodes_custom_legend() {
    let field = Field::from_value(json!({
        "id": "legend",
        "type": "CUSTOM_LEGEND_FIELD",
        "preset": {
            "title": "Flood depth",
            "legends": [
                {"type": "square", "title": "0.5m", "color": "#f00"},
                {"type": "icon", "title": "Shelter", "url": "https://example.test/i.png"}
            ]
        }
    }))
    .unwrap();

    let GeneralField::CustomLegend(legend) = field.body else {
        panic!("expected custom legend");
    };
    assert_eq!(legend.preset.legends.len(), 2);
    assert_eq!(legend.preset.legends[1].style, LegendStyle::Icon);
    assert!(legend.value.is_none());
}

#[test]
fn unknown_type_is_rejected_not_coerced() {
    let err = Field::from_value(json!({"id": "x", "type": "SOMETHING_NEW", "value": 1})).unwrap_err();
    assert_eq!(err, FieldError::UnknownType("SOMETHING_NEW".to_owned()));
}

#[test]
fn missing_type_is_rejected() {
    let err = Field::from_value(json!({"id": "x"})).unwrap_err();
    assert_eq!(err, FieldError::UnknownType(String::new()));
}

#[test]
fn shape_of_another_kind_is_malformed() {
    // A link button must carry its preset.
    let err = Field::from_value(json!({"id": "x", "type": "LINK_BUTTON_FIELD", "value": 0.5})).unwrap_err();
    assert!(matches!(err, FieldError::Malformed(msg) if msg.starts_with("LINK_BUTTON_FIELD")));
}

#[test]
fn serializes_with_inline_type_tag() {
    let field = Field::new("d", GeneralField::LayerDescription(DescriptionField {
        value: Some("hello".to_owned()),
        preset: None,
    }));
    assert_eq!(
        serde_json::to_value(&field).unwrap(),
        json!({"id": "d", "type": "LAYER_DESCRIPTION_FIELD", "value": "hello"})
    );
}

#[test]
fn field_list_from_json_stops_at_unknown_tag() {
    let err = FieldList::from_json(r#"[{"id":"a","type":"OPACITY_FIELD"},{"id":"b","type":"NOPE"}]"#).unwrap_err();
    assert_eq!(err, FieldError::UnknownType("NOPE".to_owned()));

    let list = FieldList::from_json(r#"[{"id":"a","type":"OPACITY_FIELD"}]"#).unwrap();
    assert_eq!(list.len(), 1);
}

// =============================================================
// Replace-on-edit
// =============================================================

fn opacity(id: &str, value: f64) -> Field {
    Field::new(id, GeneralField::Opacity(OpacityField { value: Some(value), preset: None }))
}

#[test]
fn replace_swaps_whole_snapshot() {
    let mut list = FieldList::new(vec![opacity("a", 0.1), opacity("b", 0.2)]);
    list.replace(opacity("b", 0.9)).unwrap();
    assert_eq!(list.get("b"), Some(&opacity("b", 0.9)));
    assert_eq!(list.get("a"), Some(&opacity("a", 0.1)));
}

#[test]
fn replace_rejects_kind_change() {
    let mut list = FieldList::new(vec![opacity("a", 0.1)]);
    let err = list.replace(Field::new("a", GeneralField::TimelineMonth)).unwrap_err();
    assert_eq!(
        err,
        FieldError::KindMismatch { id: "a".to_owned(), expected: "OPACITY_FIELD", actual: "TIMELINE_MONTH_FIELD" }
    );
    assert_eq!(list.get("a"), Some(&opacity("a", 0.1)));
}

#[test]
fn replace_missing_id_is_not_found() {
    let mut list = FieldList::default();
    assert_eq!(list.replace(opacity("zz", 0.5)), Err(FieldError::NotFound("zz".to_owned())));
}

#[test]
fn remove_returns_field() {
    let mut list = FieldList::new(vec![opacity("a", 0.1)]);
    assert_eq!(list.remove("a"), Some(opacity("a", 0.1)));
    assert!(list.is_empty());
    assert_eq!(list.remove("a"), None);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn opacity_outside_unit_interval_is_invalid() {
    assert!(opacity("a", 0.5).validate().is_ok());
    let err = opacity("a", 1.5).validate().unwrap_err();
    assert!(matches!(err, FieldError::Invalid { kind: "OPACITY_FIELD", .. }));

    let bad_default = Field::new("p", GeneralField::Opacity(OpacityField {
        value: None,
        preset: Some(OpacityPreset { default_value: Some(-0.1) }),
    }));
    assert!(bad_default.validate().is_err());
}

#[test]
fn link_button_requires_http_url() {
    let field = |url: &str| {
        Field::new("l", GeneralField::LinkButton(LinkButtonField {
            preset: LinkButtonPreset { title: None, color: None, url: Some(url.to_owned()) },
        }))
    };
    assert!(field("https://example.test").validate().is_ok());
    assert!(field("javascript:alert(1)").validate().is_err());
}

#[test]
fn story_pages_need_unique_ids() {
    let page = |id: &str| StoryPage { id: id.to_owned(), ..StoryPage::default() };
    let field = Field::new("s", GeneralField::DatasetStory(DatasetStoryField {
        preset: DatasetStoryPreset { pages: vec![page("1"), page("1")] },
    }));
    assert!(field.validate().is_err());
}

#[test]
fn icon_legend_needs_url() {
    let field = Field::new("c", GeneralField::CustomLegend(CustomLegendField {
        preset: CustomLegendPreset {
            title: None,
            legends: vec![CustomLegend { style: LegendStyle::Icon, ..CustomLegend::default() }],
        },
        value: None,
    }));
    assert!(field.validate().is_err());
}

#[test]
fn timeline_timestamps_must_parse() {
    let field = |start: &str| {
        Field::new("t", GeneralField::TimelineCustomized(TimelineCustomizedField {
            preset: Some(TimelineCustomizedPreset { start: Some(start.to_owned()), ..Default::default() }),
        }))
    };
    assert!(field("2024-04-01T00:00:00+09:00").validate().is_ok());
    assert!(field("April first").validate().is_err());
}
