//! Playback controls for a layer's custom timeline.

#[cfg(test)]
#[path = "timeline_controls_test.rs"]
mod timeline_controls_test;

use leptos::prelude::*;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::app::use_extension;
use crate::fields::evaluate::TimelineRange;
use crate::host::RangeType;
use crate::timeline::Timeline;
use crate::util::reactive::hold_until_cleanup;

/// Playback speeds offered in the speed picker.
pub const SPEEDS: [f64; 5] = [1.0, 60.0, 3_600.0, 86_400.0, 604_800.0];

/// Index into [`SPEEDS`] for a speed picker value, falling back to real time.
#[must_use]
pub fn parse_speed_index(raw: &str) -> usize {
    raw.trim().parse::<usize>().ok().filter(|index| *index < SPEEDS.len()).unwrap_or(0)
}

/// Parse a range-type picker value.
#[must_use]
pub fn parse_range_type(raw: &str) -> RangeType {
    RangeType::ALL
        .into_iter()
        .find(|range_type| range_type.as_str() == raw)
        .unwrap_or_default()
}

fn format_time(time: OffsetDateTime) -> String {
    time.format(&Rfc3339).unwrap_or_else(|_| time.to_string())
}

/// Play / reverse / pause / jump for `range`, plus a live clock readout.
#[component]
pub fn TimelineControls(range: TimelineRange) -> impl IntoView {
    let ctx = use_extension();
    let timeline = StoredValue::new_local(Timeline::new(ctx.host));
    let speed = RwSignal::new(0_usize);
    let range_type = RwSignal::new(RangeType::default());
    let now = RwSignal::new(format_time(range.current));

    hold_until_cleanup(timeline.with_value(|timeline| {
        timeline.subscribe_ticks(move |at| now.set(format_time(at)))
    }));

    let range = StoredValue::new(range);
    let on_play = move |_| {
        let request = range.with_value(|range| range.play_request(SPEEDS[speed.get_untracked()]));
        timeline.with_value(|timeline| timeline.play(request));
    };
    let on_reverse = move |_| {
        let request = range.with_value(|range| range.play_request(SPEEDS[speed.get_untracked()]));
        timeline.with_value(|timeline| timeline.play_reverse(request));
    };
    let on_pause = move |_| timeline.with_value(Timeline::pause);
    let on_jump = move |_| {
        range.with_value(|range| timeline.with_value(|timeline| range.apply(timeline)));
    };
    let on_speed = move |ev| {
        let next = parse_speed_index(&event_target_value(&ev));
        speed.set(next);
        timeline.with_value(|timeline| timeline.set_speed(SPEEDS[next]));
    };
    let on_range_type = move |ev| {
        let next = parse_range_type(&event_target_value(&ev));
        range_type.set(next);
        timeline.with_value(|timeline| timeline.set_range_type(next));
    };

    view! {
        <div class="timeline-controls">
            <span class="timeline-controls__now">{move || now.get()}</span>
            <div class="timeline-controls__buttons">
                <button aria-label="Play backwards" on:click=on_reverse>"◀"</button>
                <button aria-label="Pause" on:click=on_pause>"❚❚"</button>
                <button aria-label="Play" on:click=on_play>"▶"</button>
                <button aria-label="Jump to range" on:click=on_jump>"⤒"</button>
            </div>
            <select class="timeline-controls__speed" on:change=on_speed>
                {SPEEDS
                    .into_iter()
                    .enumerate()
                    .map(|(index, value)| view! {
                        <option value=index.to_string() selected=move || speed.get() == index>
                            {format!("×{value}")}
                        </option>
                    })
                    .collect_view()}
            </select>
            <select class="timeline-controls__range" on:change=on_range_type>
                {RangeType::ALL
                    .into_iter()
                    .map(|value| view! {
                        <option value=value.as_str() selected=move || range_type.get() == value>
                            {value.as_str()}
                        </option>
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
