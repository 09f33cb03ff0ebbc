use chrono::{NaiveDate, NaiveTime, Utc};
use dioxus::prelude::*;
use store::date_range::{days_to_range, DateRange};

use crate::ModalOverlay;

const PRESET_RANGES: [(&str, i64); 5] = [
    ("7 Days", 7),
    ("1 Month", 30),
    ("3 Months", 90),
    ("1 Year", 365),
    ("All", 0),
];

/// Dialog for picking the chart window: preset day counts or a custom
/// start/end pair. The end date is capped at today.
#[component]
pub fn DateRangeFilter(on_select: EventHandler<DateRange>, on_close: EventHandler<()>) -> Element {
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);

    let parse = |raw: &str| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok();

    let custom_range = move || {
        let start = parse(&start_date())?;
        let end = parse(&end_date())?;
        Some(DateRange {
            start: start.and_time(NaiveTime::MIN).and_utc(),
            end: end.and_time(NaiveTime::MIN).and_utc(),
        })
    };

    let handle_custom = move |_| {
        if let Some(range) = custom_range() {
            on_select.call(range);
            on_close.call(());
        }
    };

    let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();

    rsx! {
        ModalOverlay {
            on_close: on_close,
            h3 { class: "modal-title", "Filter Date Range" }

            div {
                class: "preset-grid",
                for (label, days) in PRESET_RANGES {
                    button {
                        key: "{label}",
                        class: "btn btn-outline",
                        onclick: move |_| {
                            on_select.call(days_to_range(days));
                            on_close.call(());
                        },
                        "{label}"
                    }
                }
            }

            div { class: "divider", "Or select custom range" }

            div {
                class: "form-field",
                label { "Start Date" }
                input {
                    r#type: "date",
                    class: "input input-bordered",
                    value: start_date(),
                    max: end_date(),
                    oninput: move |evt: FormEvent| start_date.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "End Date" }
                input {
                    r#type: "date",
                    class: "input input-bordered",
                    value: end_date(),
                    min: start_date(),
                    max: today,
                    oninput: move |evt: FormEvent| end_date.set(evt.value()),
                }
            }
            button {
                class: "btn btn-primary btn-block",
                disabled: custom_range().is_none(),
                onclick: handle_custom,
                "Apply Custom Range"
            }

            div {
                class: "modal-action",
                button {
                    class: "btn",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}
