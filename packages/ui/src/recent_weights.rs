use dioxus::prelude::*;
use store::{date_range::format_date, WeightRecord};

/// The last few entries as a compact list, newest first.
#[component]
pub fn RecentWeights(records: Vec<WeightRecord>) -> Element {
    rsx! {
        div {
            class: "recent-weights",
            h2 { "Recent Weights" }
            if records.is_empty() {
                p { class: "stat-empty", "Nothing recorded yet" }
            } else {
                ul {
                    for record in &records {
                        {
                            let date_label = format_date(record.created_on);
                            let tone = if record.difference.unwrap_or(0.0) > 0.0 {
                                "text-error"
                            } else {
                                "text-success"
                            };
                            rsx! {
                                li {
                                    key: "{record.id}",
                                    span { class: "recent-value", "{record.weight:.1} kg" }
                                    span { class: "recent-date", " - {date_label}" }
                                    if let Some(diff) = record.signed_difference() {
                                        span { class: "recent-diff {tone}", " ({diff})" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
