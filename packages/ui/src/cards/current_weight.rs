use chrono::Local;
use dioxus::prelude::*;
use store::{date_range::format_date, WeightRecord};

/// The headline card: latest weight, its change against the previous
/// entry, and how stale the data is.
#[component]
pub fn CurrentWeightCard(record: Option<WeightRecord>) -> Element {
    rsx! {
        div {
            class: "card card-wide",
            div {
                class: "card-body",
                h2 { class: "card-title", "Current Weight" }
                if let Some(record) = record {
                    {
                        let days_ago = (Local::now().date_naive() - record.created_on).num_days();
                        let updated = if days_ago == 0 {
                            "Today".to_string()
                        } else {
                            format!("{days_ago} days ago")
                        };
                        let diff_class = match record.difference {
                            Some(d) if d > 0.0 => "text-error",
                            _ => "text-success",
                        };
                        let date_label = format_date(record.created_on);
                        rsx! {
                            p {
                                class: "stat-value-lg",
                                "{record.weight:.1} kg"
                                if let Some(diff) = record.signed_difference() {
                                    span { class: "stat-diff {diff_class}", " ({diff} kg)" }
                                }
                            }
                            p {
                                class: "stat-subtitle",
                                "Last updated: {date_label} ({updated})"
                            }
                        }
                    }
                } else {
                    p { class: "stat-empty", "No weight data recorded yet" }
                }
            }
        }
    }
}
