use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use dioxus::prelude::*;
use store::WeightRecord;

const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Calendar-style entry table: one row per week, entries land in their
/// weekday column. Clicking an entry selects it and reveals its edit and
/// delete actions; clicking again deselects.
#[component]
pub fn WeightTable(
    records: Vec<WeightRecord>,
    on_edit: EventHandler<WeightRecord>,
    on_delete: EventHandler<WeightRecord>,
) -> Element {
    let mut selected = use_signal(|| Option::<i64>::None);

    // Newest week first, entries bucketed by their Monday.
    let mut weeks: BTreeMap<NaiveDate, Vec<WeightRecord>> = BTreeMap::new();
    for record in &records {
        weeks
            .entry(week_start(record.created_on))
            .or_default()
            .push(record.clone());
    }

    rsx! {
        div {
            class: "weight-table",
            div {
                class: "week-grid week-header",
                for day in DAY_LABELS {
                    div { key: "{day}", class: "week-day-label", "{day}" }
                }
            }
            if weeks.is_empty() {
                p { class: "stat-empty", "No entries in this range yet" }
            }
            for (start, entries) in weeks.iter().rev() {
                div {
                    key: "{start}",
                    class: "week-grid week-row",
                    for record in entries.iter() {
                        {
                            let column = record.created_on.weekday().num_days_from_monday() + 1;
                            let is_selected = selected() == Some(record.id);
                            let cell_class = if is_selected {
                                "week-cell selected"
                            } else {
                                "week-cell"
                            };
                            let id = record.id;
                            let day_of_month = record.created_on.day();
                            let edit_record = record.clone();
                            let delete_record = record.clone();
                            rsx! {
                                div {
                                    key: "{record.id}",
                                    class: "{cell_class}",
                                    style: "grid-column: {column}",
                                    onclick: move |_| {
                                        if selected() == Some(id) {
                                            selected.set(None);
                                        } else {
                                            selected.set(Some(id));
                                        }
                                    },
                                    span { class: "cell-day", "{day_of_month}" }
                                    span { class: "cell-weight", "{record.weight:.1}" }
                                    if is_selected {
                                        div {
                                            class: "cell-actions",
                                            button {
                                                class: "btn btn-xs",
                                                onclick: move |evt: Event<MouseData>| {
                                                    evt.stop_propagation();
                                                    on_edit.call(edit_record.clone());
                                                },
                                                "Edit"
                                            }
                                            button {
                                                class: "btn btn-xs btn-error",
                                                onclick: move |evt: Event<MouseData>| {
                                                    evt.stop_propagation();
                                                    on_delete.call(delete_record.clone());
                                                },
                                                "Delete"
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
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weeks_start_on_monday() {
        // 2026-08-06 is a Thursday.
        let thursday = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let monday = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        assert_eq!(week_start(thursday), monday);
        assert_eq!(week_start(monday), monday);
        // Sunday still belongs to the week of its preceding Monday.
        let sunday = NaiveDate::from_ymd_opt(2026, 8, 9).unwrap();
        assert_eq!(week_start(sunday), monday);
    }
}
