//! The dashboard: summary cards, the filtered trend chart, and the full
//! entry table with edit/delete dialogs.

use api::{BmiCategoryInfo, UserDetailsInfo};
use dioxus::prelude::*;
use store::date_range::{days_to_range, range_to_days, time_until_midnight};
use store::metrics::{chart_points, goal_progress, weekly_trend};
use store::prefs::{load_saved_range, save_range};
use store::{DateRange, WeightRecord};
use ui::{
    make_preference_store, use_auth, CurrentWeightCard, DateRangeFilter, DeleteWeightModal,
    EditWeightModal, StatsCard, TrendChart, WeeklyProgressCard, WeightTable,
};

use super::redirect;

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let mut weights = use_signal(Vec::<WeightRecord>::new);
    let mut details = use_signal(|| Option::<UserDetailsInfo>::None);
    let mut categories = use_signal(Vec::<BmiCategoryInfo>::new);
    let mut range = use_signal(|| load_saved_range(&make_preference_store()));
    let mut show_filter = use_signal(|| false);
    let mut edit_target = use_signal(|| Option::<WeightRecord>::None);
    let mut delete_target = use_signal(|| Option::<WeightRecord>::None);

    if !auth().loading && auth().user.is_none() {
        redirect("/login");
    }

    let mut loader = use_resource(move || async move {
        match api::list_weights().await {
            Ok(list) => weights.set(list),
            Err(e) => tracing::error!("Failed to load weights: {e}"),
        }
        match api::get_user_details().await {
            Ok(d) => details.set(d),
            Err(e) => tracing::error!("Failed to load profile: {e}"),
        }
        match api::list_bmi_categories().await {
            Ok(list) => categories.set(list),
            Err(e) => tracing::error!("Failed to load BMI categories: {e}"),
        }
    });

    // The persisted range is a relative day count; re-derive it when the
    // local day rolls over so "last 7 days" tracks the calendar.
    use_effect(move || {
        spawn(async move {
            loop {
                let wait = time_until_midnight()
                    .to_std()
                    .unwrap_or_default()
                    .max(std::time::Duration::from_secs(1));
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(wait).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(wait).await;

                range.set(days_to_range(range_to_days(&range())));
            }
        });
    });

    let handle_range_select = move |selected: DateRange| {
        save_range(&make_preference_store(), &selected);
        range.set(selected);
    };

    let handle_edit = move |weight: f64| {
        let Some(record) = edit_target() else {
            return;
        };
        spawn(async move {
            match api::update_weight(record.id, weight).await {
                Ok(_) => loader.restart(),
                Err(e) => tracing::error!("Failed to update weight: {e}"),
            }
            edit_target.set(None);
        });
    };

    let handle_delete = move |_| {
        let Some(record) = delete_target() else {
            return;
        };
        spawn(async move {
            match api::delete_weight(record.id).await {
                Ok(()) => loader.restart(),
                Err(e) => tracing::error!("Failed to delete weight: {e}"),
            }
            delete_target.set(None);
        });
    };

    // Derived display values. The series arrives newest-first.
    let all = weights();
    let latest = all.first().cloned();
    let first_ever = all.last().cloned();
    let target = details().and_then(|d| d.target_weight);
    let goal = match (first_ever.as_ref(), latest.as_ref(), target) {
        (Some(first), Some(latest), Some(target)) => {
            Some(goal_progress(first.weight, latest.weight, target))
        }
        _ => None,
    };
    let trend = weekly_trend(&all);
    let points = chart_points(&all, &range());

    let goal_value = goal.map(|g| format!("{g}%")).unwrap_or_default();
    let goal_subtitle = target.map(|t| format!("target {t:.1} kg"));
    let bmi_value = latest
        .as_ref()
        .and_then(|r| r.bmi)
        .map(|b| format!("{b:.1}"))
        .unwrap_or_default();
    let bmi_subtitle = latest.as_ref().and_then(|r| r.bmi_category.clone());
    let range_label = match range_to_days(&range()) {
        0 => "All time".to_string(),
        days => format!("Last {days} days"),
    };

    rsx! {
        div {
            class: "page dashboard",

            div {
                class: "cards-grid",
                CurrentWeightCard { record: latest.clone() }
                WeeklyProgressCard { trend: trend }
                StatsCard {
                    title: "Goal Progress",
                    value: goal_value,
                    subtitle: goal_subtitle,
                    progress: goal.map(|g| g as f64),
                }
                StatsCard {
                    title: "BMI",
                    value: bmi_value,
                    subtitle: bmi_subtitle,
                }
            }

            div {
                class: "card card-full",
                div {
                    class: "card-body",
                    div {
                        class: "chart-header",
                        h2 { class: "card-title", "Weight Trend" }
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| show_filter.set(true),
                            "{range_label}"
                        }
                    }
                    TrendChart { points: points }
                }
            }

            if !categories().is_empty() {
                div {
                    class: "card card-full",
                    div {
                        class: "card-body",
                        h2 { class: "card-title", "BMI Categories" }
                        div {
                            class: "category-legend",
                            for cat in categories() {
                                {
                                    let bounds = match cat.max_value {
                                        Some(max) => format!("{:.1} - {max:.1}", cat.min_value),
                                        None => format!("{:.1}+", cat.min_value),
                                    };
                                    let description = cat.description.clone().unwrap_or_default();
                                    rsx! {
                                        div {
                                            key: "{cat.name}",
                                            class: "category-row",
                                            span { class: "category-name", "{cat.name}" }
                                            span { class: "category-range", "{bounds}" }
                                            if !description.is_empty() {
                                                span { class: "category-desc", "{description}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "card card-full",
                div {
                    class: "card-body",
                    h2 { class: "card-title", "All Entries" }
                    WeightTable {
                        records: all.clone(),
                        on_edit: move |record| edit_target.set(Some(record)),
                        on_delete: move |record| delete_target.set(Some(record)),
                    }
                }
            }

            if show_filter() {
                DateRangeFilter {
                    on_select: handle_range_select,
                    on_close: move |_| show_filter.set(false),
                }
            }

            if let Some(record) = edit_target() {
                EditWeightModal {
                    record: record,
                    on_close: move |_| edit_target.set(None),
                    on_confirm: handle_edit,
                }
            }

            if let Some(record) = delete_target() {
                DeleteWeightModal {
                    record: record,
                    on_close: move |_| delete_target.set(None),
                    on_confirm: handle_delete,
                }
            }
        }
    }
}
