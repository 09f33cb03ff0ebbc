use dioxus::prelude::*;

/// Movement of the one-week rolling average. Losing (or holding) reads as
/// success, gaining as error; the bar is scaled against a 2 kg week.
#[component]
pub fn WeeklyProgressCard(trend: Option<f64>) -> Element {
    rsx! {
        div {
            class: "card",
            div {
                class: "card-body",
                h2 { class: "card-title", "Weekly Progress" }
                if let Some(trend) = trend {
                    {
                        let tone = if trend <= 0.0 { "success" } else { "error" };
                        let signed = if trend > 0.0 {
                            format!("+{trend:.1}")
                        } else {
                            format!("{trend:.1}")
                        };
                        let magnitude = trend.abs();
                        rsx! {
                            p { class: "stat-value text-{tone}", "{signed} kg" }
                            progress {
                                class: "progress progress-{tone}",
                                value: "{magnitude}",
                                max: "2",
                            }
                        }
                    }
                } else {
                    p { class: "stat-empty", "Not enough data yet" }
                }
            }
        }
    }
}
