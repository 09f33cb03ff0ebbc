use dioxus::prelude::*;

/// Generic stat card: a title, a big value, an optional subtitle and an
/// optional 0..=100 progress bar. An empty value renders the placeholder.
#[component]
pub fn StatsCard(
    title: String,
    value: String,
    #[props(default)] subtitle: Option<String>,
    #[props(default)] progress: Option<f64>,
) -> Element {
    rsx! {
        div {
            class: "card",
            div {
                class: "card-body",
                h2 { class: "card-title", "{title}" }
                if value.is_empty() {
                    p { class: "stat-value stat-empty", "--" }
                } else {
                    p { class: "stat-value", "{value}" }
                    if let Some(pct) = progress {
                        progress {
                            class: "progress progress-success",
                            value: "{pct}",
                            max: "100",
                        }
                    }
                    if let Some(subtitle) = subtitle {
                        p { class: "stat-subtitle", "{subtitle}" }
                    }
                }
            }
        }
    }
}
