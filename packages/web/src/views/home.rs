//! Landing page: record a weight, see the latest few entries.

use dioxus::prelude::*;
use store::WeightRecord;
use ui::{use_auth, RecentWeights, WeightInput};

use super::redirect;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let mut weights = use_signal(Vec::<WeightRecord>::new);

    if !auth().loading && auth().user.is_none() {
        redirect("/login");
    }

    let mut loader = use_resource(move || async move {
        match api::list_weights().await {
            Ok(list) => weights.set(list),
            Err(e) => tracing::error!("Failed to load weights: {e}"),
        }
    });

    let latest_weight = weights().first().map(|r| r.weight);
    let recent: Vec<WeightRecord> = weights().iter().take(5).cloned().collect();

    let handle_submit = move |weight: f64| {
        spawn(async move {
            match api::add_weight(weight, None).await {
                Ok(record) => {
                    tracing::info!("Weight added: {} kg on {}", record.weight, record.created_on);
                    loader.restart();
                }
                Err(e) => tracing::error!("Failed to add weight: {e}"),
            }
        });
    };

    rsx! {
        div {
            class: "page",
            h1 { "Welcome to WeightLog" }
            RecentWeights { records: recent }
            WeightInput {
                last_weight: latest_weight,
                on_submit: handle_submit,
            }
        }
    }
}
