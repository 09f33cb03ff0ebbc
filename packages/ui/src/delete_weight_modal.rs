use dioxus::prelude::*;
use store::{date_range::format_date, WeightRecord};

use crate::ModalOverlay;

/// Confirmation dialog before an entry is removed.
#[component]
pub fn DeleteWeightModal(
    record: WeightRecord,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    let date_label = format_date(record.created_on);

    rsx! {
        ModalOverlay {
            on_close: on_close,
            h3 { class: "modal-title", "Delete Weight" }
            p {
                class: "modal-text",
                "Are you sure you want to delete the weight entry from {date_label}?"
                br {}
                span { class: "modal-strong", "{record.weight} kg" }
            }
            div {
                class: "modal-action",
                button {
                    class: "btn",
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-error",
                    onclick: move |_| on_confirm.call(()),
                    "Delete"
                }
            }
        }
    }
}
