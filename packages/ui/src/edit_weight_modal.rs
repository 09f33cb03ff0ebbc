use dioxus::prelude::*;
use store::{date_range::format_date, WeightRecord};

use crate::ModalOverlay;

/// Dialog for changing the weight of an existing entry. The date is fixed;
/// only the value can move, with the same 0.1 kg stepper as the add form.
#[component]
pub fn EditWeightModal(
    record: WeightRecord,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<f64>,
) -> Element {
    let mut value = use_signal(move || format!("{:.1}", record.weight));

    let parsed = move || value().trim().parse::<f64>().ok();

    let mut adjust = move |delta: f64| {
        let current = parsed().unwrap_or(0.0);
        value.set(format!("{:.1}", current + delta));
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Some(weight) = parsed() {
            on_confirm.call(weight);
        }
    };

    let date_label = format_date(record.created_on);

    rsx! {
        ModalOverlay {
            on_close: on_close,
            h3 { class: "modal-title", "Edit Weight - {date_label}" }
            form {
                onsubmit: handle_submit,
                div {
                    class: "form-field",
                    label { "Weight (kg)" }
                    div {
                        class: "stepper-row",
                        button {
                            r#type: "button",
                            class: "btn btn-square",
                            onclick: move |_| adjust(-0.1),
                            "-"
                        }
                        input {
                            r#type: "number",
                            name: "weight",
                            step: "0.1",
                            min: "0",
                            max: "999.9",
                            required: true,
                            class: "input input-bordered input-center",
                            value: value(),
                            oninput: move |evt: FormEvent| value.set(evt.value()),
                        }
                        button {
                            r#type: "button",
                            class: "btn btn-square",
                            onclick: move |_| adjust(0.1),
                            "+"
                        }
                    }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: parsed().is_none(),
                        "Save"
                    }
                }
            }
        }
    }
}
