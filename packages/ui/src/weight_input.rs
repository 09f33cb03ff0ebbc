use dioxus::prelude::*;

use crate::ModalOverlay;

/// Floating "+ Add Weight" button and its dialog. The stepper moves in
/// 0.1 kg steps and the dialog previews the difference against the last
/// recorded weight while typing.
#[component]
pub fn WeightInput(last_weight: Option<f64>, on_submit: EventHandler<f64>) -> Element {
    let mut open = use_signal(|| false);
    let mut value = use_signal(String::new);

    let parsed = move || value().trim().parse::<f64>().ok();

    let mut adjust = move |delta: f64| {
        let current = parsed().unwrap_or(last_weight.unwrap_or(0.0));
        value.set(format!("{:.1}", current + delta));
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Some(weight) = parsed() {
            on_submit.call(weight);
            open.set(false);
            value.set(String::new());
        }
    };

    rsx! {
        button {
            class: "btn btn-primary add-weight-fab",
            onclick: move |_| open.set(true),
            "+ Add Weight"
        }

        if open() {
            ModalOverlay {
                on_close: move |_| open.set(false),
                h3 { class: "modal-title", "Add Weight" }
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
                        div {
                            class: "diff-preview",
                            if let Some((entered, last)) = parsed().zip(last_weight) {
                                {
                                    let diff = entered - last;
                                    let tone = if diff < 0.0 {
                                        "text-success"
                                    } else if diff > 0.0 {
                                        "text-error"
                                    } else {
                                        "text-neutral"
                                    };
                                    let sign = if diff > 0.0 { "+" } else { "" };
                                    rsx! {
                                        span { class: "{tone}", "{sign}{diff:.1}kg" }
                                    }
                                }
                            }
                        }
                    }
                    div {
                        class: "modal-action",
                        button {
                            r#type: "button",
                            class: "btn",
                            onclick: move |_| open.set(false),
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
}
