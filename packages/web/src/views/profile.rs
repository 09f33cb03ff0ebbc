//! Profile page: the fields that parameterise BMI and goal progress.

use dioxus::prelude::*;
use ui::use_auth;

use super::redirect;

#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut height_cm = use_signal(String::new);
    let mut target_weight = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut message = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    if !auth().loading && auth().user.is_none() {
        redirect("/login");
    }

    let _ = use_resource(move || async move {
        match api::get_user_details().await {
            Ok(Some(details)) => {
                first_name.set(details.first_name.unwrap_or_default());
                last_name.set(details.last_name.unwrap_or_default());
                height_cm.set(details.height_cm.to_string());
                target_weight.set(
                    details
                        .target_weight
                        .map(|t| format!("{t:.1}"))
                        .unwrap_or_default(),
                );
            }
            Ok(None) => {}
            Err(e) => error.set(Some(e.to_string())),
        }
        loading.set(false);
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            message.set(None);

            let Ok(height) = height_cm().trim().parse::<i32>() else {
                error.set(Some("Height is required".to_string()));
                return;
            };
            let target = match target_weight().trim() {
                "" => None,
                raw => match raw.parse::<f64>() {
                    Ok(t) => Some(t),
                    Err(_) => {
                        error.set(Some("Target weight must be a number".to_string()));
                        return;
                    }
                },
            };

            let result = api::update_user_details(
                Some(first_name()),
                Some(last_name()),
                height,
                target,
            )
            .await;

            match result {
                Ok(_) => message.set(Some("Details updated successfully".to_string())),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div {
            class: "page",
            h1 { "User Details" }
            p { class: "auth-subtitle", "Update your profile information" }

            if loading() {
                p { class: "stat-empty", "Loading..." }
            } else {
                form {
                    class: "profile-form card",
                    onsubmit: handle_submit,

                    div {
                        class: "form-field",
                        label { "First Name" }
                        input {
                            r#type: "text",
                            class: "input input-bordered",
                            value: first_name(),
                            oninput: move |evt: FormEvent| first_name.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Last Name" }
                        input {
                            r#type: "text",
                            class: "input input-bordered",
                            value: last_name(),
                            oninput: move |evt: FormEvent| last_name.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Height (cm)" }
                        input {
                            r#type: "number",
                            class: "input input-bordered",
                            value: height_cm(),
                            oninput: move |evt: FormEvent| height_cm.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Target Weight (kg)" }
                        input {
                            r#type: "number",
                            step: "0.1",
                            class: "input input-bordered",
                            value: target_weight(),
                            oninput: move |evt: FormEvent| target_weight.set(evt.value()),
                        }
                    }

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }
                    if let Some(msg) = message() {
                        div { class: "form-success", "{msg}" }
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        "Save Changes"
                    }

                    div { class: "divider", "or" }
                    p {
                        class: "auth-switch",
                        a { href: "/password", "Change Password" }
                    }
                }
            }
        }
    }
}
