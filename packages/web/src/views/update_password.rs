//! Change-password page for the signed-in user.

use dioxus::prelude::*;
use ui::use_auth;

use super::redirect;

#[component]
pub fn UpdatePassword() -> Element {
    let auth = use_auth();
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut message = use_signal(|| Option::<String>::None);

    if !auth().loading && auth().user.is_none() {
        redirect("/login");
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            message.set(None);

            let p = password();
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if p != confirm_password() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            match api::update_password(p).await {
                Ok(()) => {
                    message.set(Some("Password updated successfully".to_string()));
                    password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-title", "Change Password" }
            p { class: "auth-subtitle", "Choose a new password for your account" }

            form {
                onsubmit: handle_submit,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }
                if let Some(msg) = message() {
                    div { class: "form-success", "{msg}" }
                }

                input {
                    class: "input input-bordered",
                    r#type: "password",
                    placeholder: "New password (min 8 characters)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                input {
                    class: "input input-bordered",
                    r#type: "password",
                    placeholder: "Confirm new password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    "Update Password"
                }
            }

            p {
                class: "auth-switch",
                a { href: "/profile", "Back to profile" }
            }
        }
    }
}
