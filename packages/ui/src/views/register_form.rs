use api::actions;
use dioxus::prelude::*;
use store::RegisterRequest;

use crate::components::{Button, ErrorBanner, FormField};
use crate::session::use_api;
use crate::validation::{validate_register, FieldErrors};

/// Account creation. Nothing is sent until every field validates; on
/// success `on_success` fires so the caller can move on to sign-in.
#[component]
pub fn RegisterForm(on_success: EventHandler<()>) -> Element {
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::default);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let request = RegisterRequest {
            email: email().trim().to_string(),
            password: password(),
            first_name: first_name().trim().to_string(),
            last_name: last_name().trim().to_string(),
        };
        let problems = validate_register(&request);
        if !problems.is_empty() {
            errors.set(problems);
            return;
        }
        errors.set(FieldErrors::default());
        error.set(None);
        loading.set(true);
        spawn(async move {
            match actions::register(&api.client(), &request).await {
                Ok(user) => {
                    tracing::info!(email = %user.email, "account created");
                    loading.set(false);
                    on_success.call(());
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.message));
                }
            }
        });
    };

    rsx! {
        form {
            class: "auth-form",
            onsubmit: handle_register,

            ErrorBanner { message: error() }

            FormField {
                id: "email",
                label: "Email",
                input_type: "email",
                value: email(),
                error: errors().get("email"),
                oninput: move |v| email.set(v),
            }

            FormField {
                id: "password",
                label: "Password",
                input_type: "password",
                placeholder: "At least 8 characters, one uppercase, one number",
                value: password(),
                error: errors().get("password"),
                oninput: move |v| password.set(v),
            }

            div {
                class: "form-grid",
                FormField {
                    id: "first_name",
                    label: "First name",
                    value: first_name(),
                    error: errors().get("first_name"),
                    oninput: move |v| first_name.set(v),
                }
                FormField {
                    id: "last_name",
                    label: "Last name",
                    value: last_name(),
                    error: errors().get("last_name"),
                    oninput: move |v| last_name.set(v),
                }
            }

            Button {
                class: "w-full",
                r#type: "submit",
                disabled: loading(),
                if loading() { "Creating account..." } else { "Register" }
            }
        }
    }
}
