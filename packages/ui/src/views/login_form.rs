use api::actions;
use dioxus::prelude::*;

use crate::components::{Button, ErrorBanner, FormField};
use crate::session::{begin_session, use_api, use_session, use_token_store};
use crate::validation::{validate_login, FieldErrors};

/// Email and password sign-in. On success the tokens are persisted, the
/// session context is set and `on_success` fires.
#[component]
pub fn LoginForm(on_success: EventHandler<()>) -> Element {
    let api = use_api();
    let session = use_session();
    let tokens = use_token_store();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::default);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let e = email().trim().to_string();
        let p = password();
        let problems = validate_login(&e, &p);
        if !problems.is_empty() {
            errors.set(problems);
            return;
        }
        errors.set(FieldErrors::default());
        error.set(None);
        loading.set(true);
        let tokens = tokens.clone();
        spawn(async move {
            match actions::login(&api.client(), &tokens, &e, &p).await {
                Ok((new_session, user)) => {
                    begin_session(session, new_session, user);
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
            onsubmit: handle_login,

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
                value: password(),
                error: errors().get("password"),
                oninput: move |v| password.set(v),
            }

            Button {
                class: "w-full",
                r#type: "submit",
                disabled: loading(),
                if loading() { "Signing in..." } else { "Sign in" }
            }
        }
    }
}
