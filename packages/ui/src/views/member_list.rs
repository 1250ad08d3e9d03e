use api::actions;
use dioxus::prelude::*;
use store::User;

use crate::components::{Button, ButtonVariant, ErrorBanner, Input};
use crate::entitlement::use_can_write;
use crate::icons::{FaTrash, FaUserPlus};
use crate::Icon;

use super::project_detail::use_detail;

/// Team members of the current project. Adding looks the user up by email.
#[component]
pub fn MemberList(members: Vec<User>) -> Element {
    let handle = use_detail();
    let entitled = use_can_write();
    let mut show_form = use_signal(|| false);
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let add_handle = handle.clone();
    let add = move |evt: FormEvent| {
        evt.prevent_default();
        let address = email().trim().to_string();
        if address.is_empty() {
            return;
        }
        let handle = add_handle.clone();
        busy.set(true);
        spawn(async move {
            let ticket = handle.begin();
            match actions::add_member_by_email(&handle.client(), &handle.project_id, &address)
                .await
            {
                Ok(detail) => {
                    handle.apply(ticket, detail);
                    email.set(String::new());
                    error.set(None);
                    show_form.set(false);
                }
                Err(err) => error.set(Some(err.message)),
            }
            busy.set(false);
        });
    };

    let remove = move |user_id: String| {
        let handle = handle.clone();
        spawn(async move {
            let ticket = handle.begin();
            match actions::remove_member(&handle.client(), &handle.project_id, &user_id).await {
                Ok(detail) => {
                    handle.apply(ticket, detail);
                    error.set(None);
                }
                Err(err) => error.set(Some(err.message)),
            }
        });
    };

    rsx! {
        div {
            class: "card",
            div {
                class: "card-header",
                h2 { "Team Members" }
                if entitled {
                    Button {
                        onclick: move |_| show_form.set(!show_form()),
                        if show_form() {
                            "Cancel"
                        } else {
                            Icon { icon: FaUserPlus, width: 14, height: 14 }
                            " Add Member"
                        }
                    }
                }
            }

            ErrorBanner { message: error() }

            if show_form() && entitled {
                form {
                    class: "inline-form",
                    onsubmit: add,
                    Input {
                        r#type: "email",
                        placeholder: "Enter email address",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    Button { r#type: "submit", disabled: busy(), "Add" }
                }
            }

            ul {
                class: "member-rows",
                for member in members.iter() {
                    li {
                        key: "{member.id}",
                        class: "member-row",
                        div {
                            p { class: "member-name", "{member.full_name()}" }
                            p { class: "muted", "{member.email}" }
                        }
                        if entitled {
                            Button {
                                variant: ButtonVariant::Ghost,
                                class: "danger-text",
                                onclick: {
                                    let id = member.id.clone();
                                    let mut remove = remove.clone();
                                    move |_| remove(id.clone())
                                },
                                Icon { icon: FaTrash, width: 12, height: 12 }
                                " Remove"
                            }
                        }
                    }
                }
                if members.is_empty() {
                    p { class: "muted empty", "No team members yet" }
                }
            }
        }
    }
}
