use api::actions;
use dioxus::prelude::*;
use store::{NewProject, Project, RequestSequence};

use crate::components::{Button, ButtonVariant, ErrorBanner, FormField, Spinner};
use crate::entitlement::{use_can_write, Entitled};
use crate::icons::FaTrash;
use crate::session::use_api;
use crate::validation::{validate_project, FieldErrors};
use crate::Icon;

/// The projects the session user owns or belongs to.
///
/// Creating and deleting are offered to entitled sessions only; both re-fetch
/// the list on success.
#[component]
pub fn ProjectList(on_open: EventHandler<String>) -> Element {
    let api = use_api();
    let entitled = use_can_write();
    let sequence = use_hook(RequestSequence::new);
    let mut projects = use_signal(Vec::<Project>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let mut show_form = use_signal(|| false);

    let load_sequence = sequence.clone();
    let _loader = use_resource(move || {
        let sequence = load_sequence.clone();
        async move {
            let ticket = sequence.begin();
            match actions::load_projects(&api.client()).await {
                Ok(list) if sequence.accept(ticket) => projects.set(list),
                Ok(_) => tracing::debug!("dropping stale project list"),
                Err(err) if sequence.is_fresh(ticket) => error.set(Some(err.message)),
                Err(_) => {}
            }
            loading.set(false);
        }
    });

    let create_sequence = sequence.clone();
    let on_create = move |project: NewProject| {
        let sequence = create_sequence.clone();
        spawn(async move {
            let ticket = sequence.begin();
            match actions::create_project(&api.client(), &project).await {
                Ok(list) => {
                    show_form.set(false);
                    if sequence.accept(ticket) {
                        projects.set(list);
                        error.set(None);
                    }
                }
                Err(err) if sequence.is_fresh(ticket) => error.set(Some(err.message)),
                Err(_) => {}
            }
        });
    };

    let on_delete = use_callback(move |project_id: String| {
        let sequence = sequence.clone();
        spawn(async move {
            let ticket = sequence.begin();
            match actions::delete_project(&api.client(), &project_id).await {
                Ok(list) if sequence.accept(ticket) => {
                    projects.set(list);
                    error.set(None);
                }
                Ok(_) => tracing::debug!("dropping stale project list"),
                Err(err) if sequence.is_fresh(ticket) => error.set(Some(err.message)),
                Err(_) => {}
            }
        });
    });

    if loading() {
        return rsx! { Spinner {} };
    }

    rsx! {
        div {
            class: "projects",
            div {
                class: "page-header",
                h1 { "Projects" }
                NewProjectToggle { show_form }
            }

            ErrorBanner { message: error() }

            if show_form() && entitled {
                CreateProjectForm { on_submit: on_create }
            }

            div {
                class: "card",
                if projects.read().is_empty() {
                    p { class: "muted empty", "No projects yet. Create your first project!" }
                } else {
                    ul {
                        class: "project-rows",
                        for project in projects() {
                            ProjectRow {
                                key: "{project.id}",
                                project,
                                can_delete: entitled,
                                on_open,
                                on_delete,
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Opens and closes the create form; rendered for entitled sessions only.
#[component]
fn NewProjectToggle(mut show_form: Signal<bool>) -> Element {
    rsx! {
        Entitled {
            Button {
                onclick: move |_| show_form.set(!show_form()),
                if show_form() { "Cancel" } else { "New Project" }
            }
        }
    }
}

#[component]
fn ProjectRow(
    project: Project,
    can_delete: bool,
    on_open: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let open_id = project.id.clone();
    let delete_id = project.id.clone();

    rsx! {
        li {
            class: "project-row",
            div {
                class: "project-summary",
                onclick: move |_| on_open.call(open_id.clone()),
                h2 { "{project.title}" }
                p { class: "muted", "{project.description}" }
            }
            if can_delete {
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "danger-text",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    Icon { icon: FaTrash, width: 12, height: 12 }
                    " Delete"
                }
            }
        }
    }
}

#[component]
fn CreateProjectForm(on_submit: EventHandler<NewProject>) -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::default);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let project = NewProject {
            title: title().trim().to_string(),
            description: description().trim().to_string(),
        };
        let problems = validate_project(&project.title, &project.description);
        if !problems.is_empty() {
            errors.set(problems);
            return;
        }
        errors.set(FieldErrors::default());
        on_submit.call(project);
    };

    rsx! {
        form {
            class: "card create-project",
            onsubmit: submit,
            FormField {
                id: "project-title",
                label: "Title",
                value: title(),
                error: errors().get("title"),
                oninput: move |v| title.set(v),
            }
            FormField {
                id: "project-description",
                label: "Description",
                value: description(),
                error: errors().get("description"),
                oninput: move |v| description.set(v),
            }
            Button { r#type: "submit", "Create Project" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Capabilities;

    #[component]
    fn ToggleWithEntitlement(capabilities: Option<Capabilities>) -> Element {
        use_context_provider(|| Signal::new(capabilities));
        let show_form = use_signal(|| false);
        rsx! {
            NewProjectToggle { show_form }
        }
    }

    fn render(capabilities: Option<Capabilities>) -> String {
        let mut dom = VirtualDom::new_with_props(
            ToggleWithEntitlement,
            ToggleWithEntitlementProps { capabilities },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_new_project_hidden_while_entitlement_resolving() {
        assert!(!render(None).contains("New Project"));
    }

    #[test]
    fn test_new_project_hidden_without_subscription() {
        let html = render(Some(Capabilities { is_subscribed: false }));
        assert!(!html.contains("New Project"));
    }

    #[test]
    fn test_new_project_offered_to_subscribers() {
        let html = render(Some(Capabilities { is_subscribed: true }));
        assert!(html.contains("New Project"));
    }
}
