use std::future::Future;

use api::actions::{self, ProjectDetail};
use api::{ActionError, ApiClient};
use dioxus::prelude::*;
use store::{ProjectUpdate, RequestSequence, Ticket};

use crate::components::{Button, ButtonVariant, ErrorBanner, FormField, Spinner};
use crate::entitlement::use_can_write;
use crate::session::{use_api, Api};
use crate::validation::{validate_project, FieldErrors};

use super::{MemberList, TaskList, TaskProgressBar};

/// Shared by the detail view and its panels. Every load or mutation takes a
/// ticket first; a result older than the one on screen is dropped.
#[derive(Clone)]
pub struct DetailHandle {
    pub project_id: String,
    api: Api,
    sequence: RequestSequence,
    detail: Signal<Option<ProjectDetail>>,
    error: Signal<Option<String>>,
}

impl DetailHandle {
    pub fn client(&self) -> ApiClient {
        self.api.client()
    }

    pub fn begin(&self) -> Ticket {
        self.sequence.begin()
    }

    /// Apply a re-fetched detail unless a newer one is already shown.
    pub fn apply(&self, ticket: Ticket, detail: ProjectDetail) {
        if !self.sequence.accept(ticket) {
            tracing::debug!(project_id = %self.project_id, "dropping stale project detail");
            return;
        }
        let mut target = self.detail;
        target.set(Some(detail));
        let mut error = self.error;
        error.set(None);
    }

    fn fail(&self, ticket: Ticket, err: ActionError) {
        if self.sequence.is_fresh(ticket) {
            let mut error = self.error;
            error.set(Some(err.message));
        }
    }

    pub async fn reload(&self) {
        let ticket = self.begin();
        match actions::load_project_detail(&self.client(), &self.project_id).await {
            Ok(detail) => self.apply(ticket, detail),
            Err(err) => self.fail(ticket, err),
        }
    }

    /// Run a task mutation. Failures are already logged by the action and
    /// leave the view as it was.
    pub fn run_silent<F, Fut>(&self, op: F)
    where
        F: FnOnce(ApiClient, String) -> Fut + 'static,
        Fut: Future<Output = Option<ProjectDetail>> + 'static,
    {
        let handle = self.clone();
        let ticket = handle.begin();
        spawn(async move {
            if let Some(detail) = op(handle.client(), handle.project_id.clone()).await {
                handle.apply(ticket, detail);
            }
        });
    }
}

pub fn use_detail() -> DetailHandle {
    use_context::<DetailHandle>()
}

/// Project header, progress, tasks and members for one project.
///
/// The body is keyed on the id, so switching projects remounts it with a
/// fresh handle, sequence and loaded state.
#[component]
pub fn ProjectDetailView(project_id: String) -> Element {
    rsx! {
        ProjectDetailBody { key: "{project_id}", project_id: project_id.clone() }
    }
}

#[component]
fn ProjectDetailBody(project_id: String) -> Element {
    let api = use_api();
    let detail = use_signal(|| None::<ProjectDetail>);
    let error = use_signal(|| None::<String>);
    let handle = use_context_provider(|| DetailHandle {
        project_id: project_id.clone(),
        api,
        sequence: RequestSequence::new(),
        detail,
        error,
    });

    let loader = handle.clone();
    let load = use_resource(move || {
        let handle = loader.clone();
        async move { handle.reload().await }
    });
    let loading = load.read().is_none() && detail.read().is_none();

    if loading {
        return rsx! { Spinner {} };
    }

    let Some(current) = detail() else {
        return rsx! {
            ErrorBanner { message: error() }
        };
    };

    rsx! {
        div {
            class: "project-detail",
            ErrorBanner { message: error() }

            ProjectHeader {
                title: current.project.title.clone(),
                description: current.project.description.clone(),
            }

            TaskProgressBar { tasks: current.tasks.clone() }

            div {
                class: "project-panels",
                TaskList { tasks: current.tasks.clone(), members: current.members.clone() }
                MemberList { members: current.members.clone() }
            }
        }
    }
}

#[component]
fn ProjectHeader(title: String, description: String) -> Element {
    let handle = use_detail();
    let entitled = use_can_write();
    let mut editing = use_signal(|| false);
    let mut draft_title = use_signal(String::new);
    let mut draft_description = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::default);
    let mut banner = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let start_edit = {
        let title = title.clone();
        let description = description.clone();
        move |_: MouseEvent| {
            draft_title.set(title.clone());
            draft_description.set(description.clone());
            errors.set(FieldErrors::default());
            banner.set(None);
            editing.set(true);
        }
    };

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let update = ProjectUpdate {
            title: draft_title().trim().to_string(),
            description: draft_description().trim().to_string(),
        };
        let problems = validate_project(&update.title, &update.description);
        if !problems.is_empty() {
            errors.set(problems);
            return;
        }
        errors.set(FieldErrors::default());
        saving.set(true);
        let handle = handle.clone();
        spawn(async move {
            let ticket = handle.begin();
            match actions::update_project(&handle.client(), &handle.project_id, &update).await {
                Ok(detail) => {
                    handle.apply(ticket, detail);
                    editing.set(false);
                }
                Err(err) => banner.set(Some(err.message)),
            }
            saving.set(false);
        });
    };

    if editing() && entitled {
        return rsx! {
            form {
                class: "card project-header",
                onsubmit: save,
                ErrorBanner { message: banner() }
                FormField {
                    id: "project-title",
                    label: "Title",
                    value: draft_title(),
                    error: errors().get("title"),
                    oninput: move |v| draft_title.set(v),
                }
                FormField {
                    id: "project-description",
                    label: "Description",
                    value: draft_description(),
                    error: errors().get("description"),
                    oninput: move |v| draft_description.set(v),
                }
                div {
                    class: "form-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        r#type: "button",
                        onclick: move |_| editing.set(false),
                        "Cancel"
                    }
                    Button {
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save" }
                    }
                }
            }
        };
    }

    rsx! {
        div {
            class: "card project-header",
            div {
                h1 { class: "project-title", "{title}" }
                p { class: "muted", "{description}" }
            }
            if entitled {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: start_edit,
                    "Edit"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionProvider;
    use store::ClientConfig;

    #[component]
    fn DetailWithSession(project_id: String) -> Element {
        rsx! {
            SessionProvider {
                config: ClientConfig::default(),
                ProjectDetailView { project_id }
            }
        }
    }

    #[tokio::test]
    async fn test_detail_shows_spinner_until_loaded() {
        let mut dom = VirtualDom::new_with_props(
            DetailWithSession,
            DetailWithSessionProps { project_id: "p1".to_string() },
        );
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("spinner"), "{html}");
        assert!(!html.contains("project-detail"));
    }
}
