//! # Domain models for projects, tasks and members
//!
//! Every type here mirrors a JSON shape exchanged with the remote API and is
//! `Serialize + Deserialize` so the `api` crate can send and decode it
//! directly. Identifiers are kept as `String`s (the server uses UUIDs) so the
//! models stay usable in WASM without extra dependencies.
//!
//! ## Entities
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | A registered account. Read-only to the client. |
//! | [`Project`] | A project owned by or shared with the session user. The server may embed `owner_id`, `team_members` and `tasks`. |
//! | [`Task`] | A unit of work inside a project, with a [`TaskStatus`], an optional assignee and an optional due date. |
//! | [`ProjectMembership`] | The `(project, user, role)` triple behind a member entry. |
//!
//! ## Request bodies
//!
//! [`RegisterRequest`], [`NewProject`], [`ProjectUpdate`], [`NewTask`] and
//! [`TaskUpdate`] are the payloads of the mutation endpoints. [`TaskUpdate`] is a
//! partial update: absent fields are not serialized, and `assignee_id` is
//! tri-state so an assignee can be cleared with an explicit `null`.
//!
//! ## Subscription
//!
//! [`SubscriptionStatus`], [`Product`] and [`CheckoutSession`] back the
//! entitlement query and the checkout redirect flow.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A registered account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// "First Last", trimmed when either part is empty.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A project as returned by `/api/projects`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub team_members: Vec<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
}

/// Task lifecycle status. Any value may replace any other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    /// Wire representation: `"pending"`, `"in_progress"`, `"completed"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Human label used in selects and detail views.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the three status values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown task status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for TaskStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "in_progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// A task inside a project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub project_id: String,
    #[serde(default)]
    pub assignee_id: Option<String>,
    /// Raw server timestamp; see [`crate::due_date`] for formatting.
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,
}

/// Role of a user inside a project.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Admin,
    #[default]
    User,
}

/// Link between a project and one of its members.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectMembership {
    pub project_id: String,
    pub user_id: String,
    #[serde(default)]
    pub role: MemberRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Body of `POST /register`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// User embedded in a login response. The server omits the id here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginUser {
    #[serde(default)]
    pub id: Option<String>,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Response of `POST /login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: LoginUser,
}

/// Body of `POST /api/projects`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
}

/// Body of `PUT /api/projects/{id}`. The server replaces both fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectUpdate {
    pub title: String,
    pub description: String,
}

/// Body of `POST /api/projects/{id}/tasks`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: Option<String>,
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
}

/// Partial body of `PUT /api/projects/{id}/tasks/{task_id}`.
///
/// `assignee_id` is tri-state: `None` leaves it untouched, `Some(None)` clears
/// it (serialized as `null`), `Some(Some(id))` assigns.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<String>>,
}

impl TaskUpdate {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// `None` clears the assignee.
    pub fn assignee(assignee_id: Option<String>) -> Self {
        Self {
            assignee_id: Some(assignee_id),
            ..Self::default()
        }
    }
}

/// Subscription state reported by `/api/subscription-status`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionState {
    Active,
    Expired,
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionStatus {
    pub status: SubscriptionState,
}

impl SubscriptionStatus {
    pub fn is_active(&self) -> bool {
        self.status == SubscriptionState::Active
    }
}

/// A purchasable plan from `/api/products`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Monthly price in the account currency.
    #[serde(default)]
    pub price: Option<f64>,
    pub price_id: String,
}

impl Product {
    pub fn price_label(&self) -> String {
        match self.price {
            Some(p) if p.fract() == 0.0 => format!("${p:.0}"),
            Some(p) => format!("${p:.2}"),
            None => "N/A".to_string(),
        }
    }
}

/// Response of `/api/create-checkout-session`; only the redirect URL is used.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_status_wire_names() {
        for status in TaskStatus::ALL {
            let encoded = serde_json::to_value(status).unwrap();
            assert_eq!(encoded, json!(status.as_str()));
            assert_eq!(status.as_str().parse::<TaskStatus>().unwrap(), status);
        }
        assert!("done".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_task_with_missing_optionals() {
        let task: Task = serde_json::from_value(json!({
            "id": "t1",
            "title": "Write docs",
            "description": "",
            "status": "in_progress",
            "project_id": "p1"
        }))
        .unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert!(task.assignee_id.is_none());
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_task_update_clears_assignee_with_null() {
        let body = serde_json::to_value(TaskUpdate::assignee(None)).unwrap();
        assert_eq!(body, json!({ "assignee_id": null }));

        let body = serde_json::to_value(TaskUpdate::assignee(Some("u1".into()))).unwrap();
        assert_eq!(body, json!({ "assignee_id": "u1" }));
    }

    #[test]
    fn test_task_update_status_only() {
        let body = serde_json::to_value(TaskUpdate::status(TaskStatus::Completed)).unwrap();
        assert_eq!(body, json!({ "status": "completed" }));
    }

    #[test]
    fn test_new_task_sends_explicit_nulls() {
        let body = serde_json::to_value(NewTask {
            title: "T".into(),
            description: "D".into(),
            ..NewTask::default()
        })
        .unwrap();
        assert_eq!(
            body,
            json!({
                "title": "T",
                "description": "D",
                "due_date": null,
                "assignee_id": null,
                "status": "pending"
            })
        );
    }

    #[test]
    fn test_login_response_without_user_id() {
        let resp: LoginResponse = serde_json::from_value(json!({
            "access_token": "a",
            "refresh_token": "r",
            "token_type": "bearer",
            "user": { "email": "a@x.com", "first_name": "A", "last_name": "B", "is_subscribed": false }
        }))
        .unwrap();
        assert_eq!(resp.access_token, "a");
        assert!(resp.user.id.is_none());
    }

    #[test]
    fn test_subscription_status_unknown_value_is_not_active() {
        let active: SubscriptionStatus =
            serde_json::from_value(json!({ "status": "active" })).unwrap();
        let expired: SubscriptionStatus =
            serde_json::from_value(json!({ "status": "expired" })).unwrap();
        let other: SubscriptionStatus =
            serde_json::from_value(json!({ "status": "inactive" })).unwrap();
        assert!(active.is_active());
        assert!(!expired.is_active());
        assert_eq!(other.status, SubscriptionState::Other);
        assert!(!other.is_active());
    }

    #[test]
    fn test_project_with_team_members() {
        let project: Project = serde_json::from_value(json!({
            "id": "p1",
            "title": "T",
            "description": "D",
            "owner_id": "u1",
            "team_members": [
                { "id": "u2", "email": "b@x.com", "first_name": "B", "last_name": "C" }
            ]
        }))
        .unwrap();
        assert_eq!(project.team_members.len(), 1);
        assert_eq!(project.team_members[0].full_name(), "B C");
        assert!(project.tasks.is_none());
    }

    #[test]
    fn test_product_price_label() {
        let mut product = Product {
            id: "prod".into(),
            name: "Pro".into(),
            description: None,
            price: Some(10.0),
            price_id: "price_1".into(),
        };
        assert_eq!(product.price_label(), "$10");
        product.price = Some(9.5);
        assert_eq!(product.price_label(), "$9.50");
    }
}
