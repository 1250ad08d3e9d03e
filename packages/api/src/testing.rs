//! In-memory [`Gateway`] used by the crate's tests.
//!
//! Behaves like a permissive server: it never checks entitlement, never
//! validates status transitions, and records every call so tests can assert
//! which requests an action issued.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use store::{
    CheckoutSession, LoginResponse, LoginUser, NewProject, NewTask, Product, Project,
    ProjectUpdate, RegisterRequest, SubscriptionState, SubscriptionStatus, Task, TaskUpdate, User,
};

use crate::error::ApiError;
use crate::gateway::Gateway;

#[derive(Default)]
struct FakeState {
    calls: Vec<String>,
    next_id: u64,
    users: Vec<User>,
    passwords: HashMap<String, String>,
    projects: Vec<Project>,
    tasks: Vec<Task>,
    members: HashMap<String, Vec<String>>,
    products: Vec<Product>,
    subscription: Option<SubscriptionState>,
    failures: HashMap<&'static str, Option<String>>,
    null_search: bool,
}

impl FakeState {
    fn id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}{}", self.next_id)
    }
}

fn not_found(detail: &str) -> ApiError {
    ApiError::Status {
        status: 404,
        detail: Some(detail.to_string()),
    }
}

#[derive(Default)]
pub(crate) struct FakeGateway {
    state: Mutex<FakeState>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    /// Record a call and apply any configured failure for it.
    fn enter(&self, op: &'static str) -> Result<MutexGuard<'_, FakeState>, ApiError> {
        let mut state = self.lock();
        state.calls.push(op.to_string());
        match state.failures.get(op) {
            Some(detail) => Err(ApiError::Status {
                status: 400,
                detail: detail.clone(),
            }),
            None => Ok(state),
        }
    }

    /// Make every call to `op` fail, optionally with a server detail.
    pub fn fail(&self, op: &'static str, detail: Option<&str>) {
        self.lock().failures.insert(op, detail.map(str::to_string));
    }

    pub fn set_subscription(&self, state: Option<SubscriptionState>) {
        self.lock().subscription = state;
    }

    pub fn set_null_search(&self, null_search: bool) {
        self.lock().null_search = null_search;
    }

    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    pub fn calls_to(&self, op: &str) -> usize {
        self.lock().calls.iter().filter(|c| c.as_str() == op).count()
    }

    pub fn add_user(&self, email: &str, first_name: &str, last_name: &str) -> User {
        let mut state = self.lock();
        let user = User {
            id: state.id("u"),
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        };
        state.users.push(user.clone());
        user
    }

    pub fn add_project(&self, title: &str, description: &str) -> Project {
        let mut state = self.lock();
        let project = Project {
            id: state.id("p"),
            title: title.to_string(),
            description: description.to_string(),
            owner_id: None,
            team_members: Vec::new(),
            tasks: None,
        };
        state.projects.push(project.clone());
        project
    }

    pub fn add_task(&self, project_id: &str, title: &str, status: store::TaskStatus) -> Task {
        let mut state = self.lock();
        let task = Task {
            id: state.id("t"),
            title: title.to_string(),
            description: String::new(),
            status,
            project_id: project_id.to_string(),
            assignee_id: None,
            due_date: None,
            assignee: None,
        };
        state.tasks.push(task.clone());
        task
    }

    pub fn add_product(&self, name: &str, price: f64, price_id: &str) {
        let mut state = self.lock();
        let id = state.id("prod_");
        state.products.push(Product {
            id,
            name: name.to_string(),
            description: None,
            price: Some(price),
            price_id: price_id.to_string(),
        });
    }

    pub fn member_ids(&self, project_id: &str) -> Vec<String> {
        self.lock()
            .members
            .get(project_id)
            .cloned()
            .unwrap_or_default()
    }
}

impl Gateway for FakeGateway {
    async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        let mut state = self.enter("register")?;
        if state.users.iter().any(|u| u.email == request.email) {
            return Err(ApiError::Status {
                status: 400,
                detail: Some("Email already exists".to_string()),
            });
        }
        let user = User {
            id: state.id("u"),
            email: request.email.clone(),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
        };
        state
            .passwords
            .insert(request.email.clone(), request.password.clone());
        state.users.push(user.clone());
        Ok(user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let mut state = self.enter("login")?;
        if state.passwords.get(email).map(String::as_str) != Some(password) {
            return Err(ApiError::Status {
                status: 401,
                detail: Some("Invalid credentials".to_string()),
            });
        }
        let user = state
            .users
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .ok_or_else(|| not_found("User not found"))?;
        let n = state.id("");
        Ok(LoginResponse {
            access_token: format!("access-{n}"),
            refresh_token: format!("refresh-{n}"),
            token_type: Some("bearer".to_string()),
            user: LoginUser {
                id: None,
                email: user.email,
                first_name: user.first_name,
                last_name: user.last_name,
            },
        })
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        Ok(self.enter("list_projects")?.projects.clone())
    }

    async fn create_project(&self, project: &NewProject) -> Result<Project, ApiError> {
        let mut state = self.enter("create_project")?;
        let created = Project {
            id: state.id("p"),
            title: project.title.clone(),
            description: project.description.clone(),
            owner_id: None,
            team_members: Vec::new(),
            tasks: None,
        };
        state.projects.push(created.clone());
        Ok(created)
    }

    async fn get_project(&self, project_id: &str) -> Result<Project, ApiError> {
        self.enter("get_project")?
            .projects
            .iter()
            .find(|p| p.id == project_id)
            .cloned()
            .ok_or_else(|| not_found("Project not found"))
    }

    async fn update_project(
        &self,
        project_id: &str,
        update: &ProjectUpdate,
    ) -> Result<Project, ApiError> {
        let mut state = self.enter("update_project")?;
        let project = state
            .projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or_else(|| not_found("Project not found"))?;
        project.title = update.title.clone();
        project.description = update.description.clone();
        Ok(project.clone())
    }

    async fn delete_project(&self, project_id: &str) -> Result<(), ApiError> {
        let mut state = self.enter("delete_project")?;
        let before = state.projects.len();
        state.projects.retain(|p| p.id != project_id);
        if state.projects.len() == before {
            return Err(not_found("Project not found"));
        }
        state.tasks.retain(|t| t.project_id != project_id);
        Ok(())
    }

    async fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>, ApiError> {
        Ok(self
            .enter("list_tasks")?
            .tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn create_task(&self, project_id: &str, task: &NewTask) -> Result<Task, ApiError> {
        let mut state = self.enter("create_task")?;
        // The server stores a naive timestamp and echoes it without an offset.
        let due_date = task
            .due_date
            .as_deref()
            .and_then(store::due_date::parse)
            .map(|d| format!("{d}T00:00:00"));
        let created = Task {
            id: state.id("t"),
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            project_id: project_id.to_string(),
            assignee_id: task.assignee_id.clone(),
            due_date,
            assignee: None,
        };
        state.tasks.push(created.clone());
        Ok(created)
    }

    async fn update_task(
        &self,
        project_id: &str,
        task_id: &str,
        update: &TaskUpdate,
    ) -> Result<Task, ApiError> {
        let mut state = self.enter("update_task")?;
        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id && t.project_id == project_id)
            .ok_or_else(|| not_found("Task not found"))?;
        if let Some(title) = &update.title {
            task.title = title.clone();
        }
        if let Some(description) = &update.description {
            task.description = description.clone();
        }
        if let Some(status) = update.status {
            task.status = status;
        }
        if let Some(assignee_id) = &update.assignee_id {
            task.assignee_id = assignee_id.clone();
        }
        if let Some(due_date) = &update.due_date {
            task.due_date = due_date.clone();
        }
        Ok(task.clone())
    }

    async fn delete_task(&self, project_id: &str, task_id: &str) -> Result<(), ApiError> {
        let mut state = self.enter("delete_task")?;
        state
            .tasks
            .retain(|t| !(t.id == task_id && t.project_id == project_id));
        Ok(())
    }

    async fn list_members(&self, project_id: &str) -> Result<Vec<User>, ApiError> {
        let state = self.enter("list_members")?;
        let ids: HashSet<&String> = state
            .members
            .get(project_id)
            .map(|m| m.iter().collect())
            .unwrap_or_default();
        Ok(state
            .users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn add_member(&self, project_id: &str, user_id: &str) -> Result<(), ApiError> {
        let mut state = self.enter("add_member")?;
        if !state.users.iter().any(|u| u.id == user_id) {
            return Err(not_found("User not found"));
        }
        state
            .members
            .entry(project_id.to_string())
            .or_default()
            .push(user_id.to_string());
        Ok(())
    }

    async fn remove_member(&self, project_id: &str, user_id: &str) -> Result<(), ApiError> {
        let mut state = self.enter("remove_member")?;
        let members = state.members.entry(project_id.to_string()).or_default();
        let before = members.len();
        members.retain(|id| id != user_id);
        if members.len() == before {
            return Err(ApiError::Status {
                status: 400,
                detail: Some("User is not a team member".to_string()),
            });
        }
        Ok(())
    }

    async fn search_user_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let state = self.enter("search_user_by_email")?;
        match state.users.iter().find(|u| u.email == email) {
            Some(user) => Ok(Some(user.clone())),
            None if state.null_search => Ok(None),
            None => Err(not_found("User not found")),
        }
    }

    async fn subscription_status(&self) -> Result<SubscriptionStatus, ApiError> {
        let state = self.enter("subscription_status")?;
        state
            .subscription
            .map(|status| SubscriptionStatus { status })
            .ok_or(ApiError::Status {
                status: 503,
                detail: None,
            })
    }

    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        Ok(self.enter("list_products")?.products.clone())
    }

    async fn create_checkout_session(&self, price_id: &str) -> Result<CheckoutSession, ApiError> {
        self.enter("create_checkout_session")?;
        Ok(CheckoutSession {
            url: format!("https://checkout.example.com/{price_id}"),
        })
    }
}
