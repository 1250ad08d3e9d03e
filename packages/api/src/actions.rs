//! # User actions
//!
//! Each function here is one thing a user can do from a view. They share a
//! shape: issue the request through a [`Gateway`], then on success re-fetch
//! the list the view displays and hand it back. Nothing is updated
//! optimistically, so the returned data is always what the server holds.
//!
//! Failures are reduced to an [`ActionError`] carrying the server detail or
//! a fixed fallback. Task mutations are the exception: they fail silently
//! (logged, `None` returned) and the view keeps what it had.
//!
//! No action consults the entitlement. The UI decides which actions to
//! offer; the server decides which to allow.

use store::{
    LoginUser, NewProject, NewTask, Product, Project, ProjectUpdate, RegisterRequest, Session,
    Task, TaskStatus, TaskUpdate, TokenStore, User,
};

use crate::error::{ActionError, ApiError};
use crate::gateway::Gateway;

pub const FETCH_PROJECTS_FAILED: &str = "Failed to fetch projects";
pub const CREATE_PROJECT_FAILED: &str = "Failed to create project";
pub const DELETE_PROJECT_FAILED: &str = "Failed to delete project";
pub const UPDATE_PROJECT_FAILED: &str = "Failed to update project";
pub const FETCH_PROJECT_FAILED: &str = "Failed to fetch project data";
pub const ADD_MEMBER_FAILED: &str = "Failed to add member";
pub const REMOVE_MEMBER_FAILED: &str = "Failed to remove member";
pub const REGISTER_FAILED: &str = "Registration failed";
pub const LOGIN_FAILED: &str = "Login failed";
pub const LOAD_PLANS_FAILED: &str = "Failed to load subscription plans";
pub const CHECKOUT_FAILED: &str = "Failed to initiate subscription";

/// Everything the project detail view shows.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectDetail {
    pub project: Project,
    pub tasks: Vec<Task>,
    pub members: Vec<User>,
}

fn reduce<T>(result: Result<T, ApiError>, fallback: &str) -> Result<T, ActionError> {
    result.map_err(|err| ActionError::from_api(err, fallback))
}

// Authentication

pub async fn register<G: Gateway>(
    gateway: &G,
    request: &RegisterRequest,
) -> Result<User, ActionError> {
    reduce(gateway.register(request).await, REGISTER_FAILED)
}

/// Sign in and persist both tokens.
pub async fn login<G: Gateway, S: TokenStore>(
    gateway: &G,
    tokens: &S,
    email: &str,
    password: &str,
) -> Result<(Session, LoginUser), ActionError> {
    let response = reduce(gateway.login(email, password).await, LOGIN_FAILED)?;
    let session = Session::new(response.access_token, response.refresh_token);
    tokens.save(&session);
    tracing::info!(email = %response.user.email, "signed in");
    Ok((session, response.user))
}

/// Forget the session. Always succeeds.
pub fn logout<S: TokenStore>(tokens: &S) {
    tokens.clear();
    tracing::info!("signed out");
}

// Projects

pub async fn load_projects<G: Gateway>(gateway: &G) -> Result<Vec<Project>, ActionError> {
    reduce(gateway.list_projects().await, FETCH_PROJECTS_FAILED)
}

pub async fn create_project<G: Gateway>(
    gateway: &G,
    project: &NewProject,
) -> Result<Vec<Project>, ActionError> {
    reduce(gateway.create_project(project).await, CREATE_PROJECT_FAILED)?;
    load_projects(gateway).await
}

pub async fn delete_project<G: Gateway>(
    gateway: &G,
    project_id: &str,
) -> Result<Vec<Project>, ActionError> {
    reduce(gateway.delete_project(project_id).await, DELETE_PROJECT_FAILED)?;
    load_projects(gateway).await
}

/// Fetch the project, its tasks and its members concurrently. Any failure
/// fails the whole load.
pub async fn load_project_detail<G: Gateway>(
    gateway: &G,
    project_id: &str,
) -> Result<ProjectDetail, ActionError> {
    let joined = futures::try_join!(
        gateway.get_project(project_id),
        gateway.list_tasks(project_id),
        gateway.list_members(project_id),
    );
    let (project, tasks, members) = reduce(joined, FETCH_PROJECT_FAILED)?;
    Ok(ProjectDetail {
        project,
        tasks,
        members,
    })
}

pub async fn update_project<G: Gateway>(
    gateway: &G,
    project_id: &str,
    update: &ProjectUpdate,
) -> Result<ProjectDetail, ActionError> {
    reduce(
        gateway.update_project(project_id, update).await,
        UPDATE_PROJECT_FAILED,
    )?;
    load_project_detail(gateway, project_id).await
}

// Tasks

async fn after_task_mutation<G: Gateway, T>(
    gateway: &G,
    project_id: &str,
    what: &str,
    result: Result<T, ApiError>,
) -> Option<ProjectDetail> {
    if let Err(err) = result {
        tracing::error!(error = %err, project_id, "{what} failed");
        return None;
    }
    match load_project_detail(gateway, project_id).await {
        Ok(detail) => Some(detail),
        Err(err) => {
            tracing::error!(error = %err, project_id, "re-fetch after {what} failed");
            None
        }
    }
}

/// Any status may replace any other.
pub async fn set_task_status<G: Gateway>(
    gateway: &G,
    project_id: &str,
    task_id: &str,
    status: TaskStatus,
) -> Option<ProjectDetail> {
    let result = gateway
        .update_task(project_id, task_id, &TaskUpdate::status(status))
        .await;
    after_task_mutation(gateway, project_id, "status change", result).await
}

/// `None` clears the assignee.
pub async fn set_task_assignee<G: Gateway>(
    gateway: &G,
    project_id: &str,
    task_id: &str,
    assignee_id: Option<String>,
) -> Option<ProjectDetail> {
    let result = gateway
        .update_task(project_id, task_id, &TaskUpdate::assignee(assignee_id))
        .await;
    after_task_mutation(gateway, project_id, "assignment", result).await
}

pub async fn create_task<G: Gateway>(
    gateway: &G,
    project_id: &str,
    task: &NewTask,
) -> Option<ProjectDetail> {
    let result = gateway.create_task(project_id, task).await;
    after_task_mutation(gateway, project_id, "task creation", result).await
}

pub async fn update_task<G: Gateway>(
    gateway: &G,
    project_id: &str,
    task_id: &str,
    update: &TaskUpdate,
) -> Option<ProjectDetail> {
    let result = gateway.update_task(project_id, task_id, update).await;
    after_task_mutation(gateway, project_id, "task update", result).await
}

pub async fn delete_task<G: Gateway>(
    gateway: &G,
    project_id: &str,
    task_id: &str,
) -> Option<ProjectDetail> {
    let result = gateway.delete_task(project_id, task_id).await;
    after_task_mutation(gateway, project_id, "task deletion", result).await
}

// Members

/// Look the user up by email, add them, then re-fetch the detail.
///
/// A lookup that finds nobody stops here: no add, no re-fetch.
pub async fn add_member_by_email<G: Gateway>(
    gateway: &G,
    project_id: &str,
    email: &str,
) -> Result<ProjectDetail, ActionError> {
    let user = reduce(
        gateway.search_user_by_email(email.trim()).await,
        ADD_MEMBER_FAILED,
    )?
    .ok_or_else(|| ActionError::new(ADD_MEMBER_FAILED))?;
    reduce(
        gateway.add_member(project_id, &user.id).await,
        ADD_MEMBER_FAILED,
    )?;
    load_project_detail(gateway, project_id).await
}

pub async fn remove_member<G: Gateway>(
    gateway: &G,
    project_id: &str,
    user_id: &str,
) -> Result<ProjectDetail, ActionError> {
    reduce(
        gateway.remove_member(project_id, user_id).await,
        REMOVE_MEMBER_FAILED,
    )?;
    load_project_detail(gateway, project_id).await
}

// Subscription

pub async fn load_products<G: Gateway>(gateway: &G) -> Result<Vec<Product>, ActionError> {
    reduce(gateway.list_products().await, LOAD_PLANS_FAILED)
}

/// Start a checkout for `price_id` and return the URL to redirect to.
pub async fn start_checkout<G: Gateway>(
    gateway: &G,
    price_id: &str,
) -> Result<String, ActionError> {
    let session = reduce(
        gateway.create_checkout_session(price_id).await,
        CHECKOUT_FAILED,
    )?;
    Ok(session.url)
}
