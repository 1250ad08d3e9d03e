//! The [`Gateway`] trait: every call the client makes to the remote API.
//!
//! [`crate::ApiClient`] is the production implementation. Views never talk to
//! it directly; they go through [`crate::actions`], which are generic over
//! this trait so the fetch-then-refetch flows can be exercised against an
//! in-memory fake.
//!
//! No method checks the entitlement. Authorization is the server's call.

use std::future::Future;

use store::{
    CheckoutSession, LoginResponse, NewProject, NewTask, Product, Project, ProjectUpdate,
    RegisterRequest, SubscriptionStatus, Task, TaskUpdate, User,
};

use crate::error::ApiError;

pub trait Gateway {
    // Authentication
    fn register(
        &self,
        request: &RegisterRequest,
    ) -> impl Future<Output = Result<User, ApiError>>;
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<LoginResponse, ApiError>>;

    // Projects
    fn list_projects(&self) -> impl Future<Output = Result<Vec<Project>, ApiError>>;
    fn create_project(
        &self,
        project: &NewProject,
    ) -> impl Future<Output = Result<Project, ApiError>>;
    fn get_project(&self, project_id: &str) -> impl Future<Output = Result<Project, ApiError>>;
    fn update_project(
        &self,
        project_id: &str,
        update: &ProjectUpdate,
    ) -> impl Future<Output = Result<Project, ApiError>>;
    fn delete_project(&self, project_id: &str) -> impl Future<Output = Result<(), ApiError>>;

    // Tasks
    fn list_tasks(&self, project_id: &str) -> impl Future<Output = Result<Vec<Task>, ApiError>>;
    fn create_task(
        &self,
        project_id: &str,
        task: &NewTask,
    ) -> impl Future<Output = Result<Task, ApiError>>;
    fn update_task(
        &self,
        project_id: &str,
        task_id: &str,
        update: &TaskUpdate,
    ) -> impl Future<Output = Result<Task, ApiError>>;
    fn delete_task(
        &self,
        project_id: &str,
        task_id: &str,
    ) -> impl Future<Output = Result<(), ApiError>>;

    // Members
    fn list_members(&self, project_id: &str) -> impl Future<Output = Result<Vec<User>, ApiError>>;
    fn add_member(
        &self,
        project_id: &str,
        user_id: &str,
    ) -> impl Future<Output = Result<(), ApiError>>;
    fn remove_member(
        &self,
        project_id: &str,
        user_id: &str,
    ) -> impl Future<Output = Result<(), ApiError>>;
    fn search_user_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, ApiError>>;

    // Subscription
    fn subscription_status(&self) -> impl Future<Output = Result<SubscriptionStatus, ApiError>>;
    fn list_products(&self) -> impl Future<Output = Result<Vec<Product>, ApiError>>;
    fn create_checkout_session(
        &self,
        price_id: &str,
    ) -> impl Future<Output = Result<CheckoutSession, ApiError>>;
}
