//! # HTTP client for the remote API
//!
//! [`ApiClient`] wraps a `reqwest::Client` together with the configured base
//! URL and, once signed in, the session's access token. The token is attached
//! as `Authorization: Bearer <token>` to every request built by the client.
//!
//! The client is cheap to clone (`reqwest::Client` is reference counted), so
//! the UI keeps one unauthenticated instance in context and derives a
//! session-bound copy with [`ApiClient::with_session`] whenever it issues a
//! request.
//!
//! ## Responses
//!
//! Every non-2xx response is turned into [`ApiError::Status`] carrying the
//! server's `detail` string when there is one. Successful bodies are decoded
//! with `serde_json`; endpoints whose body the client does not need
//! (deletes, member changes) discard it.

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{
    ApiConfig, CheckoutSession, LoginResponse, NewProject, NewTask, Product, Project,
    ProjectUpdate, RegisterRequest, Session, SubscriptionStatus, Task, TaskUpdate, User,
};

use crate::error::ApiError;
use crate::gateway::Gateway;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
}

#[derive(Serialize)]
struct CheckoutRequest<'a> {
    price_id: &'a str,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: None,
        }
    }

    /// A copy of this client that authenticates as `session`.
    pub fn with_session(mut self, session: Option<&Session>) -> Self {
        self.access_token = session.map(|s| s.access_token.clone());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "api request");
        let builder = self.http.request(method, self.url(path));
        match &self.access_token {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn send_bytes(builder: RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "api request rejected");
            return Err(ApiError::from_body(status.as_u16(), &body));
        }
        Ok(body.to_vec())
    }

    async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        let body = Self::send_bytes(builder).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn send_empty(builder: RequestBuilder) -> Result<(), ApiError> {
        Self::send_bytes(builder).await.map(|_| ())
    }
}

impl Gateway for ApiClient {
    async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        Self::send_json(self.request(Method::POST, "/register").json(request)).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let form = [
            ("username", email),
            ("password", password),
            ("grant_type", "password"),
        ];
        Self::send_json(self.request(Method::POST, "/login").form(&form)).await
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        Self::send_json(self.request(Method::GET, "/api/projects")).await
    }

    async fn create_project(&self, project: &NewProject) -> Result<Project, ApiError> {
        Self::send_json(self.request(Method::POST, "/api/projects").json(project)).await
    }

    async fn get_project(&self, project_id: &str) -> Result<Project, ApiError> {
        let path = format!("/api/projects/{project_id}");
        Self::send_json(self.request(Method::GET, &path)).await
    }

    async fn update_project(
        &self,
        project_id: &str,
        update: &ProjectUpdate,
    ) -> Result<Project, ApiError> {
        let path = format!("/api/projects/{project_id}");
        Self::send_json(self.request(Method::PUT, &path).json(update)).await
    }

    async fn delete_project(&self, project_id: &str) -> Result<(), ApiError> {
        let path = format!("/api/projects/{project_id}");
        Self::send_empty(self.request(Method::DELETE, &path)).await
    }

    async fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>, ApiError> {
        let path = format!("/api/projects/{project_id}/tasks");
        Self::send_json(self.request(Method::GET, &path)).await
    }

    async fn create_task(&self, project_id: &str, task: &NewTask) -> Result<Task, ApiError> {
        let path = format!("/api/projects/{project_id}/tasks");
        Self::send_json(self.request(Method::POST, &path).json(task)).await
    }

    async fn update_task(
        &self,
        project_id: &str,
        task_id: &str,
        update: &TaskUpdate,
    ) -> Result<Task, ApiError> {
        let path = format!("/api/projects/{project_id}/tasks/{task_id}");
        Self::send_json(self.request(Method::PUT, &path).json(update)).await
    }

    async fn delete_task(&self, project_id: &str, task_id: &str) -> Result<(), ApiError> {
        let path = format!("/api/projects/{project_id}/tasks/{task_id}");
        Self::send_empty(self.request(Method::DELETE, &path)).await
    }

    async fn list_members(&self, project_id: &str) -> Result<Vec<User>, ApiError> {
        let path = format!("/api/projects/{project_id}/members");
        Self::send_json(self.request(Method::GET, &path)).await
    }

    async fn add_member(&self, project_id: &str, user_id: &str) -> Result<(), ApiError> {
        let path = format!("/api/projects/{project_id}/members/{user_id}");
        Self::send_empty(self.request(Method::POST, &path)).await
    }

    async fn remove_member(&self, project_id: &str, user_id: &str) -> Result<(), ApiError> {
        let path = format!("/api/projects/{project_id}/members/{user_id}");
        Self::send_empty(self.request(Method::DELETE, &path)).await
    }

    async fn search_user_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let builder = self
            .request(Method::GET, "/api/users/search")
            .query(&[("email", email)]);
        Self::send_json(builder).await
    }

    async fn subscription_status(&self) -> Result<SubscriptionStatus, ApiError> {
        Self::send_json(self.request(Method::GET, "/api/subscription-status")).await
    }

    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        Self::send_json(self.request(Method::GET, "/api/products")).await
    }

    async fn create_checkout_session(&self, price_id: &str) -> Result<CheckoutSession, ApiError> {
        let body = CheckoutRequest { price_id };
        Self::send_json(
            self.request(Method::POST, "/api/create-checkout-session")
                .json(&body),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: base_url.to_string(),
        })
    }

    #[test]
    fn test_url_ignores_trailing_slash() {
        assert_eq!(
            client("http://localhost:8000/").url("/api/projects"),
            "http://localhost:8000/api/projects"
        );
        assert_eq!(
            client("http://localhost:8000").url("/login"),
            "http://localhost:8000/login"
        );
    }

    #[test]
    fn test_with_session_sets_and_clears_token() {
        let session = Session::new("access", "refresh");
        let signed_in = client("http://x").with_session(Some(&session));
        assert!(signed_in.is_authenticated());

        let signed_out = signed_in.with_session(None);
        assert!(!signed_out.is_authenticated());
    }

    #[test]
    fn test_bearer_header_is_attached() {
        let session = Session::new("abc", "r");
        let request = client("http://x")
            .with_session(Some(&session))
            .request(Method::GET, "/api/projects")
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Bearer abc"
        );
        assert_eq!(request.url().as_str(), "http://x/api/projects");
    }

    #[test]
    fn test_unauthenticated_request_has_no_header() {
        let request = client("http://x")
            .request(Method::POST, "/register")
            .build()
            .unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_login_is_form_encoded() {
        let form = [
            ("username", "a@x.com"),
            ("password", "Abc12345"),
            ("grant_type", "password"),
        ];
        let request = client("http://x")
            .request(Method::POST, "/login")
            .form(&form)
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get(reqwest::header::CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(
            std::str::from_utf8(body).unwrap(),
            "username=a%40x.com&password=Abc12345&grant_type=password"
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_uses_fallback() {
        // Port 9 (discard) is closed on test machines.
        let err = client("http://127.0.0.1:9").list_projects().await.unwrap_err();
        assert!(err.detail().is_none());
        assert_eq!(err.user_message("Failed to fetch projects"), "Failed to fetch projects");
    }
}
