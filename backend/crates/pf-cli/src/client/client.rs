use crate::{CliClientResult, ClientError};

use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::Value;

/// Project fields sent on create and update
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFields {
    pub title: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roblox_link: Option<String>,
}

/// HTTP client for the pf-server REST API
pub struct Client {
    pub base_url: String,
    pub token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `server_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `route_prefix` - Path segment every route is mounted under
    /// * `token` - Optional bearer token for project mutations
    pub fn new(server_url: &str, route_prefix: &str, token: Option<&str>) -> Self {
        Self {
            base_url: format!(
                "{}/{}",
                server_url.trim_end_matches('/'),
                route_prefix.trim_matches('/')
            ),
            token: token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Build a request with the bearer token when one is set
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute request and turn `{error}` responses into [`ClientError::Api`]
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|body| body.get("error").and_then(Value::as_str).map(String::from))
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        Ok(serde_json::from_str(&text)?)
    }

    // =========================================================================
    // Account Operations
    // =========================================================================

    pub async fn signup(&self, email: &str, password: &str) -> CliClientResult<Value> {
        let body = serde_json::json!({ "email": email, "password": password });
        let req = self.request(Method::POST, "/signup").json(&body);
        self.execute(req).await
    }

    /// Log in and return the session, including its `accessToken`
    pub async fn login(&self, email: &str, password: &str) -> CliClientResult<Value> {
        let body = serde_json::json!({ "email": email, "password": password });
        let req = self.request(Method::POST, "/login").json(&body);
        self.execute(req).await
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// List all projects
    pub async fn list_projects(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/projects");
        self.execute(req).await
    }

    /// Get a project by ID
    pub async fn get_project(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/projects/{}", id));
        self.execute(req).await
    }

    pub async fn create_project(&self, fields: &ProjectFields) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/projects").json(fields);
        self.execute(req).await
    }

    /// Replace a project's mutable fields
    pub async fn update_project(&self, id: &str, fields: &ProjectFields) -> CliClientResult<Value> {
        let req = self
            .request(Method::PUT, &format!("/projects/{}", id))
            .json(fields);
        self.execute(req).await
    }

    pub async fn delete_project(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/projects/{}", id));
        self.execute(req).await
    }
}
