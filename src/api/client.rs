use reqwest::blocking::Client;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ErrorCode, TasklyError};
use crate::models::{AuthResponse, ErrorBody, MessageResponse, Task, TaskCreate, TaskUpdate, User};

const FALLBACK_ERROR: &str = "An error occurred";

/// Gateway to the remote resource service.
///
/// Every call goes through [`dispatch`](Self::dispatch): bearer token attached
/// when present, JSON content type always, one attempt per call (no retry, no
/// client-side timeout), and non-2xx responses normalized into a single
/// message-carrying error. Callers never see HTTP status codes.
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// `token` is the credential captured from the session store at
    /// construction; commands rebuild the client after login/signup so the
    /// two never diverge.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    fn dispatch<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        failure_code: ErrorCode,
        fallback: &str,
    ) -> Result<T, TasklyError> {
        let mut req = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header("Content-Type", "application/json");
        if let Some(ref token) = self.token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().map_err(|e| TasklyError::network(e.to_string()))?;

        if !resp.status().is_success() {
            let detail = resp
                .json::<ErrorBody>()
                .ok()
                .and_then(|b| b.detail)
                .unwrap_or_else(|| fallback.to_string());
            return Err(TasklyError::new(failure_code, detail));
        }

        resp.json::<T>()
            .map_err(|e| TasklyError::new(failure_code, format!("Malformed response: {e}")))
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, TasklyError> {
        self.dispatch::<(), T>(
            Method::GET,
            path,
            None,
            ErrorCode::RequestFailed,
            FALLBACK_ERROR,
        )
    }

    fn post<T: DeserializeOwned>(&self, path: &str) -> Result<T, TasklyError> {
        self.dispatch::<(), T>(
            Method::POST,
            path,
            None,
            ErrorCode::RequestFailed,
            FALLBACK_ERROR,
        )
    }

    // ── auth endpoints ──────────────────────────────────────────────

    pub fn sign_in(&self, email: &str, password: &str) -> Result<AuthResponse, TasklyError> {
        self.dispatch(
            Method::POST,
            "/auth/sign-in",
            Some(&serde_json::json!({ "email": email, "password": password })),
            ErrorCode::AuthFailed,
            "Invalid email or password",
        )
    }

    pub fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthResponse, TasklyError> {
        self.dispatch(
            Method::POST,
            "/auth/sign-up",
            Some(&serde_json::json!({ "email": email, "password": password, "name": name })),
            ErrorCode::AuthFailed,
            "Signup failed",
        )
    }

    /// Identity lookup for the current bearer. The service returns the user
    /// object unwrapped here, unlike sign-in/sign-up.
    pub fn me(&self) -> Result<User, TasklyError> {
        self.dispatch::<(), User>(
            Method::GET,
            "/auth/me",
            None,
            ErrorCode::SessionInvalid,
            FALLBACK_ERROR,
        )
    }

    // ── task endpoints ──────────────────────────────────────────────

    pub fn list_tasks(&self) -> Result<Vec<Task>, TasklyError> {
        self.get("/tasks")
    }

    pub fn get_task(&self, id: i64) -> Result<Task, TasklyError> {
        self.get(&format!("/tasks/{id}"))
    }

    pub fn create_task(&self, data: &TaskCreate) -> Result<Task, TasklyError> {
        self.dispatch(
            Method::POST,
            "/tasks",
            Some(data),
            ErrorCode::RequestFailed,
            FALLBACK_ERROR,
        )
    }

    pub fn update_task(&self, id: i64, data: &TaskUpdate) -> Result<Task, TasklyError> {
        self.dispatch(
            Method::PUT,
            &format!("/tasks/{id}"),
            Some(data),
            ErrorCode::RequestFailed,
            FALLBACK_ERROR,
        )
    }

    pub fn delete_task(&self, id: i64) -> Result<MessageResponse, TasklyError> {
        self.dispatch::<(), MessageResponse>(
            Method::DELETE,
            &format!("/tasks/{id}"),
            None,
            ErrorCode::RequestFailed,
            FALLBACK_ERROR,
        )
    }

    pub fn mark_complete(&self, id: i64) -> Result<Task, TasklyError> {
        self.post(&format!("/tasks/{id}/complete"))
    }

    pub fn mark_incomplete(&self, id: i64) -> Result<Task, TasklyError> {
        self.post(&format!("/tasks/{id}/incomplete"))
    }
}
