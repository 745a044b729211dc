//! Backend API Client
//!
//! REST bindings organized by domain. Every todo request carries the
//! session's bearer token; auth requests never do.

mod auth;
mod todo;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{DoneUpdate, ErrorBody, LoginResponse, NewTodo, RegisterRequest, RegisterResponse, TodoPayload, TodoUpdate};
use crate::session::Session;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const TODO_PATH: &str = "/api/todo";

// ========================
// Seams
// ========================

#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError>;
    async fn register(&self, request: &RegisterRequest<'_>) -> Result<RegisterResponse, ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait TodoApi {
    async fn fetch_todos(&self) -> Result<TodoPayload, ApiError>;
    async fn create_todo(&self, todo: &NewTodo) -> Result<(), ApiError>;
    async fn update_todo(&self, update: &TodoUpdate) -> Result<(), ApiError>;
    async fn set_done(&self, update: &DoneUpdate) -> Result<(), ApiError>;
    async fn delete_todo(&self, id: &str) -> Result<(), ApiError>;
}

// ========================
// Client
// ========================

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: AppConfig,
    session: Session,
}

impl ApiClient {
    pub fn new(config: AppConfig, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session,
        }
    }

    /// Request without credentials
    fn anonymous(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.config.endpoint(path))
    }

    /// Request carrying the session's bearer token when there is one
    fn authorized(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.anonymous(method, path);
        match self.session.bearer() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Send and turn non-2xx responses into [`ApiError::Server`].
async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = builder.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body);
    log::warn!("[API] {} {:?}", status.as_u16(), message);
    Err(ApiError::Server { status: status.as_u16(), message })
}

async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let response = send(builder).await?;
    Ok(response.json::<T>().await?)
}

/// `error` field of a JSON error body, if the body is one.
pub(crate) fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.error)
}
