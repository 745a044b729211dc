//! Auth Endpoints

use reqwest::Method;

use super::{send, send_json, ApiClient, AuthApi, LOGIN_PATH, REGISTER_PATH};
use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

impl AuthApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest { email, password };
        send_json(self.anonymous(Method::POST, LOGIN_PATH).json(&body)).await
    }

    async fn register(&self, request: &RegisterRequest<'_>) -> Result<RegisterResponse, ApiError> {
        let response = send(self.anonymous(Method::POST, REGISTER_PATH).json(request)).await?;
        // A success body without a usable `message` still counts as success
        let text = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str(&text).unwrap_or_default())
    }
}
