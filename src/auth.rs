//! Login and Registration Flows

use crate::api::AuthApi;
use crate::models::RegisterRequest;
use crate::session::Session;

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTER_FAILED: &str = "Registration failed";
pub const REGISTERED: &str = "Registered successfully";

/// Log in and start the session. The error is the text to show.
pub async fn login<A: AuthApi>(api: &A, session: &Session, email: &str, password: &str) -> Result<(), String> {
    match api.login(email, password).await {
        Ok(response) => {
            session.login(&response.token);
            Ok(())
        }
        Err(e) => {
            log::warn!("[AUTH] Login failed: {}", e);
            Err(e.message_or(LOGIN_FAILED))
        }
    }
}

/// Create an account. Ok carries the success message to show.
pub async fn register<A: AuthApi>(api: &A, request: &RegisterRequest<'_>) -> Result<String, String> {
    match api.register(request).await {
        Ok(response) => Ok(response
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| REGISTERED.to_string())),
        Err(e) => {
            log::warn!("[AUTH] Registration failed: {}", e);
            Err(e.message_or(REGISTER_FAILED))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::{LoginResponse, RegisterResponse};
    use crate::session::{MemoryStorage, TokenStorage};
    use std::sync::Arc;

    struct FakeAuth {
        login: Result<&'static str, ApiError>,
        register: Result<Option<&'static str>, ApiError>,
    }

    impl AuthApi for FakeAuth {
        async fn login(&self, _email: &str, _password: &str) -> Result<LoginResponse, ApiError> {
            self.login.clone().map(|token| LoginResponse { token: token.to_string() })
        }

        async fn register(&self, _request: &RegisterRequest<'_>) -> Result<RegisterResponse, ApiError> {
            self.register.clone().map(|message| RegisterResponse { message: message.map(str::to_string) })
        }
    }

    fn rejected(message: Option<&str>) -> ApiError {
        ApiError::Server { status: 400, message: message.map(str::to_string) }
    }

    fn request() -> RegisterRequest<'static> {
        RegisterRequest {
            email: "a@b.com",
            password: "secret1",
            first_name: "Ada",
            last_name: "Lovelace",
        }
    }

    #[tokio::test]
    async fn test_login_success_starts_session() {
        let storage = Arc::new(MemoryStorage::default());
        let session = Session::new(storage.clone());
        let api = FakeAuth { login: Ok("jwt"), register: Ok(None) };

        login(&api, &session, "a@b.com", "pw").await.unwrap();
        assert_eq!(storage.load().as_deref(), Some("jwt"));
        assert_eq!(session.bearer().as_deref(), Some("jwt"));
    }

    #[tokio::test]
    async fn test_login_failure_shows_server_error() {
        let storage = Arc::new(MemoryStorage::default());
        let session = Session::new(storage.clone());
        let api = FakeAuth { login: Err(rejected(Some("Invalid credentials"))), register: Ok(None) };

        let err = login(&api, &session, "a@b.com", "wrong").await.unwrap_err();
        assert_eq!(err, "Invalid credentials");
        assert_eq!(storage.load(), None);
        assert!(session.bearer().is_none());
    }

    #[tokio::test]
    async fn test_login_failure_fallback() {
        let session = Session::new(Arc::new(MemoryStorage::default()));
        let api = FakeAuth { login: Err(ApiError::Network("offline".into())), register: Ok(None) };

        let err = login(&api, &session, "a@b.com", "pw").await.unwrap_err();
        assert_eq!(err, LOGIN_FAILED);
    }

    #[tokio::test]
    async fn test_register_messages() {
        let api = FakeAuth { login: Ok("unused"), register: Ok(Some("Welcome aboard")) };
        assert_eq!(register(&api, &request()).await.unwrap(), "Welcome aboard");

        let api = FakeAuth { login: Ok("unused"), register: Ok(None) };
        assert_eq!(register(&api, &request()).await.unwrap(), REGISTERED);

        let api = FakeAuth { login: Ok("unused"), register: Err(rejected(Some("Email already registered"))) };
        assert_eq!(register(&api, &request()).await.unwrap_err(), "Email already registered");

        let api = FakeAuth { login: Ok("unused"), register: Err(rejected(None)) };
        assert_eq!(register(&api, &request()).await.unwrap_err(), REGISTER_FAILED);
    }
}
