//! Todo Endpoints
//!
//! All five operations share `/api/todo` and differ by verb.

use reqwest::Method;

use super::{send, send_json, ApiClient, TodoApi, TODO_PATH};
use crate::error::ApiError;
use crate::models::{DoneUpdate, IdArgs, NewTodo, TodoPayload, TodoUpdate};

impl TodoApi for ApiClient {
    async fn fetch_todos(&self) -> Result<TodoPayload, ApiError> {
        send_json(self.authorized(Method::GET, TODO_PATH)).await
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<(), ApiError> {
        send(self.authorized(Method::PUT, TODO_PATH).json(todo)).await?;
        Ok(())
    }

    async fn update_todo(&self, update: &TodoUpdate) -> Result<(), ApiError> {
        send(self.authorized(Method::PATCH, TODO_PATH).json(update)).await?;
        Ok(())
    }

    async fn set_done(&self, update: &DoneUpdate) -> Result<(), ApiError> {
        send(self.authorized(Method::PATCH, TODO_PATH).json(update)).await?;
        Ok(())
    }

    async fn delete_todo(&self, id: &str) -> Result<(), ApiError> {
        let body = IdArgs { id: id.to_string() };
        send(self.authorized(Method::DELETE, TODO_PATH).json(&body)).await?;
        Ok(())
    }
}
