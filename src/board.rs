//! Todo Board Logic
//!
//! Form state and the mutate-then-refetch flows behind the todo page.
//! Nothing here touches the DOM; views call these and write the results
//! into the board store.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::api::TodoApi;
use crate::config::DEFAULT_NOTE_COLOR;
use crate::error::ApiError;
use crate::models::{DoneUpdate, NewTodo, TodoItem, TodoPayload, TodoUpdate, UserInfo};

/// What the board shows. Empty on fetch failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardData {
    pub owner: Option<UserInfo>,
    pub todos: Vec<TodoItem>,
}

impl From<TodoPayload> for BoardData {
    fn from(payload: TodoPayload) -> Self {
        Self {
            owner: Some(payload.user),
            todos: payload.todos,
        }
    }
}

// ========================
// Form State
// ========================

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Add,
    /// Editing the item with this id
    Edit(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TodoForm {
    pub title: String,
    pub description: String,
    pub color: String,
    pub mode: FormMode,
}

impl Default for TodoForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            color: DEFAULT_NOTE_COLOR.to_string(),
            mode: FormMode::Add,
        }
    }
}

impl TodoForm {
    /// Pre-filled form for editing `item`
    pub fn for_item(item: &TodoItem) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone().unwrap_or_default(),
            color: item
                .color
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_NOTE_COLOR.to_string()),
            mode: FormMode::Edit(item.id.clone()),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit() { "Update" } else { "Add" }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.title.trim().is_empty() {
            Err(FormError::TitleRequired)
        } else {
            Ok(())
        }
    }

    fn new_todo(&self) -> NewTodo {
        NewTodo {
            title: self.title.clone(),
            description: self.description.clone(),
            color: self.color.clone(),
            is_done: false,
        }
    }

    /// Full update body. Completion is always sent as `false`, so editing a
    /// done item marks it not done again.
    fn update_for(&self, id: &str) -> TodoUpdate {
        TodoUpdate {
            id: id.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            color: self.color.clone(),
            is_done: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Failed to add todo.")]
    AddFailed(#[source] ApiError),
    #[error("Failed to update todo.")]
    UpdateFailed(#[source] ApiError),
}

// ========================
// Flows
// ========================

/// Fetch profile and todos; any failure degrades to an empty board.
///
/// `None` when a newer load started while this one was in flight.
pub async fn load<A: TodoApi>(api: &A, loads: &LoadSequence) -> Option<BoardData> {
    let ticket = loads.begin();
    let data = match api.fetch_todos().await {
        Ok(payload) => {
            log::debug!("[TODO] Loaded {} todos", payload.todos.len());
            payload.into()
        }
        Err(e) => {
            log::error!("[TODO] Failed to fetch todos and user: {}", e);
            BoardData::default()
        }
    };

    if loads.is_current(ticket) {
        Some(data)
    } else {
        log::debug!("[TODO] Dropping stale load #{}", ticket);
        None
    }
}

/// Validate, send the create or full update, then re-fetch.
///
/// Nothing is sent when the title is blank. On error the caller keeps the
/// form open and shows the error text inline.
pub async fn submit_form<A: TodoApi>(
    api: &A,
    loads: &LoadSequence,
    form: &TodoForm,
) -> Result<Option<BoardData>, FormError> {
    form.validate()?;

    match &form.mode {
        FormMode::Add => api.create_todo(&form.new_todo()).await.map_err(|e| {
            log::error!("[TODO] Create failed: {}", e);
            FormError::AddFailed(e)
        })?,
        FormMode::Edit(id) => api.update_todo(&form.update_for(id)).await.map_err(|e| {
            log::error!("[TODO] Update of {} failed: {}", id, e);
            FormError::UpdateFailed(e)
        })?,
    }

    Ok(load(api, loads).await)
}

/// Set completion only, then re-fetch.
pub async fn set_done<A: TodoApi>(
    api: &A,
    loads: &LoadSequence,
    id: &str,
    is_done: bool,
) -> Result<Option<BoardData>, ApiError> {
    let update = DoneUpdate { id: id.to_string(), is_done };
    api.set_done(&update).await?;
    Ok(load(api, loads).await)
}

/// Delete, then re-fetch.
pub async fn delete<A: TodoApi>(api: &A, loads: &LoadSequence, id: &str) -> Result<Option<BoardData>, ApiError> {
    api.delete_todo(id).await?;
    Ok(load(api, loads).await)
}

// ========================
// Stale Response Guard
// ========================

/// Orders board loads so an older response never overwrites a newer one.
#[derive(Clone, Default)]
pub struct LoadSequence {
    latest: Arc<AtomicU64>,
}

impl LoadSequence {
    /// Ticket for a load that is about to start
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether the load holding `ticket` is still the newest one
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}
