//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::BoardData;
use crate::models::{TodoItem, UserInfo};

/// Todo page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Items as returned by the backend, unsorted
    pub todos: Vec<TodoItem>,
    /// Profile of the signed-in user, `None` when the fetch failed
    pub owner: Option<UserInfo>,
}

pub type BoardStore = Store<BoardState>;

/// Replace both fields with a fresh fetch result.
///
/// Returns `false` when the page owning the store is already gone (a load
/// finished after navigating away); the result is dropped.
pub fn store_apply(store: &BoardStore, data: BoardData) -> bool {
    let todos_field = store.todos();
    let Some(mut todos) = todos_field.try_write() else {
        log::debug!("[TODO] Board unmounted, dropping load result");
        return false;
    };
    *todos = data.todos;
    drop(todos);

    match store.owner().try_write() {
        Some(mut owner) => {
            *owner = data.owner;
            true
        }
        None => false,
    }
}
