//! Todo Page Component
//!
//! Header, profile menu, add button and the grid of sticky notes. Every
//! mutation is followed by a full re-fetch; nothing is updated optimistically.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::board::{self, BoardData, LoadSequence, TodoForm};
use crate::components::{ProfileMenu, StickyNote, TodoFormPopup};
use crate::context::use_app_context;
use crate::models::TodoItem;
use crate::presentation::{note_key, sorted_newest_first};
use crate::store::{store_apply, BoardState, BoardStateStoreFields, BoardStore};

/// Write a load result; `None` means a newer load superseded it.
fn apply(store: BoardStore, data: Option<BoardData>) {
    if let Some(data) = data {
        store_apply(&store, data);
    }
}

fn alert(message: &str) {
    let _ = window().alert_with_message(message);
}

#[component]
pub fn TodoPage() -> impl IntoView {
    let ctx = use_app_context();
    let store: BoardStore = Store::new(BoardState::default());
    let loads = LoadSequence::default();

    // Some(..) while the popup is open
    let (form, set_form) = signal::<Option<TodoForm>>(None);
    let (form_error, set_form_error) = signal(String::new());

    // Load on mount
    {
        let ctx = ctx.clone();
        let loads = loads.clone();
        Effect::new(move |_| {
            let api = ctx.api();
            let loads = loads.clone();
            spawn_local(async move {
                apply(store, board::load(&api, &loads).await);
            });
        });
    }

    let open_add = move |_| {
        set_form_error.set(String::new());
        set_form.set(Some(TodoForm::default()));
    };

    let on_cancel = Callback::new(move |_: ()| {
        set_form_error.set(String::new());
        set_form.set(None);
    });

    let on_submit = {
        let ctx = ctx.clone();
        let loads = loads.clone();
        Callback::new(move |_: ()| {
            let Some(current) = form.get_untracked() else { return };
            let api = ctx.api();
            let loads = loads.clone();
            spawn_local(async move {
                match board::submit_form(&api, &loads, &current).await {
                    Ok(data) => {
                        set_form_error.set(String::new());
                        set_form.set(None);
                        apply(store, data);
                    }
                    Err(e) => set_form_error.set(e.to_string()),
                }
            });
        })
    };

    let on_toggle = {
        let ctx = ctx.clone();
        let loads = loads.clone();
        Callback::new(move |(id, is_done): (String, bool)| {
            let api = ctx.api();
            let loads = loads.clone();
            spawn_local(async move {
                match board::set_done(&api, &loads, &id, is_done).await {
                    Ok(data) => apply(store, data),
                    Err(e) => alert(&e.to_string()),
                }
            });
        })
    };

    let on_edit = Callback::new(move |item: TodoItem| {
        set_form_error.set(String::new());
        set_form.set(Some(TodoForm::for_item(&item)));
    });

    let on_delete = {
        let ctx = ctx.clone();
        let loads = loads.clone();
        Callback::new(move |id: String| {
            let api = ctx.api();
            let loads = loads.clone();
            spawn_local(async move {
                match board::delete(&api, &loads, &id).await {
                    Ok(data) => {
                        set_form_error.set(String::new());
                        set_form.set(None);
                        apply(store, data);
                    }
                    Err(e) => alert(&e.to_string()),
                }
            });
        })
    };

    let owner = Signal::derive(move || store.owner().get());
    let sorted_todos = move || sorted_newest_first(&store.todos().read());

    view! {
        <div class="todo-container">
            <header class="todo-header">
                <h1>
                    "Start your Todo " <span>{move || format!("({})", store.todos().read().len())}</span>
                </h1>
                <ProfileMenu owner=owner />
            </header>

            <TodoFormPopup
                form=form
                set_form=set_form
                error=form_error
                on_submit=on_submit
                on_cancel=on_cancel
            />

            <div class="todo-grid" data-cy="todo-item-wrapper">
                <div
                    class="sticky-note add-button-box"
                    style="display: flex; justify-content: center; align-items: center; cursor: pointer;"
                    on:click=open_add
                >
                    <span style="font-size: 3rem;">"＋"</span>
                </div>

                <For
                    each=sorted_todos
                    key=note_key
                    children=move |item| {
                        view! {
                            <StickyNote
                                item=item
                                on_toggle=on_toggle
                                on_edit=on_edit
                                on_delete=on_delete
                            />
                        }
                    }
                />
            </div>
        </div>
    }
}
