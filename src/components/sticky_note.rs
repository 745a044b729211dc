//! Sticky Note Component
//!
//! One todo item in the board grid.

use leptos::prelude::*;
use web_sys::HtmlInputElement;

use crate::models::TodoItem;
use crate::presentation::{foreground_for, format_date_time, icon_class_for, note_color};

#[component]
pub fn StickyNote(
    item: TodoItem,
    /// (id, new completion)
    #[prop(into)] on_toggle: Callback<(String, bool)>,
    #[prop(into)] on_edit: Callback<TodoItem>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let color = note_color(&item).to_string();
    let foreground = foreground_for(&color);
    let icon_class = icon_class_for(&color);
    let badges = format_date_time(&item.created_at);
    let badge_style = format!("background-color: {}; color: {};", color, foreground);

    let note_style = format!(
        "background-color: {}; color: {}; opacity: {};",
        color,
        foreground,
        if item.is_done { "0.5" } else { "1" },
    );
    let title_style = if item.is_done { "text-decoration: line-through;" } else { "" };

    let id = item.id.clone();
    let is_done = item.is_done;
    let toggle_id = id.clone();
    let delete_id = id;
    let edit_item = item.clone();

    view! {
        <div class="sticky-note" style=note_style>
            <div class="note-header">
                <label class="custom-checkbox">
                    <input
                        type="checkbox"
                        prop:checked=is_done
                        data-cy="todo-item-done-toggle"
                        on:change=move |ev| {
                            // Controlled: the box only flips once the re-fetch rebuilds the note
                            event_target::<HtmlInputElement>(&ev).set_checked(is_done);
                            on_toggle.run((toggle_id.clone(), !is_done))
                        }
                    />
                    <span class="checkmark">{if is_done { "✓" } else { "" }}</span>
                </label>
                <span class="note-time" style=badge_style.clone()>{badges.time}</span>
            </div>

            <h3 style=title_style>{item.title}</h3>

            <div class="note-description">
                {match item.description.filter(|d| !d.is_empty()) {
                    Some(text) => view! { <p>{text}</p> }.into_any(),
                    None => view! { <p><i>"No description"</i></p> }.into_any(),
                }}
            </div>

            <div class="note-footer">
                <span class="note-date" style=badge_style>{badges.date}</span>

                <div class="note-actions" style=format!("--item-color: {};", color)>
                    <button
                        class=format!("icon-button edit {}", icon_class)
                        title="Edit"
                        on:click=move |_| on_edit.run(edit_item.clone())
                    >
                        "✎"
                    </button>
                    <button
                        class=format!("icon-button delete {}", icon_class)
                        title="Delete"
                        on:click=move |_| on_delete.run(delete_id.clone())
                    >
                        "🗑"
                    </button>
                </div>
            </div>
        </div>
    }
}
