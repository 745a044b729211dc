//! Todo Form Popup Component
//!
//! Overlay form for adding or editing a note. Open while `form` is `Some`.

use leptos::prelude::*;

use crate::board::TodoForm;

#[component]
pub fn TodoFormPopup(
    form: ReadSignal<Option<TodoForm>>,
    set_form: WriteSignal<Option<TodoForm>>,
    error: ReadSignal<String>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    // Read one field of the open form
    let field = move |get: fn(&TodoForm) -> String| {
        move || form.with(|f| f.as_ref().map(get).unwrap_or_default())
    };
    // Write one field of the open form
    let edit = move |set: fn(&mut TodoForm, String)| {
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            set_form.update(|f| {
                if let Some(f) = f {
                    set(f, value);
                }
            });
        }
    };

    view! {
        <Show when=move || form.with(Option::is_some)>
            <div class="todo-popup-overlay">
                <div class="todo-popup">
                    <div class="todo-form">
                        <h2>"What do you need to do?"</h2>

                        <Show when=move || !error.get().is_empty()>
                            <p class="form-error-message">{move || error.get()}</p>
                        </Show>

                        <input
                            type="text"
                            placeholder="Title"
                            data-cy="input-title"
                            prop:value=field(|f| f.title.clone())
                            on:input=edit(|f, v| f.title = v)
                        />
                        <textarea
                            placeholder="Description"
                            rows="3"
                            data-cy="input-description"
                            prop:value=field(|f| f.description.clone())
                            on:input=edit(|f, v| f.description = v)
                        />
                        <div class="color-picker">
                            <label>"Color: "</label>
                            <input
                                type="color"
                                prop:value=field(|f| f.color.clone())
                                on:input=edit(|f, v| f.color = v)
                            />
                        </div>
                        <div class="todo-form-buttons">
                            <button
                                type="submit"
                                class="submit-button"
                                data-cy="submit"
                                on:click=move |_| on_submit.run(())
                            >
                                {move || form.with(|f| f.as_ref().map(TodoForm::submit_label).unwrap_or("Add"))}
                            </button>
                            <button
                                type="button"
                                class="cancel-button"
                                on:click=move |_| on_cancel.run(())
                            >
                                "Cancel"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
