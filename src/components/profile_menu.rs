//! Profile Menu Component
//!
//! Avatar and name in the header; clicking opens a dropdown with Logout.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::models::UserInfo;
use crate::presentation::{avatar_url, owner_label};

#[component]
pub fn ProfileMenu(#[prop(into)] owner: Signal<Option<UserInfo>>) -> impl IntoView {
    let ctx = use_app_context();
    let (show_dropdown, set_show_dropdown) = signal(false);
    let menu_ref: NodeRef<html::Div> = NodeRef::new();

    // Mousedown anywhere outside the menu closes it
    let outside_click = window_event_listener(ev::mousedown, move |ev| {
        if !show_dropdown.get_untracked() {
            return;
        }
        let Some(menu) = menu_ref.get_untracked() else { return };
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if !menu.contains(target.as_ref()) {
            set_show_dropdown.set(false);
        }
    });
    on_cleanup(move || outside_click.remove());

    view! {
        <div style="padding-right: 1rem;">
            <div
                class="user-profile"
                node_ref=menu_ref
                on:click=move |_| set_show_dropdown.update(|open| *open = !*open)
            >
                <img
                    src=move || owner.with(|o| avatar_url(o.as_ref()))
                    alt="Avatar"
                    class="avatar"
                />
                <span class="username">{move || owner.with(|o| owner_label(o.as_ref()))}</span>

                <Show when=move || show_dropdown.get()>
                    <div class="dropdown-menu">
                        <button on:click={
                            let ctx = ctx.clone();
                            move |_| ctx.logout()
                        }>"Logout"</button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
