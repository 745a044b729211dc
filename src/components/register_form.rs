//! Register Form Component

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::auth;
use crate::context::use_app_context;
use crate::models::RegisterRequest;

/// Account creation. On success shows a message, then moves to `/login`
/// after a short delay. Does not sign in.
#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = StoredValue::new(use_navigate());

    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (msg, set_msg) = signal(String::new());
    let (error, set_error) = signal(String::new());

    let handle_register = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = ctx.api();
        let delay_ms = ctx.config.register_redirect_ms;
        let first_name = first_name.get_untracked();
        let last_name = last_name.get_untracked();
        let email = email.get_untracked();
        let password = password.get_untracked();

        spawn_local(async move {
            let request = RegisterRequest {
                email: &email,
                password: &password,
                first_name: &first_name,
                last_name: &last_name,
            };
            match auth::register(&api, &request).await {
                Ok(message) => {
                    set_msg.set(message);
                    set_error.set(String::new());
                    TimeoutFuture::new(delay_ms).await;
                    let _ = navigate.try_with_value(|nav| nav("/login", NavigateOptions::default()));
                }
                Err(message) => {
                    set_msg.set(String::new());
                    set_error.set(message);
                }
            }
        });
    };

    view! {
        <div class="register-container">
            <form class="register-box" on:submit=handle_register>
                <h1>"Create Account"</h1>
                <p class="subtitle">"Start your journey with us"</p>

                <input
                    type="text"
                    placeholder="First Name"
                    required=true
                    prop:value=move || first_name.get()
                    on:input=move |ev| set_first_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Last Name"
                    required=true
                    prop:value=move || last_name.get()
                    on:input=move |ev| set_last_name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password (min 6 characters)"
                    required=true
                    minlength="6"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                <button type="submit" class="register-btn">"Register"</button>

                <Show when=move || !msg.get().is_empty()>
                    <p class="success-msg">{move || msg.get()}</p>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="error-msg">{move || error.get()}</p>
                </Show>

                <p class="login-link">
                    "Already have an account? "
                    <A href="/login">"Login here"</A>
                </p>
            </form>
        </div>
    }
}
