//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::auth;
use crate::context::use_app_context;

/// Email/password sign-in. Fields survive a failed attempt.
#[component]
pub fn LoginForm(
    /// Called once the session holds the new token
    #[prop(into)] on_success: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());

    let handle_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = ctx.api();
        let session = ctx.session.clone();
        let email = email.get_untracked();
        let password = password.get_untracked();

        spawn_local(async move {
            match auth::login(&api, &session, &email, &password).await {
                Ok(()) => {
                    set_error.set(String::new());
                    on_success.run(());
                }
                Err(message) => set_error.set(message),
            }
        });
    };

    view! {
        <div class="login-container">
            <form class="login-box" on:submit=handle_login>
                <h1>"Hello!"</h1>
                <p class="subtitle">"Let’s get started your plans"</p>

                <input
                    type="email"
                    placeholder="Email"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    required=true
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                <button type="submit" class="sign-in-btn">"Sign In"</button>

                <Show when=move || !error.get().is_empty()>
                    <p class="error">{move || error.get()}</p>
                </Show>

                <p class="register-link">
                    "Don’t have an account? "
                    <A href="/register">"Register here"</A>
                </p>
            </form>
        </div>
    }
}
