//! Sticky Todo App
//!
//! Root component: context setup and the session-guarded routes.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{path, NavigateOptions};

use crate::components::{LoginForm, RegisterForm, TodoPage};
use crate::config::AppConfig;
use crate::context::{use_app_context, AppContext};
use crate::session::Session;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    let session = Session::in_browser(&config.token_storage_key);

    // Provide context to all children
    provide_context(AppContext::new(config, session));

    view! {
        <Router>
            <GuardedRoutes />
        </Router>
    }
}

/// Routes gated on token presence, re-checked on every navigation.
#[component]
fn GuardedRoutes() -> impl IntoView {
    let ctx = use_app_context();
    let location = use_location();
    let navigate = StoredValue::new(use_navigate());

    let authenticated = Memo::new(move |_| {
        let path = location.pathname.get();
        let present = ctx.session.restore();
        log::debug!("[APP] Route {} evaluated, token present: {}", path, present);
        present
    });

    let on_login_success = Callback::new(move |_: ()| {
        let _ = navigate.try_with_value(|nav| nav("/todo", NavigateOptions::default()));
    });

    view! {
        <Routes fallback=|| "Not found.">
            <Route
                path=path!("/")
                view=move || {
                    if authenticated.get() {
                        view! { <Redirect path="/todo" /> }.into_any()
                    } else {
                        view! { <Redirect path="/login" /> }.into_any()
                    }
                }
            />
            <Route
                path=path!("/login")
                view=move || view! { <LoginForm on_success=on_login_success /> }
            />
            <Route path=path!("/register") view=RegisterForm />
            <Route
                path=path!("/todo")
                view=move || {
                    if authenticated.get() {
                        view! { <TodoPage /> }.into_any()
                    } else {
                        view! { <Redirect path="/login" /> }.into_any()
                    }
                }
            />
        </Routes>
    }
}
