//! Admin login page with email + password auth.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::LoginPayload;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
#[cfg(feature = "hydrate")]
use crate::util::guard::post_login_target;

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

fn validate_login_input(email: &str, password: &str) -> Result<LoginPayload, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(LoginPayload {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Login page. A `from` query parameter (set by the route guard) is honored
/// after a successful login so the user returns where they were headed.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match validate_login_input(&email.get(), &password.get()) {
            Ok(payload) => payload,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Logging in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let target = post_login_target(query.get_untracked().get("from").as_deref());
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&payload).await {
                    Ok(body) => {
                        auth.update(|state| state.set_user(body.into_user()));
                        ui.update(|u| u.notify_success("Login successful"));
                        navigate(&target, NavigateOptions::default());
                    }
                    Err(err) => {
                        let _ = info.try_set(err.message_or("Login failed"));
                        let _ = busy.try_set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, &navigate, &query, ui);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Admin Login"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-card__message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Need an account? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
