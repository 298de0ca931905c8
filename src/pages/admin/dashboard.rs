//! Admin overview: account profile and password management.

use leptos::prelude::*;

use crate::net::types::{PasswordPayload, ProfilePayload};
#[cfg(feature = "hydrate")]
use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::form::require_all;

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

fn validate_profile_form(name: &str, email: &str) -> Result<ProfilePayload, String> {
    require_all(&[("Name", name), ("Email", email)])?;
    Ok(ProfilePayload {
        name: name.trim().to_owned(),
        email: email.trim().to_owned(),
    })
}

fn validate_password_form(current: &str, new: &str, confirm: &str) -> Result<PasswordPayload, String> {
    require_all(&[
        ("Current password", current),
        ("New password", new),
        ("Confirm password", confirm),
    ])?;
    if new != confirm {
        return Err("New password and confirm password must match".to_owned());
    }
    Ok(PasswordPayload {
        current_password: current.to_owned(),
        new_password: new.to_owned(),
        confirm_password: confirm.to_owned(),
    })
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let profile_name = RwSignal::new(String::new());
    let profile_email = RwSignal::new(String::new());
    let profile_busy = RwSignal::new(false);

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let password_busy = RwSignal::new(false);

    // Prefill the profile form once the session identity is available.
    Effect::new(move || {
        if let Some(user) = auth.get().user {
            profile_name.set(user.name);
            profile_email.set(user.email);
        }
    });

    let on_profile_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if profile_busy.get() {
            return;
        }
        let payload = match validate_profile_form(&profile_name.get(), &profile_email.get()) {
            Ok(payload) => payload,
            Err(message) => {
                ui.update(|u| u.notify_error(message));
                return;
            }
        };
        profile_busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_profile(&payload).await {
                Ok(_) => {
                    // Keep the in-memory identity in sync with what was saved.
                    if let Some(user) = auth.get_untracked().user {
                        auth.update(|state| {
                            state.set_user(User {
                                name: payload.name.clone(),
                                email: payload.email.clone(),
                                ..user
                            });
                        });
                    }
                    ui.update(|u| u.notify_success("Profile updated"));
                }
                Err(err) => {
                    ui.update(|u| u.notify_error(err.message_or("Profile update failed")));
                }
            }
            let _ = profile_busy.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    };

    let on_password_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if password_busy.get() {
            return;
        }
        let payload = match validate_password_form(
            &current_password.get(),
            &new_password.get(),
            &confirm_password.get(),
        ) {
            Ok(payload) => payload,
            Err(message) => {
                ui.update(|u| u.notify_error(message));
                return;
            }
        };
        password_busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::change_password(&payload).await {
                Ok(_) => {
                    let _ = current_password.try_set(String::new());
                    let _ = new_password.try_set(String::new());
                    let _ = confirm_password.try_set(String::new());
                    ui.update(|u| u.notify_success("Password updated"));
                }
                Err(err) => {
                    ui.update(|u| u.notify_error(err.message_or("Password change failed")));
                }
            }
            let _ = password_busy.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    };

    view! {
        <div class="admin-page">
            <h1 class="admin-page__title">"Overview"</h1>

            <section class="panel">
                <h2 class="panel__title">"Profile"</h2>
                <form class="panel__form" on:submit=on_profile_submit>
                    <label class="panel__label">
                        "Name"
                        <input
                            class="panel__input"
                            type="text"
                            prop:value=move || profile_name.get()
                            on:input=move |ev| profile_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="panel__label">
                        "Email"
                        <input
                            class="panel__input"
                            type="email"
                            prop:value=move || profile_email.get()
                            on:input=move |ev| profile_email.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || profile_busy.get()>
                        {move || if profile_busy.get() { "Saving..." } else { "Save Profile" }}
                    </button>
                </form>
            </section>

            <section class="panel">
                <h2 class="panel__title">"Change Password"</h2>
                <form class="panel__form" on:submit=on_password_submit>
                    <label class="panel__label">
                        "Current password"
                        <input
                            class="panel__input"
                            type="password"
                            prop:value=move || current_password.get()
                            on:input=move |ev| current_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="panel__label">
                        "New password"
                        <input
                            class="panel__input"
                            type="password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="panel__label">
                        "Confirm password"
                        <input
                            class="panel__input"
                            type="password"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || password_busy.get()>
                        {move || if password_busy.get() { "Updating..." } else { "Update Password" }}
                    </button>
                </form>
            </section>
        </div>
    }
}
