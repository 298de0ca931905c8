//! Top bar for the admin area: identity, dark mode toggle, logout.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let admin_name = move || {
        auth.get()
            .user
            .map(|user| user.name)
            .unwrap_or_else(|| "Admin".to_owned())
    };

    let on_toggle_sidebar = move |_| ui.update(|u| u.sidebar_open = !u.sidebar_open);

    let on_toggle_dark = move |_| {
        let current = ui.get().dark_mode;
        let next = crate::util::dark_mode::toggle(current);
        ui.update(|u| u.dark_mode = next);
    };

    // Logout is best-effort on the server side; local state clears either
    // way, and a full reload lands on the login page with a fresh session.
    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(|a| a.clear_user());
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <header class="navbar">
            <button class="btn navbar__menu" on:click=on_toggle_sidebar title="Toggle sidebar">
                "☰"
            </button>
            <h2 class="navbar__title">"Admin Dashboard"</h2>

            <span class="navbar__spacer"></span>

            <button class="btn navbar__dark-toggle" on:click=on_toggle_dark title="Toggle dark mode">
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <span class="navbar__self">{admin_name}</span>

            <button class="btn navbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
