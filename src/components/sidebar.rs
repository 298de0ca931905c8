//! Admin sidebar navigation.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::UiState;

const MENU: &[(&str, &str)] = &[
    ("Overview", "/admin/dashboard"),
    ("Hero", "/admin/hero"),
    ("About", "/admin/aboutInfo"),
    ("Projects", "/admin/projects"),
    ("Services", "/admin/services"),
    ("Skills", "/admin/skills"),
    ("Experience", "/admin/experience"),
    ("Testimonials", "/admin/testimonials"),
    ("Messages", "/admin/contacts"),
    ("Contact Info", "/admin/contactInfo"),
    ("Social Links", "/admin/social"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    view! {
        <Show when=move || ui.get().sidebar_open>
            <nav class="sidebar">
                <h1 class="sidebar__brand">"Portfolio"</h1>
                <ul class="sidebar__menu">
                    {MENU
                        .iter()
                        .map(|(label, path)| {
                            let path = *path;
                            let active = move || location.pathname.get() == path;
                            view! {
                                <li>
                                    <a
                                        href=path
                                        class=move || {
                                            if active() {
                                                "sidebar__link sidebar__link--active"
                                            } else {
                                                "sidebar__link"
                                            }
                                        }
                                    >
                                        {*label}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
                <a class="sidebar__view-site" href="/">
                    "View public site"
                </a>
            </nav>
        </Show>
    }
}
