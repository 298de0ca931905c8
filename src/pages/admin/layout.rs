//! Guarded admin shell: sidebar and top bar around the nested screens.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::navbar::Navbar;
use crate::components::route_guard::RouteGuard;
use crate::components::sidebar::Sidebar;

/// Layout for every `/admin` route. The guard re-evaluates on navigation and
/// session changes, so nested screens can assume an admin user.
#[component]
pub fn AdminLayout() -> impl IntoView {
    view! {
        <RouteGuard required_role="admin">
            <div class="admin">
                <Sidebar/>
                <div class="admin__main">
                    <Navbar/>
                    <main class="admin__content">
                        <Outlet/>
                    </main>
                </div>
            </div>
        </RouteGuard>
    }
}
