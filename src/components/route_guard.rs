//! Route guard gating protected subtrees on the session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps any subtree that declares a role requirement. The decision itself
//! is `util::guard::decide`; this component only renders the outcome and
//! performs the navigation side effect. It re-evaluates on every navigation
//! and on every session mutation, and caches nothing across them.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::util::guard::{AccessDecision, decide, redirect_target};

/// Gate `children` behind the session. While the session is bootstrapping a
/// neutral placeholder renders; once settled, either the subtree renders or
/// the user is redirected (to `/login` with the origin path, or home on a
/// role mismatch).
#[component]
pub fn RouteGuard(
    /// Role the signed-in user must hold, beyond the admin-area rule.
    #[prop(optional)]
    required_role: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| decide(&auth.get(), &location.pathname.get(), required_role));

    Effect::new(move || {
        if let Some(target) = redirect_target(&decision.get()) {
            navigate(&target, NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || decision.get() == AccessDecision::Granted
            fallback=move || {
                view! {
                    <div class="route-guard">
                        <p class="route-guard__status">
                            {move || match decision.get() {
                                AccessDecision::Checking => "Checking access...",
                                _ => "Redirecting...",
                            }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
