//! Transient notice (toast) host.

use leptos::prelude::*;

use crate::state::ui::{NoticeKind, UiState};

/// Auto-dismiss delay for notices, in milliseconds.
#[cfg(feature = "hydrate")]
const DISMISS_AFTER_MS: u32 = 4_000;

/// Renders the current notice, if any, and schedules its auto-dismissal.
/// A notice replaced before its timer fires stays visible for its own full
/// window; the stale timer is a no-op thanks to the notice sequence number.
#[component]
pub fn NoticeHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(notice) = ui.get().notice else {
            return;
        };
        let seq = notice.seq;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
            let _ = ui.try_update(|state| state.dismiss_notice(seq));
        });
    });

    view! {
        <Show when=move || ui.get().notice.is_some()>
            <div
                class=move || {
                    let kind = ui.get().notice.map(|notice| notice.kind);
                    match kind {
                        Some(NoticeKind::Error) => "notice notice--error",
                        _ => "notice notice--success",
                    }
                }
                role="status"
            >
                {move || ui.get().notice.map(|notice| notice.text).unwrap_or_default()}
            </div>
        </Show>
    }
}
