//! Admin screen for the fixed set of social profile links.
//!
//! There is exactly one social-links document; the screen loads it and
//! upserts all five links in one `PUT`.

use leptos::prelude::*;

use crate::net::types::SocialLinks;
use crate::state::ui::UiState;
use crate::util::form::require_all;

#[cfg(test)]
#[path = "social_test.rs"]
mod social_test;

fn validate_social_links(links: &SocialLinks) -> Result<SocialLinks, String> {
    require_all(&[
        ("GitHub link", links.github.as_str()),
        ("LinkedIn link", links.linkedin.as_str()),
        ("Instagram link", links.instagram.as_str()),
        ("WhatsApp link", links.whatsapp.as_str()),
        ("X link", links.x.as_str()),
    ])
    .map_err(|_| "All 5 links are required".to_owned())?;
    Ok(SocialLinks {
        github: links.github.trim().to_owned(),
        linkedin: links.linkedin.trim().to_owned(),
        instagram: links.instagram.trim().to_owned(),
        whatsapp: links.whatsapp.trim().to_owned(),
        x: links.x.trim().to_owned(),
    })
}

#[component]
pub fn SocialAdminPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let links = RwSignal::new(SocialLinks::default());
    let loading = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    let fetch_links = move || {
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::content::fetch_social_links().await {
                    Ok(current) => {
                        let _ = links.try_set(current);
                    }
                    Err(err) => {
                        let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to fetch links")));
                    }
                }
                let _ = loading.try_set(false);
            });
        }
    };

    Effect::new(move || fetch_links());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let payload = match validate_social_links(&links.get()) {
            Ok(payload) => payload,
            Err(message) => {
                ui.update(|u| u.notify_error(message));
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            submitting.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::content::update_social_links(&payload).await {
                    Ok(_) => {
                        let _ = ui.try_update(|u| u.notify_success("Social links updated"));
                    }
                    Err(err) => {
                        let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to update links")));
                    }
                }
                let _ = submitting.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    };

    view! {
        <div class="admin-page">
            <h1 class="admin-page__title">"Manage Social Links"</h1>

            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading links..."</p> }>
                <form class="panel panel__form" on:submit=on_submit>
                    <div class="panel__grid">
                        <input
                            class="panel__input"
                            type="text"
                            placeholder="GitHub link"
                            prop:value=move || links.get().github
                            on:input=move |ev| links.update(|l| l.github = event_target_value(&ev))
                        />
                        <input
                            class="panel__input"
                            type="text"
                            placeholder="LinkedIn link"
                            prop:value=move || links.get().linkedin
                            on:input=move |ev| links.update(|l| l.linkedin = event_target_value(&ev))
                        />
                        <input
                            class="panel__input"
                            type="text"
                            placeholder="Instagram link"
                            prop:value=move || links.get().instagram
                            on:input=move |ev| links.update(|l| l.instagram = event_target_value(&ev))
                        />
                        <input
                            class="panel__input"
                            type="text"
                            placeholder="WhatsApp link"
                            prop:value=move || links.get().whatsapp
                            on:input=move |ev| links.update(|l| l.whatsapp = event_target_value(&ev))
                        />
                        <input
                            class="panel__input"
                            type="text"
                            placeholder="X link"
                            prop:value=move || links.get().x
                            on:input=move |ev| links.update(|l| l.x = event_target_value(&ev))
                        />
                    </div>
                    <div class="panel__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Updating..." } else { "Update Links" }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
