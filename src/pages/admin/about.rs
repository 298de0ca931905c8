//! Admin screen for managing "about me" cards.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::{AboutCard, AboutPayload};
use crate::state::ui::UiState;
use crate::util::form::require_all;

#[cfg(test)]
#[path = "about_test.rs"]
mod about_test;

fn validate_about_form(title: &str, text: &str) -> Result<AboutPayload, String> {
    require_all(&[("Title", title), ("Text", text)])?;
    Ok(AboutPayload {
        title: title.trim().to_owned(),
        text: text.trim().to_owned(),
    })
}

#[component]
pub fn AboutAdminPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let cards = RwSignal::new(Vec::<AboutCard>::new());
    let loading = RwSignal::new(false);
    let title = RwSignal::new(String::new());
    let text = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let confirm_delete = RwSignal::new(None::<String>);

    let fetch_cards = move || {
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::content::fetch_about_cards().await {
                    Ok(items) => {
                        let _ = cards.try_set(items);
                    }
                    Err(err) => {
                        let _ = cards.try_set(Vec::new());
                        let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to fetch about cards")));
                    }
                }
                let _ = loading.try_set(false);
            });
        }
    };

    Effect::new(move || fetch_cards());

    let reset_form = move || {
        title.set(String::new());
        text.set(String::new());
        editing.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let payload = match validate_about_form(&title.get(), &text.get()) {
            Ok(payload) => payload,
            Err(message) => {
                ui.update(|u| u.notify_error(message));
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            submitting.set(true);
            let edit_id = editing.get_untracked();
            leptos::task::spawn_local(async move {
                let outcome = match &edit_id {
                    Some(id) => crate::net::content::update_about_card(id, &payload).await,
                    None => crate::net::content::create_about_card(&payload).await,
                };
                match outcome {
                    Ok(_) => {
                        let updated = edit_id.is_some();
                        let _ = title.try_set(String::new());
                        let _ = text.try_set(String::new());
                        let _ = editing.try_set(None);
                        let _ = ui.try_update(|u| {
                            u.notify_success(if updated { "About card updated" } else { "About card added" });
                        });
                        fetch_cards();
                    }
                    Err(err) => {
                        let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to save about card")));
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

    let on_edit = move |card: &AboutCard| {
        title.set(card.title.clone());
        text.set(card.text.clone());
        editing.set(Some(card.id.clone()));
    };

    let on_delete_confirmed = Callback::new(move |()| {
        let Some(id) = confirm_delete.get_untracked() else {
            return;
        };
        confirm_delete.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::content::delete_about_card(&id).await {
                Ok(_) => {
                    let _ = ui.try_update(|u| u.notify_success("About card deleted"));
                    fetch_cards();
                }
                Err(err) => {
                    let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to delete about card")));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="admin-page">
            <h1 class="admin-page__title">"Manage About Cards"</h1>

            <form class="panel panel__form" on:submit=on_submit>
                <h2 class="panel__title">
                    {move || if editing.get().is_some() { "Edit About Card" } else { "Add About Card" }}
                </h2>
                <div class="panel__grid">
                    <input
                        class="panel__input"
                        type="text"
                        placeholder="Card title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <textarea
                        class="panel__input"
                        placeholder="Card text"
                        prop:value=move || text.get()
                        on:input=move |ev| text.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="panel__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || {
                            if submitting.get() {
                                "Saving..."
                            } else if editing.get().is_some() {
                                "Update Card"
                            } else {
                                "Add Card"
                            }
                        }}
                    </button>
                    <Show when=move || editing.get().is_some()>
                        <button class="btn" type="button" on:click=move |_| reset_form()>
                            "Cancel"
                        </button>
                    </Show>
                </div>
            </form>

            <h2 class="admin-page__subtitle">"About Cards"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <Show when=move || !cards.get().is_empty() fallback=|| view! { <p>"No about cards found."</p> }>
                    <div class="admin-cards">
                        {move || {
                            cards
                                .get()
                                .into_iter()
                                .map(|card| {
                                    let edit_target = card.clone();
                                    let delete_id = card.id.clone();
                                    view! {
                                        <article class="card">
                                            <h3 class="card__title">{card.title.clone()}</h3>
                                            <p class="card__text">{card.text.clone()}</p>
                                            <div class="admin-table__actions">
                                                <button class="btn" on:click=move |_| on_edit(&edit_target)>
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| confirm_delete.set(Some(delete_id.clone()))
                                                >
                                                    "Delete"
                                                </button>
                                            </div>
                                        </article>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>

            <Show when=move || confirm_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete About Card"
                    message="This will permanently remove the card."
                    on_confirm=on_delete_confirmed
                    on_cancel=Callback::new(move |()| confirm_delete.set(None))
                />
            </Show>
        </div>
    }
}
