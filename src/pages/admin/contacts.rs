//! Admin screen for visitor contact messages (read + delete).

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::ContactMessage;
use crate::state::ui::UiState;

#[cfg(test)]
#[path = "contacts_test.rs"]
mod contacts_test;

fn rating_label(rating: Option<&str>) -> String {
    match rating {
        Some(value) if !value.trim().is_empty() => format!("{}/5", value.trim()),
        _ => "—".to_owned(),
    }
}

#[component]
pub fn ContactsAdminPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let messages = RwSignal::new(Vec::<ContactMessage>::new());
    let loading = RwSignal::new(false);
    let confirm_delete = RwSignal::new(None::<String>);

    let fetch_messages = move || {
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::content::fetch_contact_messages().await {
                    Ok(items) => {
                        let _ = messages.try_set(items);
                    }
                    Err(err) => {
                        let _ = messages.try_set(Vec::new());
                        let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to fetch contacts")));
                    }
                }
                let _ = loading.try_set(false);
            });
        }
    };

    Effect::new(move || fetch_messages());

    let on_delete_confirmed = Callback::new(move |()| {
        let Some(id) = confirm_delete.get_untracked() else {
            return;
        };
        confirm_delete.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::content::delete_contact_message(&id).await {
                Ok(_) => {
                    let _ = ui.try_update(|u| u.notify_success("Message deleted"));
                    fetch_messages();
                }
                Err(err) => {
                    let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to delete message")));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, ui);
        }
    });

    view! {
        <div class="admin-page">
            <h1 class="admin-page__title">"Contact Messages"</h1>

            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <Show
                    when=move || !messages.get().is_empty()
                    fallback=|| view! { <p>"No messages found."</p> }
                >
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Subject"</th>
                                <th>"Message"</th>
                                <th>"Rating"</th>
                                <th>"Received"</th>
                                <th>"Action"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                messages
                                    .get()
                                    .into_iter()
                                    .map(|message| {
                                        let delete_id = message.id.clone();
                                        view! {
                                            <tr>
                                                <td>{message.name.clone()}</td>
                                                <td>{message.email.clone()}</td>
                                                <td>{message.subject.clone()}</td>
                                                <td class="admin-table__message">{message.message.clone()}</td>
                                                <td>{rating_label(message.rating.as_deref())}</td>
                                                <td>{message.created_at.clone().unwrap_or_default()}</td>
                                                <td class="admin-table__actions">
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| confirm_delete.set(Some(delete_id.clone()))
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>

            <Show when=move || confirm_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete Message"
                    message="This will permanently remove the message."
                    on_confirm=on_delete_confirmed
                    on_cancel=Callback::new(move |()| confirm_delete.set(None))
                />
            </Show>
        </div>
    }
}
