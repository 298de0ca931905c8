//! Admin screen for public contact details (email, phone, location, resume).
//!
//! The resume is a binary upload, so create/update are multipart.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::ContactDetails;
use crate::state::ui::UiState;
use crate::util::form::require_all;

#[cfg(test)]
#[path = "contact_info_test.rs"]
mod contact_info_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ContactInfoForm {
    email: String,
    phone: String,
    location: String,
}

impl ContactInfoForm {
    fn from_details(details: &ContactDetails) -> Self {
        Self {
            email: details.email.clone(),
            phone: details.phone.clone(),
            location: details.location.clone(),
        }
    }
}

fn contact_info_form_fields(form: &ContactInfoForm) -> Result<Vec<(&'static str, String)>, String> {
    require_all(&[
        ("Email", form.email.as_str()),
        ("Phone", form.phone.as_str()),
        ("Location", form.location.as_str()),
    ])?;
    Ok(vec![
        ("email", form.email.trim().to_owned()),
        ("phone", form.phone.trim().to_owned()),
        ("location", form.location.trim().to_owned()),
    ])
}

#[component]
pub fn ContactInfoAdminPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let entries = RwSignal::new(Vec::<ContactDetails>::new());
    let loading = RwSignal::new(false);
    let form = RwSignal::new(ContactInfoForm::default());
    let editing = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let confirm_delete = RwSignal::new(None::<String>);
    let resume_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let fetch_entries = move || {
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::content::fetch_contact_details().await {
                    Ok(items) => {
                        let _ = entries.try_set(items);
                    }
                    Err(err) => {
                        let _ = entries.try_set(Vec::new());
                        let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to fetch contact info")));
                    }
                }
                let _ = loading.try_set(false);
            });
        }
    };

    Effect::new(move || fetch_entries());

    let reset_form = move || {
        form.set(ContactInfoForm::default());
        editing.set(None);
        #[cfg(feature = "hydrate")]
        if let Some(el) = resume_input.get_untracked() {
            el.set_value("");
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let fields = match contact_info_form_fields(&form.get()) {
            Ok(fields) => fields,
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
                let file = resume_input
                    .get_untracked()
                    .and_then(|el| el.files())
                    .and_then(|list| list.get(0));
                let outcome = async {
                    let body = crate::net::api::multipart(&fields, file.as_ref().map(|f| ("resume", f)))?;
                    match &edit_id {
                        Some(id) => crate::net::content::update_contact_details(id, body).await,
                        None => crate::net::content::create_contact_details(body).await,
                    }
                }
                .await;

                match outcome {
                    Ok(_) => {
                        let updated = edit_id.is_some();
                        let _ = form.try_set(ContactInfoForm::default());
                        let _ = editing.try_set(None);
                        if let Some(el) = resume_input.get_untracked() {
                            el.set_value("");
                        }
                        let _ = ui.try_update(|u| {
                            u.notify_success(if updated { "Contact info updated" } else { "Contact info added" });
                        });
                        fetch_entries();
                    }
                    Err(err) => {
                        let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to save contact info")));
                    }
                }
                let _ = submitting.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = fields;
        }
    };

    let on_edit = move |details: &ContactDetails| {
        form.set(ContactInfoForm::from_details(details));
        editing.set(Some(details.id.clone()));
    };

    let on_delete_confirmed = Callback::new(move |()| {
        let Some(id) = confirm_delete.get_untracked() else {
            return;
        };
        confirm_delete.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::content::delete_contact_details(&id).await {
                Ok(_) => {
                    let _ = ui.try_update(|u| u.notify_success("Contact info deleted"));
                    fetch_entries();
                }
                Err(err) => {
                    let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to delete contact info")));
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
            <h1 class="admin-page__title">"Manage Contact Info"</h1>

            <form class="panel panel__form" on:submit=on_submit>
                <h2 class="panel__title">
                    {move || if editing.get().is_some() { "Edit Contact Info" } else { "Add Contact Info" }}
                </h2>
                <div class="panel__grid">
                    <input
                        class="panel__input"
                        type="email"
                        placeholder="Public email"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="panel__input"
                        type="text"
                        placeholder="Phone"
                        prop:value=move || form.get().phone
                        on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                    />
                    <input
                        class="panel__input"
                        type="text"
                        placeholder="Location"
                        prop:value=move || form.get().location
                        on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
                    />
                    <input class="panel__input" type="file" accept=".pdf,.doc,.docx" node_ref=resume_input/>
                </div>
                <div class="panel__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || {
                            if submitting.get() {
                                "Saving..."
                            } else if editing.get().is_some() {
                                "Update Contact Info"
                            } else {
                                "Add Contact Info"
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

            <h2 class="admin-page__subtitle">"Contact Info Entries"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <Show
                    when=move || !entries.get().is_empty()
                    fallback=|| view! { <p>"No contact info found."</p> }
                >
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Email"</th>
                                <th>"Phone"</th>
                                <th>"Location"</th>
                                <th>"Resume"</th>
                                <th>"Action"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                entries
                                    .get()
                                    .into_iter()
                                    .map(|details| {
                                        let edit_target = details.clone();
                                        let delete_id = details.id.clone();
                                        view! {
                                            <tr>
                                                <td>{details.email.clone()}</td>
                                                <td>{details.phone.clone()}</td>
                                                <td>{details.location.clone()}</td>
                                                <td>
                                                    {details
                                                        .resume
                                                        .clone()
                                                        .map_or_else(
                                                            || view! { <span>"—"</span> }.into_any(),
                                                            |resume| {
                                                                view! {
                                                                    <a href=resume target="_blank" rel="noreferrer">
                                                                        "View"
                                                                    </a>
                                                                }
                                                                    .into_any()
                                                            },
                                                        )}
                                                </td>
                                                <td class="admin-table__actions">
                                                    <button class="btn" on:click=move |_| on_edit(&edit_target)>
                                                        "Edit"
                                                    </button>
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
                    title="Delete Contact Info"
                    message="This will permanently remove the entry and its resume file."
                    on_confirm=on_delete_confirmed
                    on_cancel=Callback::new(move |()| confirm_delete.set(None))
                />
            </Show>
        </div>
    }
}
