//! Admin screen for managing service offerings.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::{Service, ServicePayload};
use crate::state::ui::UiState;
use crate::util::form::require_all;

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ServiceForm {
    title: String,
    icon: String,
    desc: String,
}

impl ServiceForm {
    fn from_service(service: &Service) -> Self {
        Self {
            title: service.title.clone(),
            icon: service.icon.clone(),
            desc: service.desc.clone(),
        }
    }
}

/// The icon is decorative and optional; title and description gate the
/// request.
fn validate_service_form(form: &ServiceForm) -> Result<ServicePayload, String> {
    require_all(&[("Title", form.title.as_str()), ("Description", form.desc.as_str())])?;
    Ok(ServicePayload {
        title: form.title.trim().to_owned(),
        icon: form.icon.trim().to_owned(),
        desc: form.desc.trim().to_owned(),
    })
}

#[component]
pub fn ServicesAdminPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let services = RwSignal::new(Vec::<Service>::new());
    let loading = RwSignal::new(false);
    let form = RwSignal::new(ServiceForm::default());
    let editing = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let confirm_delete = RwSignal::new(None::<String>);

    let fetch_services = move || {
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::content::fetch_services().await {
                    Ok(items) => {
                        let _ = services.try_set(items);
                    }
                    Err(err) => {
                        let _ = services.try_set(Vec::new());
                        let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to fetch services")));
                    }
                }
                let _ = loading.try_set(false);
            });
        }
    };

    Effect::new(move || fetch_services());

    let reset_form = move || {
        form.set(ServiceForm::default());
        editing.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let payload = match validate_service_form(&form.get()) {
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
                    Some(id) => crate::net::content::update_service(id, &payload).await,
                    None => crate::net::content::create_service(&payload).await,
                };
                match outcome {
                    Ok(_) => {
                        let updated = edit_id.is_some();
                        let _ = form.try_set(ServiceForm::default());
                        let _ = editing.try_set(None);
                        let _ = ui.try_update(|u| {
                            u.notify_success(if updated { "Service updated" } else { "Service added" });
                        });
                        fetch_services();
                    }
                    Err(err) => {
                        let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to save service")));
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

    let on_edit = move |service: &Service| {
        form.set(ServiceForm::from_service(service));
        editing.set(Some(service.id.clone()));
    };

    let on_delete_confirmed = Callback::new(move |()| {
        let Some(id) = confirm_delete.get_untracked() else {
            return;
        };
        confirm_delete.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::content::delete_service(&id).await {
                Ok(_) => {
                    let _ = ui.try_update(|u| u.notify_success("Service deleted"));
                    fetch_services();
                }
                Err(err) => {
                    let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to delete service")));
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
            <h1 class="admin-page__title">"Manage Services"</h1>

            <form class="panel panel__form" on:submit=on_submit>
                <h2 class="panel__title">
                    {move || if editing.get().is_some() { "Edit Service" } else { "Add New Service" }}
                </h2>
                <div class="panel__grid">
                    <input
                        class="panel__input"
                        type="text"
                        placeholder="Service Title"
                        prop:value=move || form.get().title
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                    <input
                        class="panel__input"
                        type="text"
                        placeholder="Icon (emoji or name)"
                        prop:value=move || form.get().icon
                        on:input=move |ev| form.update(|f| f.icon = event_target_value(&ev))
                    />
                    <textarea
                        class="panel__input"
                        placeholder="Description"
                        prop:value=move || form.get().desc
                        on:input=move |ev| form.update(|f| f.desc = event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="panel__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || {
                            if submitting.get() {
                                "Saving..."
                            } else if editing.get().is_some() {
                                "Update Service"
                            } else {
                                "Add Service"
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

            <h2 class="admin-page__subtitle">"Service List"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <Show
                    when=move || !services.get().is_empty()
                    fallback=|| view! { <p>"No services found."</p> }
                >
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Icon"</th>
                                <th>"Title"</th>
                                <th>"Description"</th>
                                <th>"Action"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                services
                                    .get()
                                    .into_iter()
                                    .map(|service| {
                                        let edit_target = service.clone();
                                        let delete_id = service.id.clone();
                                        view! {
                                            <tr>
                                                <td>{service.icon.clone()}</td>
                                                <td>{service.title.clone()}</td>
                                                <td>{service.desc.clone()}</td>
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
                    title="Delete Service"
                    message="This will permanently remove the service."
                    on_confirm=on_delete_confirmed
                    on_cancel=Callback::new(move |()| confirm_delete.set(None))
                />
            </Show>
        </div>
    }
}
