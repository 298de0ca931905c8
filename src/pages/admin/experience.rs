//! Admin screen for managing work-history entries.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::{ExperienceEntry, ExperiencePayload};
use crate::state::ui::UiState;
use crate::util::form::{join_list, require_all, split_list};

#[cfg(test)]
#[path = "experience_test.rs"]
mod experience_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ExperienceForm {
    role: String,
    company: String,
    period: String,
    points: String,
}

impl ExperienceForm {
    fn from_entry(entry: &ExperienceEntry) -> Self {
        Self {
            role: entry.role.clone(),
            company: entry.company.clone(),
            period: entry.period.clone(),
            points: join_list(&entry.points),
        }
    }
}

/// Points are entered comma-separated and sent as a list.
fn validate_experience_form(form: &ExperienceForm) -> Result<ExperiencePayload, String> {
    require_all(&[
        ("Role", form.role.as_str()),
        ("Company", form.company.as_str()),
        ("Period", form.period.as_str()),
        ("Highlights", form.points.as_str()),
    ])?;
    Ok(ExperiencePayload {
        role: form.role.trim().to_owned(),
        company: form.company.trim().to_owned(),
        period: form.period.trim().to_owned(),
        points: split_list(&form.points),
    })
}

#[component]
pub fn ExperienceAdminPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let experiences = RwSignal::new(Vec::<ExperienceEntry>::new());
    let loading = RwSignal::new(false);
    let form = RwSignal::new(ExperienceForm::default());
    let editing = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let confirm_delete = RwSignal::new(None::<String>);

    let fetch_experiences = move || {
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::content::fetch_experiences().await {
                    Ok(items) => {
                        let _ = experiences.try_set(items);
                    }
                    Err(err) => {
                        let _ = experiences.try_set(Vec::new());
                        let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to fetch experiences")));
                    }
                }
                let _ = loading.try_set(false);
            });
        }
    };

    Effect::new(move || fetch_experiences());

    let reset_form = move || {
        form.set(ExperienceForm::default());
        editing.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let payload = match validate_experience_form(&form.get()) {
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
                    Some(id) => crate::net::content::update_experience(id, &payload).await,
                    None => crate::net::content::create_experience(&payload).await,
                };
                match outcome {
                    Ok(_) => {
                        let updated = edit_id.is_some();
                        let _ = form.try_set(ExperienceForm::default());
                        let _ = editing.try_set(None);
                        let _ = ui.try_update(|u| {
                            u.notify_success(if updated { "Experience updated" } else { "Experience added" });
                        });
                        fetch_experiences();
                    }
                    Err(err) => {
                        let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to save experience")));
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

    let on_edit = move |entry: &ExperienceEntry| {
        form.set(ExperienceForm::from_entry(entry));
        editing.set(Some(entry.id.clone()));
    };

    let on_delete_confirmed = Callback::new(move |()| {
        let Some(id) = confirm_delete.get_untracked() else {
            return;
        };
        confirm_delete.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::content::delete_experience(&id).await {
                Ok(_) => {
                    let _ = ui.try_update(|u| u.notify_success("Experience deleted"));
                    fetch_experiences();
                }
                Err(err) => {
                    let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to delete experience")));
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
            <h1 class="admin-page__title">"Manage Experience"</h1>

            <form class="panel panel__form" on:submit=on_submit>
                <h2 class="panel__title">
                    {move || if editing.get().is_some() { "Edit Experience" } else { "Add Experience" }}
                </h2>
                <div class="panel__grid">
                    <input
                        class="panel__input"
                        type="text"
                        placeholder="Role"
                        prop:value=move || form.get().role
                        on:input=move |ev| form.update(|f| f.role = event_target_value(&ev))
                    />
                    <input
                        class="panel__input"
                        type="text"
                        placeholder="Company"
                        prop:value=move || form.get().company
                        on:input=move |ev| form.update(|f| f.company = event_target_value(&ev))
                    />
                    <input
                        class="panel__input"
                        type="text"
                        placeholder="Period (e.g. 2021 - 2023)"
                        prop:value=move || form.get().period
                        on:input=move |ev| form.update(|f| f.period = event_target_value(&ev))
                    />
                    <textarea
                        class="panel__input"
                        placeholder="Highlights (comma separated)"
                        prop:value=move || form.get().points
                        on:input=move |ev| form.update(|f| f.points = event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="panel__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || {
                            if submitting.get() {
                                "Saving..."
                            } else if editing.get().is_some() {
                                "Update Experience"
                            } else {
                                "Add Experience"
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

            <h2 class="admin-page__subtitle">"Experience List"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <Show
                    when=move || !experiences.get().is_empty()
                    fallback=|| view! { <p>"No experience entries found."</p> }
                >
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Role"</th>
                                <th>"Company"</th>
                                <th>"Period"</th>
                                <th>"Highlights"</th>
                                <th>"Action"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                experiences
                                    .get()
                                    .into_iter()
                                    .map(|entry| {
                                        let edit_target = entry.clone();
                                        let delete_id = entry.id.clone();
                                        view! {
                                            <tr>
                                                <td>{entry.role.clone()}</td>
                                                <td>{entry.company.clone()}</td>
                                                <td>{entry.period.clone()}</td>
                                                <td>{join_list(&entry.points)}</td>
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
                    title="Delete Experience"
                    message="This will permanently remove the experience entry."
                    on_confirm=on_delete_confirmed
                    on_cancel=Callback::new(move |()| confirm_delete.set(None))
                />
            </Show>
        </div>
    }
}
