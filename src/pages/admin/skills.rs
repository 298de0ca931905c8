//! Admin screen for managing skills.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::{Skill, SkillPayload};
use crate::state::ui::UiState;
use crate::util::form::require_all;

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct SkillForm {
    name: String,
    level: String,
}

/// The level renders as a progress-bar percentage on the public page, so it
/// must be a number in 0–100 (a trailing `%` is tolerated).
fn validate_skill_form(form: &SkillForm) -> Result<SkillPayload, String> {
    require_all(&[("Name", form.name.as_str()), ("Level", form.level.as_str())])?;
    let level = form.level.trim().trim_end_matches('%').trim();
    match level.parse::<u32>() {
        Ok(value) if value <= 100 => Ok(SkillPayload {
            name: form.name.trim().to_owned(),
            level: value.to_string(),
        }),
        _ => Err("Level must be a number between 0 and 100".to_owned()),
    }
}

#[component]
pub fn SkillsAdminPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let skills = RwSignal::new(Vec::<Skill>::new());
    let loading = RwSignal::new(false);
    let form = RwSignal::new(SkillForm::default());
    let editing = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let confirm_delete = RwSignal::new(None::<String>);

    let fetch_skills = move || {
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::content::fetch_skills().await {
                    Ok(items) => {
                        let _ = skills.try_set(items);
                    }
                    Err(err) => {
                        let _ = skills.try_set(Vec::new());
                        let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to fetch skills")));
                    }
                }
                let _ = loading.try_set(false);
            });
        }
    };

    Effect::new(move || fetch_skills());

    let reset_form = move || {
        form.set(SkillForm::default());
        editing.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let payload = match validate_skill_form(&form.get()) {
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
                    Some(id) => crate::net::content::update_skill(id, &payload).await,
                    None => crate::net::content::create_skill(&payload).await,
                };
                match outcome {
                    Ok(_) => {
                        let updated = edit_id.is_some();
                        let _ = form.try_set(SkillForm::default());
                        let _ = editing.try_set(None);
                        let _ = ui.try_update(|u| {
                            u.notify_success(if updated { "Skill updated" } else { "Skill added" });
                        });
                        fetch_skills();
                    }
                    Err(err) => {
                        let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to save skill")));
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

    let on_edit = move |skill: &Skill| {
        form.set(SkillForm {
            name: skill.name.clone(),
            level: skill.level.clone(),
        });
        editing.set(Some(skill.id.clone()));
    };

    let on_delete_confirmed = Callback::new(move |()| {
        let Some(id) = confirm_delete.get_untracked() else {
            return;
        };
        confirm_delete.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::content::delete_skill(&id).await {
                Ok(_) => {
                    let _ = ui.try_update(|u| u.notify_success("Skill deleted"));
                    fetch_skills();
                }
                Err(err) => {
                    let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to delete skill")));
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
            <h1 class="admin-page__title">"Manage Skills"</h1>

            <form class="panel panel__form" on:submit=on_submit>
                <h2 class="panel__title">
                    {move || if editing.get().is_some() { "Edit Skill" } else { "Add New Skill" }}
                </h2>
                <div class="panel__grid">
                    <input
                        class="panel__input"
                        type="text"
                        placeholder="Skill name"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <input
                        class="panel__input"
                        type="text"
                        placeholder="Level (0-100)"
                        prop:value=move || form.get().level
                        on:input=move |ev| form.update(|f| f.level = event_target_value(&ev))
                    />
                </div>
                <div class="panel__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || {
                            if submitting.get() {
                                "Saving..."
                            } else if editing.get().is_some() {
                                "Update Skill"
                            } else {
                                "Add Skill"
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

            <h2 class="admin-page__subtitle">"Skill List"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <Show when=move || !skills.get().is_empty() fallback=|| view! { <p>"No skills found."</p> }>
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Level"</th>
                                <th>"Action"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                skills
                                    .get()
                                    .into_iter()
                                    .map(|skill| {
                                        let edit_target = skill.clone();
                                        let delete_id = skill.id.clone();
                                        view! {
                                            <tr>
                                                <td>{skill.name.clone()}</td>
                                                <td>{format!("{}%", skill.level.trim_end_matches('%'))}</td>
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
                    title="Delete Skill"
                    message="This will permanently remove the skill."
                    on_confirm=on_delete_confirmed
                    on_cancel=Callback::new(move |()| confirm_delete.set(None))
                />
            </Show>
        </div>
    }
}
