//! Admin screen for managing portfolio projects.
//!
//! Projects carry an optional image, so create/update go out as multipart
//! forms; the file is read from the input element at submit time.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::Project;
use crate::state::ui::UiState;
use crate::util::form::{join_list, require_all};

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// Editable form fields, kept as raw input strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ProjectForm {
    title: String,
    tagline: String,
    tags: String,
    link: String,
    repo: String,
}

impl ProjectForm {
    fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            tagline: project.tagline.clone(),
            tags: join_list(&project.tags),
            link: project.link.clone(),
            repo: project.repo.clone(),
        }
    }
}

/// Validate the form and produce the multipart text fields. The API stores
/// tags as a comma-separated string, so they are sent verbatim.
fn project_form_fields(form: &ProjectForm) -> Result<Vec<(&'static str, String)>, String> {
    require_all(&[
        ("Title", form.title.as_str()),
        ("Tagline", form.tagline.as_str()),
        ("Tags", form.tags.as_str()),
        ("Project link", form.link.as_str()),
        ("Repository link", form.repo.as_str()),
    ])?;
    Ok(vec![
        ("title", form.title.trim().to_owned()),
        ("tagline", form.tagline.trim().to_owned()),
        ("tags", form.tags.trim().to_owned()),
        ("link", form.link.trim().to_owned()),
        ("repo", form.repo.trim().to_owned()),
    ])
}

#[component]
pub fn ProjectsAdminPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let projects = RwSignal::new(Vec::<Project>::new());
    let loading = RwSignal::new(false);
    let form = RwSignal::new(ProjectForm::default());
    let editing = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let confirm_delete = RwSignal::new(None::<String>);
    let image_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let fetch_projects = move || {
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::content::fetch_projects().await {
                    Ok(items) => {
                        let _ = projects.try_set(items);
                    }
                    Err(err) => {
                        let _ = projects.try_set(Vec::new());
                        let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to fetch projects")));
                    }
                }
                let _ = loading.try_set(false);
            });
        }
    };

    Effect::new(move || fetch_projects());

    let reset_form = move || {
        form.set(ProjectForm::default());
        editing.set(None);
        #[cfg(feature = "hydrate")]
        if let Some(el) = image_input.get_untracked() {
            el.set_value("");
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let fields = match project_form_fields(&form.get()) {
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
                let file = image_input
                    .get_untracked()
                    .and_then(|el| el.files())
                    .and_then(|list| list.get(0));
                let outcome = async {
                    let body = crate::net::api::multipart(&fields, file.as_ref().map(|f| ("image", f)))?;
                    match &edit_id {
                        Some(id) => crate::net::content::update_project(id, body).await,
                        None => crate::net::content::create_project(body).await,
                    }
                }
                .await;

                match outcome {
                    Ok(_) => {
                        let updated = edit_id.is_some();
                        let _ = form.try_set(ProjectForm::default());
                        let _ = editing.try_set(None);
                        if let Some(el) = image_input.get_untracked() {
                            el.set_value("");
                        }
                        let _ = ui.try_update(|u| {
                            u.notify_success(if updated { "Project updated" } else { "Project added" });
                        });
                        fetch_projects();
                    }
                    Err(err) => {
                        let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to save project")));
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

    let on_edit = move |project: &Project| {
        form.set(ProjectForm::from_project(project));
        editing.set(Some(project.id.clone()));
    };

    let on_delete_confirmed = Callback::new(move |()| {
        let Some(id) = confirm_delete.get_untracked() else {
            return;
        };
        confirm_delete.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::content::delete_project(&id).await {
                Ok(_) => {
                    let _ = ui.try_update(|u| u.notify_success("Project deleted"));
                    fetch_projects();
                }
                Err(err) => {
                    let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to delete project")));
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
            <h1 class="admin-page__title">"Manage Projects"</h1>

            <form class="panel panel__form" on:submit=on_submit>
                <h2 class="panel__title">
                    {move || if editing.get().is_some() { "Edit Project" } else { "Add New Project" }}
                </h2>
                <div class="panel__grid">
                    <input
                        class="panel__input"
                        type="text"
                        placeholder="Project Title"
                        prop:value=move || form.get().title
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                    <input
                        class="panel__input"
                        type="text"
                        placeholder="Tagline"
                        prop:value=move || form.get().tagline
                        on:input=move |ev| form.update(|f| f.tagline = event_target_value(&ev))
                    />
                    <input
                        class="panel__input"
                        type="text"
                        placeholder="Tags (comma separated)"
                        prop:value=move || form.get().tags
                        on:input=move |ev| form.update(|f| f.tags = event_target_value(&ev))
                    />
                    <input
                        class="panel__input"
                        type="text"
                        placeholder="Project Link"
                        prop:value=move || form.get().link
                        on:input=move |ev| form.update(|f| f.link = event_target_value(&ev))
                    />
                    <input
                        class="panel__input"
                        type="text"
                        placeholder="Repository Link"
                        prop:value=move || form.get().repo
                        on:input=move |ev| form.update(|f| f.repo = event_target_value(&ev))
                    />
                    <input class="panel__input" type="file" accept="image/*" node_ref=image_input/>
                </div>
                <div class="panel__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || {
                            if submitting.get() {
                                "Saving..."
                            } else if editing.get().is_some() {
                                "Update Project"
                            } else {
                                "Add Project"
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

            <h2 class="admin-page__subtitle">"Project List"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <Show
                    when=move || !projects.get().is_empty()
                    fallback=|| view! { <p>"No projects found."</p> }
                >
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Tagline"</th>
                                <th>"Tags"</th>
                                <th>"Links"</th>
                                <th>"Action"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                projects
                                    .get()
                                    .into_iter()
                                    .map(|project| {
                                        let edit_target = project.clone();
                                        let delete_id = project.id.clone();
                                        view! {
                                            <tr>
                                                <td>{project.title.clone()}</td>
                                                <td>{project.tagline.clone()}</td>
                                                <td>{join_list(&project.tags)}</td>
                                                <td>
                                                    <a href=project.link.clone() target="_blank" rel="noreferrer">
                                                        "Live"
                                                    </a>
                                                    " | "
                                                    <a href=project.repo.clone() target="_blank" rel="noreferrer">
                                                        "Repo"
                                                    </a>
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
                    title="Delete Project"
                    message="This will permanently remove the project and its image."
                    on_confirm=on_delete_confirmed
                    on_cancel=Callback::new(move |()| confirm_delete.set(None))
                />
            </Show>
        </div>
    }
}
