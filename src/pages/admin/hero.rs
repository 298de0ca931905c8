//! Admin screen for the hero banner.
//!
//! The hero is a single document: the screen creates it on first save and
//! updates it in place afterwards. Skills are entered comma-separated and
//! stats as a JSON list, both sent as JSON strings in the multipart body.

use leptos::prelude::*;

use crate::net::types::{HeroContent, HeroStat};
use crate::state::ui::UiState;
use crate::util::form::{join_list, require_all, split_list};

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct HeroForm {
    name: String,
    title: String,
    description: String,
    skills: String,
    stats: String,
}

impl HeroForm {
    fn from_hero(hero: &HeroContent) -> Self {
        Self {
            name: hero.name.clone(),
            title: hero.title.clone(),
            description: hero.description.clone(),
            skills: join_list(&hero.skills),
            stats: serde_json::to_string(&hero.stats).unwrap_or_else(|_| "[]".to_owned()),
        }
    }
}

fn hero_form_fields(form: &HeroForm) -> Result<Vec<(&'static str, String)>, String> {
    require_all(&[
        ("Name", form.name.as_str()),
        ("Title", form.title.as_str()),
        ("Description", form.description.as_str()),
    ])?;

    let skills = split_list(&form.skills);
    let skills_json =
        serde_json::to_string(&skills).map_err(|_| "Skills could not be encoded".to_owned())?;

    let stats_input = form.stats.trim();
    let stats_json = if stats_input.is_empty() {
        "[]".to_owned()
    } else {
        let stats: Vec<HeroStat> = serde_json::from_str(stats_input)
            .map_err(|_| "Stats must be a JSON list of {\"label\", \"value\"} objects".to_owned())?;
        serde_json::to_string(&stats).map_err(|_| "Stats could not be encoded".to_owned())?
    };

    Ok(vec![
        ("name", form.name.trim().to_owned()),
        ("title", form.title.trim().to_owned()),
        ("description", form.description.trim().to_owned()),
        ("skills", skills_json),
        ("stats", stats_json),
    ])
}

#[component]
pub fn HeroAdminPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let hero = RwSignal::new(None::<HeroContent>);
    let loading = RwSignal::new(false);
    let form = RwSignal::new(HeroForm::default());
    let submitting = RwSignal::new(false);
    let image_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let fetch_hero = move || {
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::content::fetch_hero().await {
                    Ok(current) => {
                        if let Some(current) = &current {
                            let _ = form.try_set(HeroForm::from_hero(current));
                        }
                        let _ = hero.try_set(current);
                    }
                    Err(err) => {
                        let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to fetch hero content")));
                    }
                }
                let _ = loading.try_set(false);
            });
        }
    };

    Effect::new(move || fetch_hero());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let fields = match hero_form_fields(&form.get()) {
            Ok(fields) => fields,
            Err(message) => {
                ui.update(|u| u.notify_error(message));
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            submitting.set(true);
            let hero_id = hero.get_untracked().map(|current| current.id);
            leptos::task::spawn_local(async move {
                let file = image_input
                    .get_untracked()
                    .and_then(|el| el.files())
                    .and_then(|list| list.get(0));
                let outcome = async {
                    let body = crate::net::api::multipart(&fields, file.as_ref().map(|f| ("image", f)))?;
                    match &hero_id {
                        Some(id) => crate::net::content::update_hero(id, body).await,
                        None => crate::net::content::create_hero(body).await,
                    }
                }
                .await;

                match outcome {
                    Ok(_) => {
                        let existed = hero_id.is_some();
                        if let Some(el) = image_input.get_untracked() {
                            el.set_value("");
                        }
                        let _ = ui.try_update(|u| {
                            u.notify_success(if existed { "Hero updated" } else { "Hero published" });
                        });
                        fetch_hero();
                    }
                    Err(err) => {
                        let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to save hero content")));
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

    view! {
        <div class="admin-page">
            <h1 class="admin-page__title">"Manage Hero Banner"</h1>

            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <form class="panel panel__form" on:submit=on_submit>
                    <h2 class="panel__title">
                        {move || if hero.get().is_some() { "Edit Hero" } else { "Publish Hero" }}
                    </h2>
                    <div class="panel__grid">
                        <input
                            class="panel__input"
                            type="text"
                            placeholder="Your name"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                        <input
                            class="panel__input"
                            type="text"
                            placeholder="Headline title"
                            prop:value=move || form.get().title
                            on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                        />
                        <textarea
                            class="panel__input"
                            placeholder="Short description"
                            prop:value=move || form.get().description
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        ></textarea>
                        <input
                            class="panel__input"
                            type="text"
                            placeholder="Skills (comma separated)"
                            prop:value=move || form.get().skills
                            on:input=move |ev| form.update(|f| f.skills = event_target_value(&ev))
                        />
                        <textarea
                            class="panel__input"
                            placeholder=r#"Stats as JSON, e.g. [{"label":"Years","value":"6+"}]"#
                            prop:value=move || form.get().stats
                            on:input=move |ev| form.update(|f| f.stats = event_target_value(&ev))
                        ></textarea>
                        <input class="panel__input" type="file" accept="image/*" node_ref=image_input/>
                    </div>
                    <div class="panel__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                            {move || {
                                if submitting.get() {
                                    "Saving..."
                                } else if hero.get().is_some() {
                                    "Update Hero"
                                } else {
                                    "Publish Hero"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </Show>

            <Show when=move || hero.get().is_some()>
                <section class="panel">
                    <h2 class="panel__title">"Current banner"</h2>
                    {move || {
                        hero.get()
                            .map(|current| {
                                view! {
                                    <div class="hero-preview">
                                        <p class="hero-preview__name">{current.name.clone()}</p>
                                        <p class="hero-preview__title">{current.title.clone()}</p>
                                        <p class="hero-preview__skills">{join_list(&current.skills)}</p>
                                        {current
                                            .image
                                            .map(|image| {
                                                view! {
                                                    <img
                                                        class="hero-preview__image"
                                                        src=image.url
                                                        alt="Hero image"
                                                    />
                                                }
                                            })}
                                    </div>
                                }
                            })
                    }}
                </section>
            </Show>
        </div>
    }
}
