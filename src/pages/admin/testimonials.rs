//! Admin screen for managing testimonials.
//!
//! The API supports create and delete only; editing a testimonial means
//! deleting and re-adding it.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::Testimonial;
use crate::state::ui::UiState;
use crate::util::form::require_all;

#[cfg(test)]
#[path = "testimonials_test.rs"]
mod testimonials_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct TestimonialForm {
    name: String,
    title: String,
    quote: String,
}

fn testimonial_form_fields(form: &TestimonialForm) -> Result<Vec<(&'static str, String)>, String> {
    require_all(&[
        ("Name", form.name.as_str()),
        ("Title", form.title.as_str()),
        ("Quote", form.quote.as_str()),
    ])?;
    Ok(vec![
        ("name", form.name.trim().to_owned()),
        ("title", form.title.trim().to_owned()),
        ("quote", form.quote.trim().to_owned()),
    ])
}

#[component]
pub fn TestimonialsAdminPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let testimonials = RwSignal::new(Vec::<Testimonial>::new());
    let loading = RwSignal::new(false);
    let form = RwSignal::new(TestimonialForm::default());
    let submitting = RwSignal::new(false);
    let confirm_delete = RwSignal::new(None::<String>);
    let image_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let fetch_testimonials = move || {
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::content::fetch_testimonials().await {
                    Ok(items) => {
                        let _ = testimonials.try_set(items);
                    }
                    Err(err) => {
                        let _ = testimonials.try_set(Vec::new());
                        let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to fetch testimonials")));
                    }
                }
                let _ = loading.try_set(false);
            });
        }
    };

    Effect::new(move || fetch_testimonials());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let fields = match testimonial_form_fields(&form.get()) {
            Ok(fields) => fields,
            Err(message) => {
                ui.update(|u| u.notify_error(message));
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            submitting.set(true);
            leptos::task::spawn_local(async move {
                let file = image_input
                    .get_untracked()
                    .and_then(|el| el.files())
                    .and_then(|list| list.get(0));
                let outcome = async {
                    let body = crate::net::api::multipart(&fields, file.as_ref().map(|f| ("image", f)))?;
                    crate::net::content::create_testimonial(body).await
                }
                .await;

                match outcome {
                    Ok(_) => {
                        let _ = form.try_set(TestimonialForm::default());
                        if let Some(el) = image_input.get_untracked() {
                            el.set_value("");
                        }
                        let _ = ui.try_update(|u| u.notify_success("Testimonial added"));
                        fetch_testimonials();
                    }
                    Err(err) => {
                        let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to save testimonial")));
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

    let on_delete_confirmed = Callback::new(move |()| {
        let Some(id) = confirm_delete.get_untracked() else {
            return;
        };
        confirm_delete.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::content::delete_testimonial(&id).await {
                Ok(_) => {
                    let _ = ui.try_update(|u| u.notify_success("Testimonial deleted"));
                    fetch_testimonials();
                }
                Err(err) => {
                    let _ = ui.try_update(|u| u.notify_error(err.message_or("Failed to delete testimonial")));
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
            <h1 class="admin-page__title">"Manage Testimonials"</h1>

            <form class="panel panel__form" on:submit=on_submit>
                <h2 class="panel__title">"Add Testimonial"</h2>
                <div class="panel__grid">
                    <input
                        class="panel__input"
                        type="text"
                        placeholder="Author name"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <input
                        class="panel__input"
                        type="text"
                        placeholder="Author role / company"
                        prop:value=move || form.get().title
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                    <textarea
                        class="panel__input"
                        placeholder="Quote"
                        prop:value=move || form.get().quote
                        on:input=move |ev| form.update(|f| f.quote = event_target_value(&ev))
                    ></textarea>
                    <input class="panel__input" type="file" accept="image/*" node_ref=image_input/>
                </div>
                <div class="panel__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Saving..." } else { "Add Testimonial" }}
                    </button>
                </div>
            </form>

            <h2 class="admin-page__subtitle">"Testimonial List"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <Show
                    when=move || !testimonials.get().is_empty()
                    fallback=|| view! { <p>"No testimonials found."</p> }
                >
                    <div class="admin-cards">
                        {move || {
                            testimonials
                                .get()
                                .into_iter()
                                .map(|entry| {
                                    let delete_id = entry.id.clone();
                                    view! {
                                        <figure class="card testimonial-card">
                                            <blockquote>{entry.quote.clone()}</blockquote>
                                            <figcaption>
                                                {entry.name.clone()} " — " {entry.title.clone()}
                                            </figcaption>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| confirm_delete.set(Some(delete_id.clone()))
                                            >
                                                "Delete"
                                            </button>
                                        </figure>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>

            <Show when=move || confirm_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete Testimonial"
                    message="This will permanently remove the testimonial."
                    on_confirm=on_delete_confirmed
                    on_cancel=Callback::new(move |()| confirm_delete.set(None))
                />
            </Show>
        </div>
    }
}
