//! Public portfolio page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the content slots hydrated at application start. Every section
//! degrades on its own: while its fetch is pending it shows a loading line,
//! on failure it shows its fallback, and the rest of the page is unaffected.

use leptos::prelude::*;

use crate::net::types::ContactMessagePayload;
use crate::state::content::ContentState;

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

/// Raw input state of the public contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    rating: String,
}

fn validate_contact_form(form: &ContactForm) -> Result<ContactMessagePayload, String> {
    crate::util::form::require_all(&[
        ("Name", form.name.as_str()),
        ("Email", form.email.as_str()),
        ("Subject", form.subject.as_str()),
        ("Message", form.message.as_str()),
    ])?;
    Ok(ContactMessagePayload {
        name: form.name.trim().to_owned(),
        email: form.email.trim().to_owned(),
        subject: form.subject.trim().to_owned(),
        message: form.message.trim().to_owned(),
        rating: form.rating.trim().to_owned(),
    })
}

const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "#home"),
    ("About", "#about"),
    ("Services", "#services"),
    ("Skills", "#skills"),
    ("Projects", "#projects"),
    ("Experience", "#experience"),
    ("Testimonials", "#testimonials"),
    ("Contact", "#contact"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="home__nav">
                <span class="home__brand">"Portfolio"</span>
                <nav>
                    {NAV_ITEMS
                        .iter()
                        .map(|(label, anchor)| view! { <a class="home__nav-link" href=*anchor>{*label}</a> })
                        .collect::<Vec<_>>()}
                </nav>
                <a class="home__admin-link" href="/login">"Admin"</a>
            </header>

            <HeroSection/>
            <AboutSection/>
            <ServicesSection/>
            <SkillsSection/>
            <ProjectsSection/>
            <ExperienceSection/>
            <TestimonialsSection/>
            <ContactSection/>

            <footer class="home__footer">
                <p>"Built and maintained by one very caffeinated engineer."</p>
            </footer>
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();

    view! {
        <section id="home" class="hero">
            {move || {
                let slot = content.get().hero;
                if slot.pending() {
                    view! { <p class="section-status">"Loading..."</p> }.into_any()
                } else if slot.failed() {
                    view! {
                        <p class="section-status section-status--error">
                            "The hero banner is unavailable right now."
                        </p>
                    }
                        .into_any()
                } else if let Some(hero) = slot.value {
                    view! {
                        <div class="hero__inner">
                            <p class="hero__eyebrow">"Hello, I am"</p>
                            <h1 class="hero__name">{hero.name.clone()}</h1>
                            <h2 class="hero__title">{hero.title.clone()}</h2>
                            <p class="hero__description">{hero.description.clone()}</p>
                            <ul class="hero__skills">
                                {hero
                                    .skills
                                    .iter()
                                    .map(|skill| view! { <li class="badge">{skill.clone()}</li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                            <div class="hero__stats">
                                {hero
                                    .stats
                                    .iter()
                                    .map(|stat| {
                                        view! {
                                            <div class="stat-card">
                                                <span class="stat-card__value">{stat.value.clone()}</span>
                                                <span class="stat-card__label">{stat.label.clone()}</span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                            {hero
                                .image
                                .map(|image| view! { <img class="hero__image" src=image.url alt=hero.name.clone()/> })}
                        </div>
                    }
                        .into_any()
                } else {
                    view! { <p class="section-status">"Nothing published yet."</p> }.into_any()
                }
            }}
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();

    view! {
        <section id="about" class="section about">
            <h2 class="section__title">"About"</h2>
            {move || {
                let slot = content.get().about;
                if slot.pending() {
                    view! { <p class="section-status">"Loading..."</p> }.into_any()
                } else if slot.failed() {
                    view! { <p class="section-status section-status--error">"About cards are unavailable right now."</p> }
                        .into_any()
                } else {
                    view! {
                        <div class="about__cards">
                            {slot
                                .value
                                .iter()
                                .map(|card| {
                                    view! {
                                        <article class="card">
                                            <h3 class="card__title">{card.title.clone()}</h3>
                                            <p class="card__text">{card.text.clone()}</p>
                                        </article>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn ServicesSection() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();

    view! {
        <section id="services" class="section services">
            <h2 class="section__title">"Services"</h2>
            {move || {
                let slot = content.get().services;
                if slot.pending() {
                    view! { <p class="section-status">"Loading..."</p> }.into_any()
                } else if slot.failed() {
                    view! { <p class="section-status section-status--error">"Services are unavailable right now."</p> }
                        .into_any()
                } else {
                    view! {
                        <div class="services__grid">
                            {slot
                                .value
                                .iter()
                                .map(|service| {
                                    view! {
                                        <article class="card">
                                            <span class="card__icon">{service.icon.clone()}</span>
                                            <h3 class="card__title">{service.title.clone()}</h3>
                                            <p class="card__text">{service.desc.clone()}</p>
                                        </article>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn SkillsSection() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();

    view! {
        <section id="skills" class="section skills">
            <h2 class="section__title">"Skills"</h2>
            {move || {
                let slot = content.get().skills;
                if slot.pending() {
                    view! { <p class="section-status">"Loading..."</p> }.into_any()
                } else if slot.failed() {
                    view! { <p class="section-status section-status--error">"Skills are unavailable right now."</p> }
                        .into_any()
                } else {
                    view! {
                        <ul class="skills__list">
                            {slot
                                .value
                                .iter()
                                .map(|skill| {
                                    let width = format!("width: {}%", skill.level.trim_end_matches('%'));
                                    view! {
                                        <li class="skills__item">
                                            <span class="skills__name">{skill.name.clone()}</span>
                                            <div class="skills__bar">
                                                <div class="skills__bar-fill" style=width></div>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn ProjectsSection() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();

    view! {
        <section id="projects" class="section projects">
            <h2 class="section__title">"Projects"</h2>
            {move || {
                let slot = content.get().projects;
                if slot.pending() {
                    view! { <p class="section-status">"Loading..."</p> }.into_any()
                } else if slot.failed() {
                    view! { <p class="section-status section-status--error">"Projects are unavailable right now."</p> }
                        .into_any()
                } else if slot.value.is_empty() {
                    view! { <p class="section-status">"No projects published yet."</p> }.into_any()
                } else {
                    view! {
                        <div class="projects__grid">
                            {slot
                                .value
                                .iter()
                                .map(|project| {
                                    view! {
                                        <article class="card project-card">
                                            {project
                                                .image
                                                .clone()
                                                .map(|image| {
                                                    view! {
                                                        <img
                                                            class="project-card__image"
                                                            src=image.url
                                                            alt=project.title.clone()
                                                        />
                                                    }
                                                })}
                                            <h3 class="card__title">{project.title.clone()}</h3>
                                            <p class="card__text">{project.tagline.clone()}</p>
                                            <ul class="project-card__tags">
                                                {project
                                                    .tags
                                                    .iter()
                                                    .map(|tag| view! { <li class="badge">{tag.clone()}</li> })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                            <div class="project-card__links">
                                                <a href=project.link.clone() target="_blank" rel="noreferrer">
                                                    "Live"
                                                </a>
                                                <a href=project.repo.clone() target="_blank" rel="noreferrer">
                                                    "Repo"
                                                </a>
                                            </div>
                                        </article>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn ExperienceSection() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();

    view! {
        <section id="experience" class="section experience">
            <h2 class="section__title">"Experience"</h2>
            {move || {
                let slot = content.get().experiences;
                if slot.pending() {
                    view! { <p class="section-status">"Loading..."</p> }.into_any()
                } else if slot.failed() {
                    view! { <p class="section-status section-status--error">"Experience is unavailable right now."</p> }
                        .into_any()
                } else {
                    view! {
                        <ol class="experience__timeline">
                            {slot
                                .value
                                .iter()
                                .map(|entry| {
                                    view! {
                                        <li class="experience__entry">
                                            <h3 class="experience__role">{entry.role.clone()}</h3>
                                            <p class="experience__company">
                                                {entry.company.clone()} " · " {entry.period.clone()}
                                            </p>
                                            <ul class="experience__points">
                                                {entry
                                                    .points
                                                    .iter()
                                                    .map(|point| view! { <li>{point.clone()}</li> })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ol>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn TestimonialsSection() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();

    view! {
        <section id="testimonials" class="section testimonials">
            <h2 class="section__title">"Testimonials"</h2>
            {move || {
                let slot = content.get().testimonials;
                if slot.pending() {
                    view! { <p class="section-status">"Loading..."</p> }.into_any()
                } else if slot.failed() {
                    view! { <p class="section-status section-status--error">"Testimonials are unavailable right now."</p> }
                        .into_any()
                } else {
                    view! {
                        <div class="testimonials__grid">
                            {slot
                                .value
                                .iter()
                                .map(|quote| {
                                    view! {
                                        <figure class="card testimonial-card">
                                            {quote
                                                .image
                                                .clone()
                                                .map(|image| {
                                                    view! {
                                                        <img
                                                            class="testimonial-card__avatar"
                                                            src=image.url
                                                            alt=quote.name.clone()
                                                        />
                                                    }
                                                })}
                                            <blockquote>{quote.quote.clone()}</blockquote>
                                            <figcaption>
                                                {quote.name.clone()} " — " {quote.title.clone()}
                                            </figcaption>
                                        </figure>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();

    let form = RwSignal::new(ContactForm::default());
    let status = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let payload = match validate_contact_form(&form.get()) {
            Ok(payload) => payload,
            Err(message) => {
                status.set(message);
                return;
            }
        };
        submitting.set(true);
        status.set("Sending...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::content::create_contact_message(&payload).await {
                Ok(_) => {
                    let _ = form.try_set(ContactForm::default());
                    let _ = status.try_set("Thanks! Your message is on its way.".to_owned());
                }
                Err(err) => {
                    let _ = status.try_set(err.message_or("Could not send your message. Please try again."));
                }
            }
            let _ = submitting.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    };

    view! {
        <section id="contact" class="section contact">
            <h2 class="section__title">"Contact"</h2>

            {move || {
                let slot = content.get().contact_info;
                if slot.pending() {
                    view! { <p class="section-status">"Loading..."</p> }.into_any()
                } else if slot.failed() {
                    view! { <p class="section-status section-status--error">"Contact details are unavailable right now."</p> }
                        .into_any()
                } else if let Some(details) = slot.value.first().cloned() {
                    view! {
                        <div class="contact__details">
                            <p class="contact__line">{details.email.clone()}</p>
                            <p class="contact__line">{details.phone.clone()}</p>
                            <p class="contact__line">{details.location.clone()}</p>
                            {details
                                .resume
                                .map(|resume| {
                                    view! {
                                        <a class="btn contact__resume" href=resume target="_blank" rel="noreferrer">
                                            "Download Resume"
                                        </a>
                                    }
                                })}
                        </div>
                    }
                        .into_any()
                } else {
                    view! { <p class="section-status">"No contact details published yet."</p> }.into_any()
                }
            }}

            {move || {
                let slot = content.get().social;
                if slot.pending() || slot.failed() {
                    // Social links are decorative; show nothing until they load.
                    ().into_any()
                } else {
                    let socials = slot.value;
                    let links = [
                        ("GitHub", socials.github),
                        ("LinkedIn", socials.linkedin),
                        ("Instagram", socials.instagram),
                        ("WhatsApp", socials.whatsapp),
                        ("X", socials.x),
                    ];
                    view! {
                        <ul class="contact__socials">
                            {links
                                .into_iter()
                                .filter(|(_, url)| !url.is_empty())
                                .map(|(label, url)| {
                                    view! {
                                        <li>
                                            <a href=url target="_blank" rel="noreferrer">{label}</a>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }
            }}

            <form class="contact__form" on:submit=on_submit>
                <input
                    class="contact__input"
                    type="text"
                    placeholder="Your name"
                    prop:value=move || form.get().name
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <input
                    class="contact__input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || form.get().email
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <input
                    class="contact__input"
                    type="text"
                    placeholder="Subject"
                    prop:value=move || form.get().subject
                    on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                />
                <textarea
                    class="contact__input contact__input--message"
                    placeholder="Your message"
                    prop:value=move || form.get().message
                    on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                ></textarea>
                <input
                    class="contact__input"
                    type="text"
                    placeholder="Rate this portfolio 1-5 (optional)"
                    prop:value=move || form.get().rating
                    on:input=move |ev| form.update(|f| f.rating = event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                </button>
                <Show when=move || !status.get().is_empty()>
                    <p class="contact__status">{move || status.get()}</p>
                </Show>
            </form>
        </section>
    }
}
