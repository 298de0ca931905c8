//! Root application component with routing, context providers, and the
//! startup data flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! On hydration the session store fires its one-time identity bootstrap and
//! the public content slots hydrate through independent concurrent fetches.
//! Protected routes render through `RouteGuard` and re-evaluate as those
//! fetches settle.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::notice::NoticeHost;
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
use crate::pages::admin;
use crate::state::{auth::AuthState, content::ContentState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, content, and UI contexts and sets up client-side
/// routing. The session signal has a single writer (the bootstrap below plus
/// the explicit login/logout flows); everything else only reads it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let content = RwSignal::new(ContentState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(content);
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);

        bootstrap_session(auth);
        hydrate_public_content(content);
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio-client.css"/>
        <Title text="Portfolio"/>

        <Router>
            <NoticeHost/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <ParentRoute path=StaticSegment("admin") view=admin::layout::AdminLayout>
                    <Route path=StaticSegment("") view=admin::dashboard::DashboardPage/>
                    <Route path=StaticSegment("dashboard") view=admin::dashboard::DashboardPage/>
                    <Route path=StaticSegment("hero") view=admin::hero::HeroAdminPage/>
                    <Route path=StaticSegment("aboutInfo") view=admin::about::AboutAdminPage/>
                    <Route path=StaticSegment("projects") view=admin::projects::ProjectsAdminPage/>
                    <Route path=StaticSegment("services") view=admin::services::ServicesAdminPage/>
                    <Route path=StaticSegment("skills") view=admin::skills::SkillsAdminPage/>
                    <Route path=StaticSegment("experience") view=admin::experience::ExperienceAdminPage/>
                    <Route path=StaticSegment("testimonials") view=admin::testimonials::TestimonialsAdminPage/>
                    <Route path=StaticSegment("contacts") view=admin::contacts::ContactsAdminPage/>
                    <Route path=StaticSegment("contactInfo") view=admin::contact_info::ContactInfoAdminPage/>
                    <Route path=StaticSegment("social") view=admin::social::SocialAdminPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Fire the one-time session bootstrap. Any failure degrades to anonymous;
/// `loading` clears on every path, so guards never hang in `Checking`.
#[cfg(feature = "hydrate")]
fn bootstrap_session(auth: RwSignal<AuthState>) {
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::fetch_identity().await;
        if let Err(err) = &outcome {
            log::warn!("identity check failed, continuing anonymous: {err}");
        }
        auth.update(|state| state.apply_bootstrap(outcome));
    });
}

/// Hydrate all public content sections concurrently.
///
/// Each section is its own task and settles its own slot, so one endpoint's
/// outage cannot blank unrelated sections. Writes go through `try_update`:
/// a result arriving after teardown is discarded.
#[cfg(feature = "hydrate")]
fn hydrate_public_content(content: RwSignal<ContentState>) {
    use crate::net::content as content_api;

    leptos::task::spawn_local(async move {
        let outcome = content_api::fetch_hero().await.map_err(|err| {
            log::warn!("hero fetch failed: {err}");
            err.to_string()
        });
        let _ = content.try_update(|c| c.hero.resolve(outcome));
    });

    leptos::task::spawn_local(async move {
        let outcome = content_api::fetch_about_cards().await.map_err(|err| {
            log::warn!("about fetch failed: {err}");
            err.to_string()
        });
        let _ = content.try_update(|c| c.about.resolve(outcome));
    });

    leptos::task::spawn_local(async move {
        let outcome = content_api::fetch_services().await.map_err(|err| {
            log::warn!("services fetch failed: {err}");
            err.to_string()
        });
        let _ = content.try_update(|c| c.services.resolve(outcome));
    });

    leptos::task::spawn_local(async move {
        let outcome = content_api::fetch_skills().await.map_err(|err| {
            log::warn!("skills fetch failed: {err}");
            err.to_string()
        });
        let _ = content.try_update(|c| c.skills.resolve(outcome));
    });

    leptos::task::spawn_local(async move {
        let outcome = content_api::fetch_projects().await.map_err(|err| {
            log::warn!("projects fetch failed: {err}");
            err.to_string()
        });
        let _ = content.try_update(|c| c.projects.resolve(outcome));
    });

    leptos::task::spawn_local(async move {
        let outcome = content_api::fetch_experiences().await.map_err(|err| {
            log::warn!("experience fetch failed: {err}");
            err.to_string()
        });
        let _ = content.try_update(|c| c.experiences.resolve(outcome));
    });

    leptos::task::spawn_local(async move {
        let outcome = content_api::fetch_testimonials().await.map_err(|err| {
            log::warn!("testimonials fetch failed: {err}");
            err.to_string()
        });
        let _ = content.try_update(|c| c.testimonials.resolve(outcome));
    });

    leptos::task::spawn_local(async move {
        let outcome = content_api::fetch_contact_details().await.map_err(|err| {
            log::warn!("contact info fetch failed: {err}");
            err.to_string()
        });
        let _ = content.try_update(|c| c.contact_info.resolve(outcome));
    });

    leptos::task::spawn_local(async move {
        let outcome = content_api::fetch_social_links().await.map_err(|err| {
            log::warn!("social links fetch failed: {err}");
            err.to_string()
        });
        let _ = content.try_update(|c| c.social.resolve(outcome));
    });
}
