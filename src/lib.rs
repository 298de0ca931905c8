//! # portfolio-client
//!
//! Leptos + WASM single-page application for a personal portfolio site with
//! an authenticated admin dashboard. The public route renders content pulled
//! from the remote portfolio API; the `/admin` area exposes CRUD screens for
//! every content type behind a role-gated route guard.
//!
//! This crate contains pages, components, application state, the HTTP
//! gateway, and the access-control core (session store + route guard).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell into a live app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
