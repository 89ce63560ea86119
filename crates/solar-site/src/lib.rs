//! Solar Landing Site
//!
//! Leptos application for the landing page. The `ssr` feature builds the
//! axum server in `main.rs`; the `hydrate` feature builds the wasm bundle
//! that makes the calculator and the lead form interactive.

pub mod app;
mod components;
mod pages;
pub mod site;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::*;

    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    match site::Site::load() {
        Ok(site) => mount_to_body(move || {
            provide_context(site);
            view! { <app::App/> }
        }),
        Err(err) => tracing::error!("Invalid site configuration: {}", err),
    }
}
