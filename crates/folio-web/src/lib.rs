#[allow(clippy::unit_arg, clippy::unused_unit)]
mod app;
mod nav;
mod payment;
mod viewport;

use app::App;
use folio_core::Site;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
///
/// Called automatically when the module is loaded in the browser. Installs the
/// panic hook and console logging, loads the compiled-in site content and
/// mounts the app to the document body. Content that fails validation is
/// logged and nothing is mounted.
#[wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    match Site::embedded() {
        Ok(site) => {
            let site = Arc::new(site);
            leptos::mount::mount_to_body(move || view! { <App site=site/> });
        }
        Err(err) => tracing::error!(%err, "site content failed to load"),
    }
}
