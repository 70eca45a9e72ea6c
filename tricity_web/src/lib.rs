//! Browser entry point for the TriCity Builders site.
//!
//! Binds the DOM implementations of the `tricity` seams once the document is
//! ready: navigation (mobile menu, smooth scrolling, active links) and the
//! quote form.
#![allow(missing_docs)]

pub mod config;
pub mod dom;
pub mod fetch;
pub mod form;
pub mod navigation;
pub mod toast;

pub use js_sys;
pub use wasm_bindgen;
pub use web_sys;

use tricity::console;
use wasm_bindgen::prelude::*;

/// Attach every page behavior.
pub fn initialize() {
    let config = config::load_site_config();

    if let Err(e) = navigation::init_navigation(&config) {
        console::error(&format!(
            "Navigation setup failed: {}",
            dom::describe_js_error(&e)
        ));
    }

    if let Err(e) = form::init_form(&config) {
        console::error(&format!(
            "Quote form setup failed: {}",
            dom::describe_js_error(&e)
        ));
    }

    console::log("TriCity Builders website initialized");
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();

    let document = dom::document()?;

    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", |_event| initialize())?;
    } else {
        initialize();
    }

    Ok(())
}
