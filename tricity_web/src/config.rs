//! Reads `window.SITE_CONFIG`, an optional object the page can define
//! before loading the module.
use tricity::config::SiteConfig;
use tricity::console;
use wasm_bindgen::prelude::*;

/// Get SITE_CONFIG from the window object as JsValue
pub fn get_site_config_value() -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str("SITE_CONFIG")).ok()?;

    if value.is_undefined() || value.is_null() {
        return None;
    }

    Some(value)
}

/// Site configuration, falling back to defaults when the page defines none
/// or defines one that does not parse.
pub fn load_site_config() -> SiteConfig {
    let Some(value) = get_site_config_value() else {
        return SiteConfig::default();
    };

    // Round-trip through JSON so serde applies the defaults for missing keys.
    let Some(json) = js_sys::JSON::stringify(&value)
        .ok()
        .and_then(|json| json.as_string())
    else {
        console::error("SITE_CONFIG is not serializable; using defaults");
        return SiteConfig::default();
    };

    SiteConfig::from_json(&json).unwrap_or_else(|e| {
        console::error(&format!("Invalid SITE_CONFIG ({e}); using defaults"));
        SiteConfig::default()
    })
}
