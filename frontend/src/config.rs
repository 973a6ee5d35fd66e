use serde::Deserialize;

use crate::error::UiError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub log_level: String,
    pub theme: ThemeConfig,
    pub viewer: ViewerConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            theme: ThemeConfig::default(),
            viewer: ViewerConfig::default(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Falls back to `Info` for names `log` does not recognise.
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub root_attribute: String,
    pub toggle_id: String,
    pub icon_selector: String,
    pub dark_glyph: String,
    pub light_glyph: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".into(),
            root_attribute: "data-theme".into(),
            toggle_id: "themeToggle".into(),
            icon_selector: ".theme-toggle__icon".into(),
            dark_glyph: "\u{2600}".into(),
            light_glyph: "\u{263E}".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub thumbnail_selector: String,
    pub thumbnail_source_attribute: String,
    pub main_image_id: String,
    pub container_selector: String,
    pub mode_button_selector: String,
    pub mode_attribute: String,
    pub fill_class: String,
    pub zoom_class: String,
    pub active_class: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            thumbnail_selector: ".pd-thumb".into(),
            thumbnail_source_attribute: "data-src".into(),
            main_image_id: "pdMainImg".into(),
            container_selector: ".pd-main".into(),
            mode_button_selector: ".pd-viewerbtn".into(),
            mode_attribute: "data-mode".into(),
            fill_class: "is-fill".into(),
            zoom_class: "is-zoom".into(),
            active_class: "is-active".into(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{get, load, GLOBAL_KEY};

#[cfg(target_arch = "wasm32")]
mod web {
    use super::PageConfig;
    use crate::error::UiError;
    use std::sync::OnceLock;

    pub const GLOBAL_KEY: &str = "__CATALOG_UI_CONFIG";

    static PAGE_CONFIG: OnceLock<PageConfig> = OnceLock::new();

    fn snapshot_from_globals() -> Option<String> {
        // Optional global object: window.__CATALOG_UI_CONFIG = { viewer: { ... } }
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &GLOBAL_KEY.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        js_sys::JSON::stringify(&any).ok()?.as_string()
    }

    /// Reads the page override once. An invalid override leaves the cache
    /// empty so that [`get`] falls back to the defaults.
    pub fn load() -> Result<&'static PageConfig, UiError> {
        if let Some(cached) = PAGE_CONFIG.get() {
            return Ok(cached);
        }
        let cfg = match snapshot_from_globals() {
            Some(raw) => PageConfig::from_json(&raw)?,
            None => PageConfig::default(),
        };
        Ok(PAGE_CONFIG.get_or_init(|| cfg))
    }

    pub fn get() -> &'static PageConfig {
        PAGE_CONFIG.get_or_init(PageConfig::default)
    }
}
