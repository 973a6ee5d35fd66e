use std::fmt;

use crate::config::ThemeConfig;
use crate::dom::Dom;
use crate::error::UiError;
use crate::utils::storage::KeyValueStore;

pub const SYSTEM_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Dark shows the sun, light shows the moon.
    pub fn glyph<'a>(&self, cfg: &'a ThemeConfig) -> &'a str {
        match self {
            Theme::Dark => cfg.dark_glyph.as_str(),
            Theme::Light => cfg.light_glyph.as_str(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Applies the theme to the root element and the toggle icon, and writes
/// every change through to storage.
#[derive(Clone)]
pub struct ThemeController<D: Dom, S: KeyValueStore> {
    dom: D,
    store: S,
    cfg: ThemeConfig,
    system: Theme,
}

impl<D: Dom, S: KeyValueStore> ThemeController<D, S> {
    pub fn new(dom: D, store: S, cfg: ThemeConfig, system_prefers_dark: bool) -> Self {
        Self {
            dom,
            store,
            cfg,
            system: Theme::from_system(system_prefers_dark),
        }
    }

    pub fn toggle_button(&self) -> Option<D::Element> {
        self.dom.by_id(&self.cfg.toggle_id)
    }

    pub fn initial_theme(&self) -> Theme {
        match self.store.get(&self.cfg.storage_key) {
            Ok(Some(saved)) => match Theme::parse(&saved) {
                Some(theme) => theme,
                None => {
                    log::debug!("ignoring stored theme {:?}", saved);
                    self.system
                }
            },
            Ok(None) => self.system,
            Err(err) => {
                log::warn!("could not read theme preference: {}", err);
                self.system
            }
        }
    }

    /// Applies the initial theme without persisting it.
    pub fn init(&self) -> Result<Theme, UiError> {
        let theme = self.initial_theme();
        self.apply_root(theme)?;
        self.apply_icon(theme);
        Ok(theme)
    }

    /// The theme on the root element. Absent or empty means the system
    /// preference; anything other than `dark` reads as light.
    pub fn current(&self) -> Theme {
        let attr = self
            .dom
            .root()
            .and_then(|root| self.dom.attribute(&root, &self.cfg.root_attribute))
            .filter(|value| !value.is_empty());
        match attr.as_deref() {
            Some("dark") => Theme::Dark,
            Some(_) => Theme::Light,
            None => self.system,
        }
    }

    pub fn toggle(&self) -> Result<Theme, UiError> {
        let next = self.current().toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    /// The stored value follows the root attribute even when the icon
    /// cannot be updated.
    pub fn set_theme(&self, theme: Theme) -> Result<(), UiError> {
        self.apply_root(theme)?;
        if let Err(err) = self.store.set(&self.cfg.storage_key, theme.as_str()) {
            log::warn!("could not persist theme preference: {}", err);
        }
        self.apply_icon(theme);
        Ok(())
    }

    fn apply_root(&self, theme: Theme) -> Result<(), UiError> {
        let root = self.dom.root().ok_or(UiError::NoDocument)?;
        self.dom
            .set_attribute(&root, &self.cfg.root_attribute, theme.as_str())
    }

    fn apply_icon(&self, theme: Theme) {
        let button = match self.toggle_button() {
            Some(button) => button,
            None => return,
        };
        match self.dom.select_within(&button, &self.cfg.icon_selector) {
            Ok(Some(icon)) => self.dom.set_text(&icon, theme.glyph(&self.cfg)),
            Ok(None) => {}
            Err(err) => log::warn!("theme icon not updated: {}", err),
        }
    }
}
