use crate::config::ViewerConfig;
use crate::dom::Dom;
use crate::error::UiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerMode {
    #[default]
    Fit,
    Fill,
    Zoom,
}

impl ViewerMode {
    /// Unknown or missing modes fall back to `Fit`.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("fill") => ViewerMode::Fill,
            Some("zoom") => ViewerMode::Zoom,
            _ => ViewerMode::Fit,
        }
    }

    /// `Fit` is the unstyled default and has no class.
    pub fn class<'a>(&self, cfg: &'a ViewerConfig) -> Option<&'a str> {
        match self {
            ViewerMode::Fit => None,
            ViewerMode::Fill => Some(cfg.fill_class.as_str()),
            ViewerMode::Zoom => Some(cfg.zoom_class.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    ImageSwapped(String),
    /// A thumbnail was hit but the main image or its source was missing.
    ImageSkipped,
    ModeSelected {
        mode: ViewerMode,
        container_found: bool,
    },
    Ignored,
}

/// Delegated click handling for the product detail image viewer.
#[derive(Clone)]
pub struct ImageViewer<D: Dom> {
    dom: D,
    cfg: ViewerConfig,
}

impl<D: Dom> ImageViewer<D> {
    pub fn new(dom: D, cfg: ViewerConfig) -> Self {
        Self { dom, cfg }
    }

    /// Thumbnails are checked before mode buttons.
    pub fn handle_click(&self, target: &D::Element) -> Result<ClickOutcome, UiError> {
        if let Some(thumb) = self.dom.closest(target, &self.cfg.thumbnail_selector)? {
            return self.select_thumbnail(&thumb);
        }
        if let Some(button) = self.dom.closest(target, &self.cfg.mode_button_selector)? {
            return self.select_mode(&button);
        }
        Ok(ClickOutcome::Ignored)
    }

    pub fn select_thumbnail(&self, thumb: &D::Element) -> Result<ClickOutcome, UiError> {
        let src = self
            .dom
            .attribute(thumb, &self.cfg.thumbnail_source_attribute)
            .filter(|src| !src.is_empty());
        let main = self.dom.by_id(&self.cfg.main_image_id);
        match (main, src) {
            (Some(main), Some(src)) => {
                self.dom.set_image_source(&main, &src)?;
                Ok(ClickOutcome::ImageSwapped(src))
            }
            (None, _) => {
                log::debug!("no #{} on page", self.cfg.main_image_id);
                Ok(ClickOutcome::ImageSkipped)
            }
            (_, None) => {
                log::debug!("thumbnail has no {}", self.cfg.thumbnail_source_attribute);
                Ok(ClickOutcome::ImageSkipped)
            }
        }
    }

    pub fn select_mode(&self, button: &D::Element) -> Result<ClickOutcome, UiError> {
        let mode = ViewerMode::parse(
            self.dom
                .attribute(button, &self.cfg.mode_attribute)
                .as_deref(),
        );

        let container = self.dom.select(&self.cfg.container_selector)?;
        if let Some(container) = &container {
            self.dom.remove_class(container, &self.cfg.fill_class)?;
            self.dom.remove_class(container, &self.cfg.zoom_class)?;
            if let Some(class) = mode.class(&self.cfg) {
                self.dom.add_class(container, class)?;
            }
        } else {
            log::debug!("no {} on page", self.cfg.container_selector);
        }

        for other in self.dom.select_all(&self.cfg.mode_button_selector)? {
            self.dom.remove_class(&other, &self.cfg.active_class)?;
        }
        self.dom.add_class(button, &self.cfg.active_class)?;

        Ok(ClickOutcome::ModeSelected {
            mode,
            container_found: container.is_some(),
        })
    }
}
