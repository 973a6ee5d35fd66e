//! Browser bindings: the `web_sys` implementation of [`Dom`] and the
//! listener wiring run on page ready.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlImageElement, Window};

use crate::config::PageConfig;
use crate::dom::Dom;
use crate::error::UiError;
use crate::theme::{ThemeController, SYSTEM_DARK_QUERY};
use crate::utils::storage::{self, BrowserStore};
use crate::viewer::ImageViewer;

#[derive(Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Dom for WebDom {
    type Element = Element;

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn select(&self, selector: &str) -> Result<Option<Element>, UiError> {
        self.document.query_selector(selector).map_err(UiError::dom)
    }

    fn select_all(&self, selector: &str) -> Result<Vec<Element>, UiError> {
        let list = self
            .document
            .query_selector_all(selector)
            .map_err(UiError::dom)?;
        Ok((0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn select_within(&self, scope: &Element, selector: &str) -> Result<Option<Element>, UiError> {
        scope.query_selector(selector).map_err(UiError::dom)
    }

    fn closest(&self, element: &Element, selector: &str) -> Result<Option<Element>, UiError> {
        element.closest(selector).map_err(UiError::dom)
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) -> Result<(), UiError> {
        element.set_attribute(name, value).map_err(UiError::dom)
    }

    fn add_class(&self, element: &Element, class: &str) -> Result<(), UiError> {
        element.class_list().add_1(class).map_err(UiError::dom)
    }

    fn remove_class(&self, element: &Element, class: &str) -> Result<(), UiError> {
        element.class_list().remove_1(class).map_err(UiError::dom)
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn set_image_source(&self, element: &Element, src: &str) -> Result<(), UiError> {
        match element.dyn_ref::<HtmlImageElement>() {
            Some(img) => {
                img.set_src(src);
                Ok(())
            }
            None => self.set_attribute(element, "src", src),
        }
    }
}

fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), UiError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(UiError::dom)?;
    // page lifetime
    closure.forget();
    Ok(())
}

fn system_prefers_dark(window: &Window) -> bool {
    window
        .match_media(SYSTEM_DARK_QUERY)
        .ok()
        .flatten()
        .map(|list| list.matches())
        .unwrap_or(false)
}

/// Wires the theme toggle and the image viewer. A failure in one leaves the
/// other attached.
fn attach(window: &Window, document: &Document, cfg: &'static PageConfig) {
    let dom = WebDom::new(document.clone());

    let themes = ThemeController::new(
        dom.clone(),
        BrowserStore::open(),
        cfg.theme.clone(),
        system_prefers_dark(window),
    );
    let theme = match themes.init() {
        Ok(theme) => theme.as_str(),
        Err(err) => {
            log::warn!("initial theme not applied: {}", err);
            "unset"
        }
    };
    let toggle = themes.toggle_button();
    if let Some(button) = &toggle {
        let themes = themes.clone();
        let wired = listen(button, "click", move |_| match themes.toggle() {
            Ok(next) => log::debug!("theme switched to {}", next),
            Err(err) => log::warn!("theme toggle failed: {}", err),
        });
        if let Err(err) = wired {
            log::warn!("theme toggle not wired: {}", err);
        }
    }

    let viewer = ImageViewer::new(dom, cfg.viewer.clone());
    let wired = listen(document, "click", move |event| {
        let target = match event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
            Some(target) => target,
            None => return,
        };
        match viewer.handle_click(&target) {
            Ok(outcome) => log::debug!("viewer click: {:?}", outcome),
            Err(err) => log::warn!("viewer click failed: {}", err),
        }
    });
    if let Err(err) = wired {
        log::warn!("image viewer not wired: {}", err);
    }

    log::info!(
        "catalog page ready: theme={}, toggle={}",
        theme,
        if toggle.is_some() { "wired" } else { "absent" }
    );
}

/// Attaches both behaviours once the document has been parsed.
pub fn boot(cfg: &'static PageConfig) -> Result<(), UiError> {
    let window = storage::window()?;
    let document = window.document().ok_or(UiError::NoDocument)?;

    if document.ready_state() != "loading" {
        attach(&window, &document, cfg);
        return Ok(());
    }

    let doc = document.clone();
    let mut pending = Some(window);
    listen(&document, "DOMContentLoaded", move |_| {
        if let Some(window) = pending.take() {
            attach(&window, &doc, cfg);
        }
    })
}
