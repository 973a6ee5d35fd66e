//! The slice of the DOM the page behaviours touch.
//!
//! Selectors are plain CSS selector strings. Implementations only need to
//! understand the forms that `PageConfig` carries (`#id`, `.class`).

use crate::error::UiError;

pub trait Dom {
    type Element: Clone;

    /// `document.documentElement`.
    fn root(&self) -> Option<Self::Element>;

    fn by_id(&self, id: &str) -> Option<Self::Element>;

    fn select(&self, selector: &str) -> Result<Option<Self::Element>, UiError>;

    fn select_all(&self, selector: &str) -> Result<Vec<Self::Element>, UiError>;

    fn select_within(
        &self,
        scope: &Self::Element,
        selector: &str,
    ) -> Result<Option<Self::Element>, UiError>;

    /// The element itself or its nearest ancestor matching `selector`.
    fn closest(
        &self,
        element: &Self::Element,
        selector: &str,
    ) -> Result<Option<Self::Element>, UiError>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(
        &self,
        element: &Self::Element,
        name: &str,
        value: &str,
    ) -> Result<(), UiError>;

    fn add_class(&self, element: &Self::Element, class: &str) -> Result<(), UiError>;

    fn remove_class(&self, element: &Self::Element, class: &str) -> Result<(), UiError>;

    fn set_text(&self, element: &Self::Element, text: &str);

    /// Sets the displayed source of an image element.
    fn set_image_source(&self, element: &Self::Element, src: &str) -> Result<(), UiError>;
}
