use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("No window object")]
    NoWindow,
    #[error("No document object")]
    NoDocument,
    #[error("storage error: {0}")]
    Storage(String),
    #[error("dom error: {0}")]
    Dom(String),
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

impl UiError {
    #[cfg(target_arch = "wasm32")]
    pub(crate) fn dom(err: wasm_bindgen::JsValue) -> Self {
        UiError::Dom(describe_js(&err))
    }

    #[cfg(target_arch = "wasm32")]
    pub(crate) fn storage(err: wasm_bindgen::JsValue) -> Self {
        UiError::Storage(describe_js(&err))
    }
}

#[cfg(target_arch = "wasm32")]
fn describe_js(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
