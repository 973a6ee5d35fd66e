use crate::error::UiError;
use crate::utils::storage::KeyValueStore;

/// Storage that refuses every read and write.
#[derive(Debug, Clone, Copy)]
pub struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, UiError> {
        Err(UiError::Storage("SecurityError".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), UiError> {
        Err(UiError::Storage("QuotaExceededError".into()))
    }
}
