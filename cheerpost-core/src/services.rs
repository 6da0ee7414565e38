// Service traits for the platform collaborators the page depends on
use anyhow::Result;

/// Service trait for per-device key-value persistence
pub trait StorageService {
    /// Read the string stored under `key`, if any
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing the previous value
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Drop `key` from the store; missing keys are not an error
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

/// Service trait for page navigation
pub trait NavigationService {
    /// Path of the page currently shown
    fn current_path(&self) -> &str;

    /// Replace the current page with `path`
    fn navigate(&mut self, path: &str) -> Result<()>;
}
