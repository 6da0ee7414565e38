use anyhow::Result;

use crate::services::{NavigationService, StorageService};

/// Storage key the counter is kept under.
pub const POOPS_KEY: &str = "user_poops";

/// A single persisted counter plus the page navigation helper.
pub struct LocalCounter<S, N> {
    storage: S,
    navigator: N,
}

impl<S: StorageService, N: NavigationService> LocalCounter<S, N> {
    pub fn new(storage: S, navigator: N) -> Self {
        Self { storage, navigator }
    }

    pub fn save_poops(&mut self, count: i64) -> Result<()> {
        self.storage.set_item(POOPS_KEY, &count.to_string())
    }

    /// Stored count, or 0 when nothing usable has been saved.
    pub fn get_poops(&self) -> Result<i64> {
        let value = self.storage.get_item(POOPS_KEY)?;
        Ok(value.as_deref().and_then(parse_leading_int).unwrap_or(0))
    }

    pub fn go_to(&mut self, path: &str) -> Result<()> {
        self.navigator.navigate(path)?;
        self.page_loaded();
        Ok(())
    }

    /// Diagnostic emitted whenever a page is shown.
    pub fn page_loaded(&self) {
        log::info!("current module: {}", self.navigator.current_path());
    }

    pub fn current_path(&self) -> &str {
        self.navigator.current_path()
    }

    #[cfg(test)]
    fn storage(&self) -> &S {
        &self.storage
    }
}

/// Lenient integer parse: leading whitespace, an optional sign, then digits.
/// Anything after the digits is ignored; no digits at all yields `None`.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }
    let digits = &rest[..digits_len];
    let signed = if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    };
    signed.parse().ok()
}
