use anyhow::{bail, Result};

use crate::services::NavigationService;

/// In-process page location, resolved like a browser assigning `location.href`.
#[derive(Debug, Clone)]
pub struct PageNavigator {
    current: String,
}

impl PageNavigator {
    pub fn new(start_path: &str) -> Self {
        Self {
            current: resolve_path("/", start_path),
        }
    }
}

impl Default for PageNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl NavigationService for PageNavigator {
    fn current_path(&self) -> &str {
        &self.current
    }

    fn navigate(&mut self, path: &str) -> Result<()> {
        let path = path.trim();
        if path.is_empty() {
            bail!("Cannot navigate to an empty path");
        }
        self.current = resolve_path(&self.current, path);
        Ok(())
    }
}

/// Resolve `target` against `current`, normalising `.` and `..` segments.
pub fn resolve_path(current: &str, target: &str) -> String {
    let joined = if target.starts_with('/') {
        target.to_string()
    } else {
        // Relative paths resolve against the directory of the current page
        let dir = match current.rfind('/') {
            Some(idx) => &current[..=idx],
            None => "/",
        };
        format!("{}{}", dir, target)
    };

    let trailing_slash = joined.ends_with('/') || joined.ends_with("/.") || joined.ends_with("/..");
    let mut segments: Vec<&str> = Vec::new();
    for segment in joined.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut resolved = format!("/{}", segments.join("/"));
    if trailing_slash && !segments.is_empty() {
        resolved.push('/');
    }
    resolved
}
