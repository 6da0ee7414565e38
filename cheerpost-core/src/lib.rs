// Module declarations
pub mod core;
pub mod services;

// Public API re-exports
pub use crate::core::conf::{Config, DEFAULT_INSPIRATION_LOCATION};
pub use crate::core::post::{Post, PostStore, DEFAULT_AUTHOR};
pub use crate::core::posting::{CreatePostResult, PostService};
pub use crate::core::inspiration::{
    fallback_phrases,
    phrase_text,
    InspirationError,
    InspirationOutcome,
    InspirationSource,
    FALLBACK_PHRASES,
};
pub use crate::core::storage::{FileStorage, MemoryStorage};
pub use crate::core::navigation::{resolve_path, PageNavigator};
pub use crate::core::counter::{parse_leading_int, LocalCounter, POOPS_KEY};

// Service trait exports
pub use services::{NavigationService, StorageService};
