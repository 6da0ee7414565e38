use chrono::Local;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::conf::Config;
use crate::core::inspiration::{InspirationOutcome, InspirationSource};
use crate::core::post::{Post, PostStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePostResult {
    pub success: bool,
    pub post: Post,
}

/// Posting feature state: the post list and where to look for inspiration.
#[derive(Debug)]
pub struct PostService {
    store: PostStore,
    feature_dir: PathBuf,
    inspiration_location: String,
    inspiration_timeout: Option<Duration>,
}

impl PostService {
    pub fn new(config: &Config) -> Self {
        Self::with_location(config.feature_dir.clone(), &config.inspiration_location)
            .with_timeout(config.inspiration_timeout)
    }

    pub fn with_location(feature_dir: PathBuf, inspiration_location: &str) -> Self {
        Self {
            store: PostStore::new(),
            feature_dir,
            inspiration_location: inspiration_location.to_string(),
            inspiration_timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.inspiration_timeout = timeout;
        self
    }

    pub fn create_post(&mut self, content: &str) -> CreatePostResult {
        log::info!("Publishing post: {}", content);

        let now = Local::now();
        let id = self.store.next_id(now);
        let post = Post::new(id, content, now);
        self.store.prepend(post.clone());

        CreatePostResult { success: true, post }
    }

    /// Curated phrases, or the fallback pair when they cannot be loaded.
    pub fn fetch_inspiration(&self) -> Vec<Value> {
        self.load_inspiration().into_phrases()
    }

    pub fn load_inspiration(&self) -> InspirationOutcome {
        self.inspiration_source().load(self.inspiration_timeout)
    }

    pub fn inspiration_source(&self) -> InspirationSource {
        InspirationSource::resolve(&self.feature_dir, &self.inspiration_location)
    }

    pub fn posts(&self) -> &[Post] {
        self.store.posts()
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::post::DEFAULT_AUTHOR;

    fn service() -> PostService {
        PostService::with_location(PathBuf::from("/nonexistent/src/modules/posts"), "words.json")
    }

    #[test]
    fn create_post_echoes_content() {
        let mut service = service();
        let result = service.create_post("hello");

        assert!(result.success);
        assert_eq!(result.post.content, "hello");
        assert_eq!(result.post.author, DEFAULT_AUTHOR);
        assert!(!result.post.timestamp.is_empty());
        assert!(result.post.id > 0);
        assert_eq!(service.posts()[0], result.post);
    }

    #[test]
    fn create_post_keeps_raw_content() {
        let mut service = service();
        let raw = "  <b>不</b>\n\t";
        assert_eq!(service.create_post(raw).post.content, raw);
        assert_eq!(service.create_post("").post.content, "");
    }

    #[test]
    fn separate_services_do_not_share_posts() {
        let mut a = service();
        let b = service();
        a.create_post("only in a");

        assert_eq!(a.store().len(), 1);
        assert!(b.store().is_empty());
    }

    #[test]
    fn fetch_inspiration_falls_back_when_missing() {
        assert_eq!(service().fetch_inspiration(), ["加油！", "你可以的！"]);
    }
}
