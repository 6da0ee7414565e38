use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Author recorded on every post; there is no identity model behind it.
pub const DEFAULT_AUTHOR: &str = "测试用户";

const TIMESTAMP_FORMAT: &str = "%Y/%-m/%-d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub content: String,
    pub timestamp: String,
    pub author: String,
}

impl Post {
    pub fn new(id: i64, content: &str, created_at: DateTime<Local>) -> Self {
        Self {
            id,
            content: content.to_string(),
            timestamp: created_at.format(TIMESTAMP_FORMAT).to_string(),
            author: DEFAULT_AUTHOR.to_string(),
        }
    }
}

/// In-memory post list, newest first. Lives as long as its owner.
#[derive(Debug, Default, Clone)]
pub struct PostStore {
    posts: Vec<Post>,
    last_id: Option<i64>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for a post created at `created_at`: its millisecond tick, bumped past
    /// the previous id when the clock has not advanced.
    pub fn next_id(&mut self, created_at: DateTime<Local>) -> i64 {
        let tick = created_at.timestamp_millis();
        let id = match self.last_id {
            Some(last) if tick <= last => last + 1,
            _ => tick,
        };
        self.last_id = Some(id);
        id
    }

    pub fn prepend(&mut self, post: Post) {
        self.posts.insert(0, post);
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }

    pub fn latest(&self) -> Option<&Post> {
        self.posts.first()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
