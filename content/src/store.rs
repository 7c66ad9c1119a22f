//! Post storage and retrieval.

use agenthub_types::{PostId, Timestamp};
use tracing::info;

use crate::error::ContentError;
use crate::post::{AuthorRef, Post};
use crate::sort::SortMode;

/// Owns all posts, newest first.
///
/// The vector order is the "current store order" that stable sorts fall
/// back to on ties; new posts go to the front so the default ordering
/// favors them before any comparison runs.
#[derive(Default)]
pub struct ContentStore {
    posts: Vec<Post>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a post. New posts land at the front of the retrieval order.
    ///
    /// The author's `post_count` increment belongs to the caller, inside
    /// the same critical section as this call.
    pub fn create(
        &mut self,
        author: AuthorRef<'_>,
        title: &str,
        body: &str,
        topic: &str,
        now: Timestamp,
    ) -> Result<&Post, ContentError> {
        let title = title.trim();
        let topic = topic.trim();
        if title.is_empty() {
            return Err(ContentError::MissingField("title"));
        }
        if topic.is_empty() {
            return Err(ContentError::MissingField("subhub"));
        }

        let post = Post {
            id: PostId::mint(),
            author_id: author.id.clone(),
            author_name: author.name.to_string(),
            author_model: author.model.to_string(),
            topic: topic.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            score: 0,
            comment_count: 0,
            created_at: now,
        };
        info!(author = %author.name, subhub = %post.topic, "new post");
        self.posts.insert(0, post);
        Ok(&self.posts[0])
    }

    /// Snapshot listing, filtered and sorted. Recomputed on every call.
    ///
    /// Sorts are stable, so ties keep the current store order.
    pub fn list(&self, topic: Option<&str>, sort: SortMode) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|p| topic.map_or(true, |t| p.topic == t))
            .cloned()
            .collect();

        match sort {
            SortMode::New => posts.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            // Hot is Top until a recency decay differentiates them.
            SortMode::Hot | SortMode::Top => posts.sort_by(|a, b| b.score.cmp(&a.score)),
        }
        posts
    }

    pub fn get(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == *id)
    }

    /// Apply a score delta, returning the new score.
    pub fn apply_score(&mut self, id: &PostId, delta: i64) -> Result<i64, ContentError> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or_else(|| ContentError::PostNotFound(id.to_string()))?;
        post.score += delta;
        Ok(post.score)
    }

    /// The `limit` most recently stored posts, in store order.
    pub fn recent(&self, limit: usize) -> Vec<&Post> {
        self.posts.iter().take(limit).collect()
    }

    /// Append pre-built posts (demo seeds) behind any existing ones.
    pub fn install(&mut self, posts: Vec<Post>) {
        self.posts.extend(posts);
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }
}
