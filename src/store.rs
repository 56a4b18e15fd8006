use std::sync::RwLock;

use crate::error::{QuillError, Result};
use crate::model::Post;

/// The authoritative post collection.
///
/// All reads and writes go through the interior lock, so the store can be
/// shared across request handlers without lost updates. Ids are assigned from
/// the current collection length; since no delete operation exists, that
/// keeps them unique for the process lifetime. (If deletion is ever added,
/// id assignment has to switch to `max(id) + 1` to avoid collisions.)
pub struct PostStore {
    posts: RwLock<Vec<Post>>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    /// A store pre-loaded with the demo posts served by default.
    pub fn seeded() -> Self {
        Self::with_posts(vec![
            Post::new(1, "Subscribe to GraphQL Weekly for community news")
                .with_content(Some("https://graphqlweekly.com/".to_string()))
                .with_published(true),
            Post::new(2, "Follow DigitalOcean on Twitter")
                .with_content(Some("https://twitter.com/digitalocean".to_string()))
                .with_published(true),
            Post::new(3, "What is GraphQL?")
                .with_content(Some("GraphQL is a query language for APIs".to_string())),
        ])
    }

    /// All published posts, in insertion order.
    pub fn list_published(&self) -> Vec<Post> {
        let posts = self.posts.read().expect("post store lock poisoned");
        posts.iter().filter(|p| p.published).cloned().collect()
    }

    pub fn get(&self, id: i32) -> Result<Post> {
        let posts = self.posts.read().expect("post store lock poisoned");
        posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(QuillError::NotFound(id))
    }

    /// Append a new draft and return it.
    ///
    /// The id is computed and the post pushed under a single write lock, so
    /// concurrent creates can never mint the same id.
    pub fn create(&self, title: String, content: Option<String>) -> Post {
        let mut posts = self.posts.write().expect("post store lock poisoned");
        let id = posts.len() as i32 + 1;
        tracing::info!(id, title = %title, "Creating draft");
        let post = Post::new(id, title).with_content(content);
        posts.push(post.clone());
        post
    }

    /// Mark the post as published and return the updated record.
    ///
    /// Idempotent: publishing an already-published post is a no-op that still
    /// returns the post.
    pub fn publish(&self, id: i32) -> Result<Post> {
        let mut posts = self.posts.write().expect("post store lock poisoned");
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(QuillError::NotFound(id))?;
        tracing::info!(id, "Publishing post");
        post.published = true;
        Ok(post.clone())
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}
