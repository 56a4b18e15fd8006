use async_graphql::{ID, SimpleObject};

use crate::model::Post as ModelPost;

/// Wire representation of a post. Every field is the identity projection of
/// the stored attribute; there are no computed fields.
#[derive(SimpleObject)]
pub struct Post {
    pub id: ID,
    pub title: String,
    pub content: Option<String>,
    pub published: bool,
}

impl From<ModelPost> for Post {
    fn from(p: ModelPost) -> Self {
        Self {
            id: p.id.into(),
            title: p.title,
            content: p.content,
            published: p.published,
        }
    }
}
