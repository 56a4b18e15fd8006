use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Object, Schema};

use crate::error::QuillError;
use crate::store::PostStore;

use super::types::Post;

pub type QuillSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Arc<PostStore>) -> QuillSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

fn store<'a>(ctx: &'a Context<'_>) -> &'a PostStore {
    ctx.data::<Arc<PostStore>>().unwrap()
}

/// Coerce a wire `ID` into a store id. `ID` is stringly typed on the wire, so
/// a non-numeric value is possible and is treated as "no such post" rather
/// than a hard error.
fn parse_id(id: &ID) -> Result<i32, QuillError> {
    id.parse::<i32>()
        .map_err(|_| QuillError::InvalidId(id.to_string()))
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The feed of published posts, in insertion order
    async fn feed(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Post>> {
        let store = store(ctx);
        Ok(store.list_published().into_iter().map(Into::into).collect())
    }

    /// Get a single post by ID, draft or published
    async fn post(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Post>> {
        let store = store(ctx);
        let Ok(id) = parse_id(&id) else {
            return Ok(None);
        };
        match store.get(id) {
            Ok(post) => Ok(Some(post.into())),
            Err(QuillError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new draft post
    async fn create_draft(
        &self,
        ctx: &Context<'_>,
        title: String,
        content: Option<String>,
    ) -> async_graphql::Result<Post> {
        let store = store(ctx);
        Ok(store.create(title, content).into())
    }

    /// Publish a post; returns null if no post matches the ID
    async fn publish(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Post>> {
        let store = store(ctx);
        let Ok(id) = parse_id(&id) else {
            return Ok(None);
        };
        match store.publish(id) {
            Ok(post) => Ok(Some(post.into())),
            Err(QuillError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
