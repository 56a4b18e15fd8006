use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    response::{Html, IntoResponse},
    routing::get,
};

use crate::error::Result;

use super::schema::QuillSchema;

async fn graphql_handler(
    Extension(schema): Extension<QuillSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

/// Serve the schema on an already-bound listener until the process stops.
///
/// POST / executes GraphQL operations; GET / serves the GraphiQL playground.
/// The caller binds the listener so nothing announces readiness before the
/// port is actually held.
pub async fn run_server(schema: QuillSchema, listener: tokio::net::TcpListener) -> Result<()> {
    let app = Router::new()
        .route("/", get(graphiql).post(graphql_handler))
        .layer(Extension(schema));

    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "GraphQL server listening");
    }
    axum::serve(listener, app).await?;
    Ok(())
}
