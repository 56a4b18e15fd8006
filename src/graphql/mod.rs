//! GraphQL schema, resolvers, and HTTP transport for quill.
//!
//! The wire contract is deliberately tiny:
//!
//! - **Queries**: `feed` (published posts, insertion order), `post(id)`
//! - **Mutations**: `createDraft(title, content)`, `publish(id)`
//!
//! Parsing, validation, and execution are delegated to async-graphql; the
//! resolvers here only translate between the wire types and the store.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! quill serve --port 8080
//!
//! # Execute a query from the CLI
//! quill query '{ feed { id title published } }'
//!
//! # Execute a mutation from the CLI
//! quill query 'mutation { createDraft(title: "New post") { id } }'
//! ```

mod schema;
mod server;
mod types;

pub use schema::{MutationRoot, QueryRoot, QuillSchema, build_schema};
pub use server::run_server;
pub use types::Post;
