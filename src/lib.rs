//! # Quill - A minimal GraphQL blog API
//!
//! Quill serves a small blogging API over GraphQL: a feed of published posts,
//! single-post lookup, draft creation, and publishing. All state lives in an
//! in-memory store that resets on restart.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the GraphQL server (PORT env var or --port, defaults to 8080)
//! quill serve
//!
//! # Run a one-off query against the seeded store
//! quill query '{ feed { id title } }'
//!
//! # Print the schema in SDL
//! quill schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Listen-port resolution from the environment
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers, and HTTP server
//! - [`model`]: The `Post` domain type
//! - [`store`]: In-memory post store

/// Command-line interface definitions using clap.
pub mod cli;

/// Process configuration.
///
/// Resolves the listen port from the `PORT` environment variable.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `QuillError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers, and HTTP transport.
///
/// Provides the async-graphql schema plus the axum server binding.
pub mod graphql;

/// Data model.
///
/// The `Post` struct shared by the store and the API layer.
pub mod model;

/// In-memory storage layer.
///
/// Owns the authoritative post collection behind a lock.
pub mod store;

pub mod logging;
