use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuillError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Post not found: {0}")]
    NotFound(i32),

    #[error("Invalid post ID: {0}")]
    InvalidId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QuillError>;
