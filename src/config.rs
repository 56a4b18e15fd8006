use crate::error::{QuillError, Result};

pub const DEFAULT_PORT: u16 = 8080;

/// Resolve the listen port from the `PORT` environment variable.
///
/// Unset or empty falls back to [`DEFAULT_PORT`]; a value that is set but not
/// a valid port is a configuration error.
pub fn port_from_env() -> Result<u16> {
    parse_port(std::env::var("PORT").ok().as_deref())
}

fn parse_port(value: Option<&str>) -> Result<u16> {
    match value {
        None => Ok(DEFAULT_PORT),
        Some(v) if v.trim().is_empty() => Ok(DEFAULT_PORT),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| QuillError::Config(format!("invalid PORT value: '{v}'"))),
    }
}
