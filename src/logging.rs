use std::path::Path;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Set up tracing output: a compact stderr layer, plus daily-rotated JSON
/// logs under `log_dir` when one is given. A `RUST_LOG` setting overrides the
/// level chosen by `verbose`.
pub fn init(verbose: bool, log_dir: Option<&Path>) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(verbose)));

    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let registry = tracing_subscriber::registry().with(env_filter).with(stderr);

    match log_dir {
        Some(dir) => {
            let _ = std::fs::create_dir_all(dir);
            let json_file = fmt::layer()
                .with_writer(file_appender(dir))
                .with_ansi(false)
                .json();
            registry.with(json_file).init();
        }
        None => registry.init(),
    }
}

fn directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("quill={level}")
}

fn file_appender(dir: &Path) -> tracing_appender::rolling::RollingFileAppender {
    tracing_appender::rolling::daily(dir, "quill.log")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_directive_tracks_verbosity() {
        assert_eq!(directive(false), "quill=info");
        assert_eq!(directive(true), "quill=debug");
    }

    #[test]
    fn test_file_appender_writes_dated_log_into_dir() {
        let dir = TempDir::new().unwrap();

        let mut appender = file_appender(dir.path());
        writeln!(appender, "rotated line").unwrap();
        appender.flush().unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert!(
            names.iter().any(|n| n.starts_with("quill.log")),
            "no rotated log file in {names:?}"
        );
    }
}
