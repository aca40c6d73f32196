//! Log output of the `jdecl` binary.
//!
//! Synthesis is traced at two levels:
//!
//! - `generate_declarations` (debug span) wraps a whole batch;
//! - `emit` (debug span, fields `type_name` and `pass`) wraps one type, with
//!   `trace` events for the steps that print something (native enum,
//!   category groups, companion, static fields, boxed operators) and a
//!   `debug` event per configuration error reported to the sink.
//!
//! `JDECL_LOG` takes `RUST_LOG` filter syntax and wins over `RUST_LOG`.
//! `JDECL_LOG_FORMAT` picks the rendering: `text` (default), `tree` or `json`.
//!
//! ```bash
//! JDECL_LOG=trace JDECL_LOG_FORMAT=tree jdecl types.json
//! JDECL_LOG="jdecl_emitter::declaration_emitter=trace" jdecl types.json
//! ```

use tracing_subscriber::layer::Layered;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

type OutputLayer = Box<dyn Layer<Layered<EnvFilter, Registry>> + Send + Sync>;

/// How events are rendered on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    /// Spans as an indented tree (`tracing-tree`).
    Tree,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Anything unrecognized is `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Logging requested through the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Filter directives (`debug`, `jdecl_emitter=trace`, ...).
    pub directives: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// `None` when neither filter variable is set.
    pub fn from_vars(
        jdecl_log: Option<String>,
        rust_log: Option<String>,
        format: Option<String>,
    ) -> Option<Self> {
        let directives = jdecl_log.or(rust_log)?;
        Some(LogSettings {
            directives,
            format: LogFormat::parse(format.as_deref().unwrap_or_default()),
        })
    }

    pub fn from_env() -> Option<Self> {
        Self::from_vars(
            std::env::var("JDECL_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
            std::env::var("JDECL_LOG_FORMAT").ok(),
        )
    }

    fn output_layer(&self) -> OutputLayer {
        match self.format {
            LogFormat::Tree => tracing_tree::HierarchicalLayer::default()
                .with_writer(std::io::stderr)
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_targets(true)
                .boxed(),
            LogFormat::Json => fmt::layer().json().with_writer(std::io::stderr).boxed(),
            LogFormat::Text => fmt::layer().with_writer(std::io::stderr).boxed(),
        }
    }
}

/// Installs the global subscriber; a no-op unless logging was requested.
///
/// Everything goes to stderr, stdout carries the declarations.
pub fn init_tracing() {
    let Some(settings) = LogSettings::from_env() else {
        return;
    };
    let filter = EnvFilter::builder().parse_lossy(&settings.directives);
    let layer = settings.output_layer();
    Registry::default().with(filter).with(layer).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
        assert_eq!(LogFormat::parse("yaml"), LogFormat::Text);
    }

    #[test]
    fn test_settings_require_a_filter_variable() {
        assert_eq!(LogSettings::from_vars(None, None, Some("tree".into())), None);
    }

    #[test]
    fn test_jdecl_log_wins_over_rust_log() {
        let settings = LogSettings::from_vars(
            Some("jdecl_emitter=trace".into()),
            Some("warn".into()),
            Some("json".into()),
        )
        .expect("logging requested");
        assert_eq!(settings.directives, "jdecl_emitter=trace");
        assert_eq!(settings.format, LogFormat::Json);

        let fallback = LogSettings::from_vars(None, Some("debug".into()), None)
            .expect("logging requested");
        assert_eq!(fallback.directives, "debug");
        assert_eq!(fallback.format, LogFormat::Text);
    }
}
