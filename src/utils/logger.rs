use tracing_subscriber::{fmt, layer::SubscriberExt, Layer, util::SubscriberInitExt, EnvFilter};

/// Log output chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    /// One JSON object per line, for build pipelines that ingest logs.
    Json,
}

impl LogFormat {
    pub fn from_flag(json_logs: bool) -> Self {
        if json_logs {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }
}

/// Filter used when `RUST_LOG` is unset.
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "portfolio_page=debug,info"
    } else {
        "portfolio_page=info"
    }
}

pub fn init_logger(verbose: bool, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let base = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false);
    let output = match format {
        LogFormat::Compact => base.compact().boxed(),
        LogFormat::Json => base.json().boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(output)
        .init();
}
