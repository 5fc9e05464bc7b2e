use std::{path::Path, sync::LazyLock};

use anyhow::{anyhow, Result};
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::{Builder, Rotation};
use tracing_subscriber::{fmt::writer::MakeWriterExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "session";
const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

/// Session logs go to a daily rotated file under `application_data_path/logs`. When `log_level` is
/// given they are mirrored to stderr as well. Stdout belongs to the calendar and the prompt.
pub fn enable_logging(
    application_data_path: &Path,
    log_level: Option<LevelFilter>,
) -> Result<()> {
    let appender = Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(5)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(application_data_path.join("logs"))?;

    let mirror = log_level.is_some();
    let stderr = std::io::stderr.with_filter(move |_| mirror);

    let rust_log = std::env::var("RUST_LOG").ok();

    tracing_subscriber::fmt()
        .with_env_filter(crate_filter(log_level, rust_log.as_deref()))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .with_writer(stderr.and(appender))
        .try_init()
        .map_err(|e| anyhow!("Failed to install logger: {e}"))
}

/// An explicit level only affects this crate. Otherwise `RUST_LOG` is taken as is, and when it is
/// missing or can't be parsed the crate logs at [DEFAULT_LEVEL].
fn crate_filter(log_level: Option<LevelFilter>, rust_log: Option<&str>) -> EnvFilter {
    let crate_level = |level: LevelFilter| {
        EnvFilter::new(format!(
            "{}={level}",
            env!("CARGO_PKG_NAME").replace('-', "_")
        ))
    };

    match (log_level, rust_log.filter(|v| !v.trim().is_empty())) {
        (Some(level), _) => crate_level(level),
        (None, Some(directives)) => {
            EnvFilter::try_new(directives).unwrap_or_else(|_| crate_level(DEFAULT_LEVEL))
        }
        (None, None) => crate_level(DEFAULT_LEVEL),
    }
}

pub static TEST_LOGGING: LazyLock<()> = LazyLock::new(|| {
    tracing_subscriber::fmt()
        .with_env_filter(crate_filter(Some(LevelFilter::TRACE), None))
        .with_test_writer()
        .compact()
        .init()
});
