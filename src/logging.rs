//! Diagnostic logging.  The terminal belongs to the game while it's running,
//! so log messages only go to a file, and only if one is configured.
use crate::consts;
use anyhow::Context;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber that appends to `log_file`.  If
/// `log_file` is `None`, no subscriber is installed and all events are
/// discarded.
///
/// The filter is taken from the environment variable named by
/// [`consts::LOG_FILTER_VAR`], falling back to
/// [`consts::DEFAULT_LOG_FILTER`].
pub(crate) fn init(log_file: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("failed to open log file")?;
    let filter = EnvFilter::try_from_env(consts::LOG_FILTER_VAR)
        .unwrap_or_else(|_| EnvFilter::new(consts::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install log subscriber")
}
