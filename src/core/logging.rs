/// Tracing subscriber setup
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing::Level;

/// Where log events go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    /// The full-screen UI owns the terminal, so without a file nothing is logged
    Off,
}

pub fn init(target: &LogTarget, level: Level) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_max_level(level).with_target(false);
    let installed = match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
    };
    installed.map_err(|e| anyhow!("failed to install log subscriber: {}", e))
}
