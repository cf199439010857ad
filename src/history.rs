use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::debug;

use crate::error::{ClientError, Result};

pub const LOG_FILE_NAME: &str = "gptcmd.log";

const TIMESTAMP_FORMAT: &str = "%a %m/%d/%Y %I:%M %P";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub prompt: String,
    pub response: String,
}

impl LogEntry {
    pub fn now(prompt: impl Into<String>, response: impl Into<String>) -> Self {
        Self::at(Local::now().naive_local(), prompt, response)
    }

    pub fn at(
        when: NaiveDateTime,
        prompt: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: when.format(TIMESTAMP_FORMAT).to_string(),
            prompt: prompt.into(),
            response: response.into(),
        }
    }

    fn render(&self) -> String {
        format!(
            "\n{}\n> {}\n>> {}\n",
            self.timestamp, self.prompt, self.response
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutcome {
    Written(PathBuf),
    Skipped,
}

pub fn log_path(home_dir: &Path) -> PathBuf {
    home_dir.join(LOG_FILE_NAME)
}

/// Appends `entry` to the request log under `home_dir`.
///
/// Without a home directory nothing is written and `LogOutcome::Skipped` is
/// returned. The file is opened and closed within this call.
pub fn append(home_dir: Option<&Path>, entry: &LogEntry) -> Result<LogOutcome> {
    let Some(home_dir) = home_dir else {
        debug!("home directory unavailable; skipping request log");
        return Ok(LogOutcome::Skipped);
    };

    let path = log_path(home_dir);
    let log_error = |source: std::io::Error| {
        debug!(path = %path.display(), error = %source, "failed to write request log");
        ClientError::Log {
            path: path.clone(),
            source,
        }
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(log_error)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(entry.render().as_bytes())
        .map_err(log_error)?;
    writer.flush().map_err(log_error)?;

    debug!(path = %path.display(), "appended request log entry");
    Ok(LogOutcome::Written(path))
}
