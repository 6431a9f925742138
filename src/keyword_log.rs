use std::path::{Path, PathBuf};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use crate::error::Result;
use crate::keywords::Keyword;

/// One line of the keyword log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub time: DateTime<Local>,
    pub original: String,
    pub keywords: Vec<Keyword>,
}

impl LogRecord {
    pub fn new(original: impl Into<String>, keywords: Vec<Keyword>) -> Self {
        Self {
            time: Local::now(),
            original: original.into(),
            keywords,
        }
    }
}

/// Append-only newline-delimited JSON log. Appends from one process are
/// serialized so lines never interleave.
pub struct KeywordLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl KeywordLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn append(&self, record: &LogRecord) -> Result<()> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
