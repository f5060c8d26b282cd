//! JSONL run trace.

use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bot_core::Pose;

/// One trace record: what happened at which tick, and where the robot was.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceEvent {
    pub timestamp: DateTime<Utc>,
    pub tick: u64,
    pub event: String,
    pub x: f32,
    pub y: f32,
    pub heading: f32,
}

impl TraceEvent {
    pub fn at(tick: u64, event: &str, pose: Pose) -> Self {
        Self {
            timestamp: Utc::now(),
            tick,
            event: event.to_string(),
            x: pose.position.x,
            y: pose.position.y,
            heading: pose.heading,
        }
    }
}

/// Append-only JSONL writer for session traces.
pub struct TraceWriter {
    path: PathBuf,
}

impl TraceWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn emit(&self, event: &TraceEvent) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let line = serde_json::to_string(event)?;
        writeln!(file, "{}", line)?;

        Ok(())
    }

    /// Read the last `limit` records. Unreadable files and malformed lines
    /// are skipped.
    pub fn read_recent(&self, limit: usize) -> Vec<TraceEvent> {
        let file = match std::fs::File::open(&self.path) {
            Ok(f) => f,
            Err(_) => return Vec::new(),
        };

        let reader = BufReader::new(file);
        let mut events: Vec<TraceEvent> = reader
            .lines()
            .filter_map(|line| line.ok())
            .filter_map(|line| serde_json::from_str(&line).ok())
            .collect();

        if events.len() > limit {
            events.drain(0..events.len() - limit);
        }

        events
    }
}
