//! Report output model for headless splash runs.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Component, Path};

/// Report status for a headless run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// Machine-readable result of a headless run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlessReport {
    pub status: ReportStatus,
    pub failed_step_index: Option<usize>,
    pub assertion: Option<String>,
    pub message: Option<String>,
    pub elapsed_frames: u64,
    pub elapsed_ms: u64,
    /// Covering scale computed at mount
    pub covering_scale: f32,
    /// Whether the splash reached its covering state
    pub completed: bool,
}

/// Counters shared by passed and failed reports
#[derive(Debug, Clone, Copy, Default)]
pub struct RunStats {
    pub elapsed_frames: u64,
    pub elapsed_ms: u64,
    pub covering_scale: f32,
    pub completed: bool,
}

impl HeadlessReport {
    pub fn passed(stats: RunStats) -> Self {
        Self {
            status: ReportStatus::Passed,
            failed_step_index: None,
            assertion: None,
            message: None,
            elapsed_frames: stats.elapsed_frames,
            elapsed_ms: stats.elapsed_ms,
            covering_scale: stats.covering_scale,
            completed: stats.completed,
        }
    }

    pub fn failed(
        assertion: &str,
        failed_step_index: usize,
        message: String,
        stats: RunStats,
    ) -> Self {
        Self {
            status: ReportStatus::Failed,
            failed_step_index: Some(failed_step_index),
            assertion: Some(assertion.to_string()),
            message: Some(message),
            elapsed_frames: stats.elapsed_frames,
            elapsed_ms: stats.elapsed_ms,
            covering_scale: stats.covering_scale,
            completed: stats.completed,
        }
    }

    /// Write the report as pretty JSON to a path relative to the working
    /// directory.
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        if path.is_absolute() || path.has_root() {
            bail!("report path must be relative and must not start with a separator");
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            bail!("report path cannot contain '..' or drive prefixes");
        }
        let payload = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, payload)?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_emits_snake_case_status() {
        let report = HeadlessReport::failed(
            "assert_shape",
            3,
            "expected Circle".into(),
            RunStats {
                elapsed_frames: 10,
                elapsed_ms: 160,
                covering_scale: 10.128,
                completed: false,
            },
        );
        let mut out = Vec::new();
        report.write_to_writer(&mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["failed_step_index"], 3);
        assert_eq!(json["assertion"], "assert_shape");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn test_rejects_escaping_paths() {
        let report = HeadlessReport::passed(RunStats::default());
        assert!(report.write_to_path(Path::new("/tmp/report.json")).is_err());
        assert!(report.write_to_path(Path::new("../report.json")).is_err());
        assert!(report
            .write_to_path(Path::new("reports/../../report.json"))
            .is_err());
    }
}
