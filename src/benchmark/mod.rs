use std::path::Path;

use error_stack::{report, ResultExt};
use serde::Deserialize;
use thiserror::Error;

/// Report file produced by the benchmark harness, expected in the working
/// directory of the invocation.
pub const RESULT_FILE: &str = "result.json";

/// A benchmark report as written by hyperfine: a list of runs, each with its
/// raw timing samples. Fields the publisher does not consume are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkReport {
    pub results: Vec<TimingRun>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimingRun {
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub mean: Option<f64>,
    pub times: Vec<f64>,
}

#[derive(Debug, Error)]
pub enum BenchmarkReportError {
    #[error("could not read benchmark results from '{0}'")]
    Unreadable(String),
    #[error("benchmark results are not a valid report")]
    Malformed,
    #[error("benchmark results contain no runs")]
    NoRuns,
}

impl BenchmarkReport {
    pub fn load(path: &Path) -> error_stack::Result<Self, BenchmarkReportError> {
        let raw = std::fs::read_to_string(path).change_context_lazy(|| {
            BenchmarkReportError::Unreadable(path.display().to_string())
        })?;

        serde_json::from_str(&raw).change_context(BenchmarkReportError::Malformed)
    }

    /// The run whose timings get published. Later runs in the report are
    /// ignored.
    pub fn first_run(&self) -> error_stack::Result<&TimingRun, BenchmarkReportError> {
        self.results
            .first()
            .ok_or_else(|| report!(BenchmarkReportError::NoRuns))
    }
}

impl TimingRun {
    /// Renders every timing sample into one spreadsheet row, one cell per
    /// sample, in report order.
    pub fn times_row(&self) -> Vec<String> {
        self.times.iter().map(|time| time.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_times_row_rendering() {
        let run = TimingRun {
            command: None,
            mean: None,
            times: vec![1.0, 2.5, 3.0],
        };

        assert_eq!(run.times_row(), vec!["1", "2.5", "3"]);
    }

    #[test]
    fn test_times_row_empty() {
        let run = TimingRun {
            command: None,
            mean: None,
            times: vec![],
        };

        assert!(run.times_row().is_empty(), "Empty times yield an empty row");
    }

    #[test]
    fn test_parse_full_report() {
        let raw = r#"{
            "results": [
                {
                    "command": "rustscan -a 127.0.0.1",
                    "mean": 1.23,
                    "stddev": 0.04,
                    "times": [1.2, 1.21, 1.28]
                }
            ]
        }"#;

        let report: BenchmarkReport = serde_json::from_str(raw).unwrap();
        let run = report.first_run().unwrap();

        assert_eq!(run.command.as_deref(), Some("rustscan -a 127.0.0.1"));
        assert_eq!(run.mean, Some(1.23));
        assert_eq!(run.times_row(), vec!["1.2", "1.21", "1.28"]);
    }

    #[test]
    fn test_parse_missing_times_names_the_field() {
        let raw = r#"{"results": [{"command": "rustscan"}]}"#;

        let err = serde_json::from_str::<BenchmarkReport>(raw).unwrap_err();

        assert!(
            err.to_string().contains("missing field `times`"),
            "Deserialization should name the missing field, got: {}",
            err
        );
    }

    #[test]
    fn test_first_run_on_empty_results() {
        let report: BenchmarkReport = serde_json::from_str(r#"{"results": []}"#).unwrap();

        assert!(matches!(
            report.first_run().unwrap_err().current_context(),
            BenchmarkReportError::NoRuns
        ));
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let report = BenchmarkReport::load(file.path()).unwrap_err();

        assert!(matches!(
            report.current_context(),
            BenchmarkReportError::Malformed
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let report = BenchmarkReport::load(&dir.path().join(RESULT_FILE)).unwrap_err();

        assert!(matches!(
            report.current_context(),
            BenchmarkReportError::Unreadable(_)
        ));
    }
}
