//! Fixtures for session CSV generation.
//!
//! Provides utilities to:
//! - Build well-formed session files trial by trial
//! - Inject malformed rows to exercise the tolerant loader

use anyhow::Result;
use std::path::Path;

/// Header written by [`SessionBuilder`]
pub const HEADER: [&str; 5] = ["participant_id", "condition", "trial", "rt", "correct"];

/// Builder for a single session CSV file.
///
/// # Example
/// ```no_run
/// use rtstat_testing::SessionBuilder;
///
/// SessionBuilder::new("P001", "A")
///     .trial(250.0, 1)
///     .trial(310.0, 0)
///     .write_to(std::path::Path::new("/tmp/p001.csv"))
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    participant_id: String,
    condition: String,
    rows: Vec<[String; 2]>,
}

impl SessionBuilder {
    pub fn new(participant_id: &str, condition: &str) -> Self {
        Self {
            participant_id: participant_id.to_string(),
            condition: condition.to_string(),
            rows: Vec::new(),
        }
    }

    /// Append a well-formed trial.
    pub fn trial(mut self, rt: f64, correct: i64) -> Self {
        self.rows.push([rt.to_string(), correct.to_string()]);
        self
    }

    /// Append several well-formed trials.
    pub fn trials(self, trials: &[(f64, i64)]) -> Self {
        trials
            .iter()
            .fold(self, |builder, &(rt, correct)| builder.trial(rt, correct))
    }

    /// Append a row with raw `rt` and `correct` text, e.g. to make it unparseable.
    pub fn raw_trial(mut self, rt: &str, correct: &str) -> Self {
        self.rows.push([rt.to_string(), correct.to_string()]);
        self
    }

    /// Write the session with the standard header.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record(HEADER)?;

        for (i, [rt, correct]) in self.rows.iter().enumerate() {
            let trial = (i + 1).to_string();
            wtr.write_record([
                self.participant_id.as_str(),
                self.condition.as_str(),
                trial.as_str(),
                rt.as_str(),
                correct.as_str(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}

/// Write arbitrary file content, creating parent directories.
pub fn write_raw(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
