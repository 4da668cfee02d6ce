use serde::{Deserialize, Serialize};

/// One successfully parsed row of a session file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    /// Reaction time in milliseconds
    pub rt: f64,
    /// Correctness flag; only `0` counts as an error
    pub correct: i64,
}

impl Trial {
    pub fn new(rt: f64, correct: i64) -> Self {
        Self { rt, correct }
    }
}

/// Parsed contents of one session CSV file.
///
/// Construction goes through [`SessionData::new`], which refuses sessions
/// without identifying fields or without a single valid trial. The
/// `rts` and `correct_flags` sequences are always index-aligned and in file order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionData {
    participant_id: String,
    condition: String,
    trials: usize,
    valid_trials: usize,
    rts: Vec<f64>,
    correct_flags: Vec<i64>,
}

impl SessionData {
    /// Build a session from the rows that survived parsing.
    ///
    /// `trials` is the number of rows read, including discarded ones. Returns
    /// `None` when an identifier is empty, no trial is valid, or `trials` is
    /// smaller than the number of valid rows.
    pub fn new(
        participant_id: impl Into<String>,
        condition: impl Into<String>,
        trials: usize,
        valid: Vec<Trial>,
    ) -> Option<Self> {
        let participant_id = participant_id.into();
        let condition = condition.into();

        if participant_id.is_empty() || condition.is_empty() {
            return None;
        }
        if valid.is_empty() || valid.len() > trials {
            return None;
        }

        let (rts, correct_flags): (Vec<f64>, Vec<i64>) =
            valid.iter().map(|t| (t.rt, t.correct)).unzip();

        Some(Self {
            participant_id,
            condition,
            trials,
            valid_trials: valid.len(),
            rts,
            correct_flags,
        })
    }

    pub fn participant_id(&self) -> &str {
        &self.participant_id
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    /// Rows read from the file, malformed ones included
    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn valid_trials(&self) -> usize {
        self.valid_trials
    }

    pub fn rts(&self) -> &[f64] {
        &self.rts
    }

    pub fn correct_flags(&self) -> &[i64] {
        &self.correct_flags
    }

    /// Rows that were read but dropped because `rt` or `correct` did not parse
    pub fn discarded_trials(&self) -> usize {
        self.trials - self.valid_trials
    }
}

/// Descriptive statistics for a single session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub participant_id: String,
    pub condition: String,
    pub trials: usize,
    pub valid_trials: usize,
    pub mean_rt: f64,
    /// Population standard deviation (divisor n)
    pub sd_rt: f64,
    pub errors: usize,
    /// Percentage of valid trials marked incorrect, in [0, 100]
    pub error_rate: f64,
}
