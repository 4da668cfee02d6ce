use serde::{Deserialize, Serialize};

/// Pooled statistics over every trial of one or more sessions.
///
/// Mean and standard deviation are computed over the concatenated trials,
/// not averaged from per-session summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupAggregate {
    pub n_sessions: usize,
    pub mean_rt: f64,
    pub sd_rt: f64,
    pub errors: usize,
    pub error_rate: f64,
    /// Distinct session conditions, sorted
    pub conditions: Vec<String>,
}

/// Two aggregated groups and their differences (B minus A)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupComparison {
    pub group_a: GroupAggregate,
    pub group_b: GroupAggregate,
    pub diff_mean_rt: f64,
    /// Difference in percentage points
    pub diff_error_rate: f64,
}

impl GroupComparison {
    pub fn new(group_a: GroupAggregate, group_b: GroupAggregate) -> Self {
        let diff_mean_rt = group_b.mean_rt - group_a.mean_rt;
        let diff_error_rate = group_b.error_rate - group_a.error_rate;

        Self {
            group_a,
            group_b,
            diff_mean_rt,
            diff_error_rate,
        }
    }
}
