use crate::loader::load_session;
use crate::stats;
use crate::{Error, Result};
use rtstat_types::{SessionData, SessionSummary};
use std::path::Path;

/// Load a session file and compute its descriptive statistics
pub fn compute_summary(path: impl AsRef<Path>) -> Result<SessionSummary> {
    let session = load_session(path)?;
    summarize(&session)
}

/// Descriptive statistics for an already loaded session
pub fn summarize(session: &SessionData) -> Result<SessionSummary> {
    let described = stats::describe(session.rts(), session.correct_flags())
        .ok_or_else(|| Error::NoValidData(session.participant_id().to_string()))?;

    Ok(SessionSummary {
        participant_id: session.participant_id().to_string(),
        condition: session.condition().to_string(),
        trials: session.trials(),
        valid_trials: session.valid_trials(),
        mean_rt: described.mean_rt,
        sd_rt: described.sd_rt,
        errors: described.errors,
        error_rate: described.error_rate,
    })
}
