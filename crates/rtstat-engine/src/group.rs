use crate::loader::load_session;
use crate::stats;
use crate::{Error, Result};
use rtstat_types::{GroupAggregate, GroupComparison};
use std::collections::BTreeSet;
use std::path::Path;

/// Pool every trial of the given sessions and describe the result.
///
/// Any file that fails to load fails the whole group. Statistics are taken
/// over the concatenated trials, so sessions with more trials weigh more.
pub fn aggregate_group<P: AsRef<Path>>(paths: &[P]) -> Result<GroupAggregate> {
    if paths.is_empty() {
        return Err(Error::EmptyGroup);
    }

    let mut rts: Vec<f64> = Vec::new();
    let mut correct_flags: Vec<i64> = Vec::new();
    let mut conditions = BTreeSet::new();

    for path in paths {
        let session = load_session(path)?;
        rts.extend_from_slice(session.rts());
        correct_flags.extend_from_slice(session.correct_flags());
        conditions.insert(session.condition().to_string());
    }

    log::debug!("Pooled {} trials from {} sessions", rts.len(), paths.len());

    let described = stats::describe(&rts, &correct_flags)
        .ok_or_else(|| Error::NoValidData("group".to_string()))?;

    Ok(GroupAggregate {
        n_sessions: paths.len(),
        mean_rt: described.mean_rt,
        sd_rt: described.sd_rt,
        errors: described.errors,
        error_rate: described.error_rate,
        conditions: conditions.into_iter().collect(),
    })
}

/// Aggregate two groups and compute their differences (B minus A).
///
/// Both lists are checked for emptiness before any file is read; group A is
/// aggregated first, so its failure is the one reported when both sides fail.
pub fn compare_groups<P: AsRef<Path>, Q: AsRef<Path>>(
    paths_a: &[P],
    paths_b: &[Q],
) -> Result<GroupComparison> {
    if paths_a.is_empty() || paths_b.is_empty() {
        return Err(Error::InvalidInput(
            "both groups A and B must contain at least one file".to_string(),
        ));
    }

    let group_a = aggregate_group(paths_a)?;
    let group_b = aggregate_group(paths_b)?;

    Ok(GroupComparison::new(group_a, group_b))
}
