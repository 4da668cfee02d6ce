/// Descriptive statistics over a flat sequence of trials
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialStats {
    pub mean_rt: f64,
    pub sd_rt: f64,
    pub errors: usize,
    pub error_rate: f64,
}

/// Describe reaction times and correctness flags.
///
/// Returns `None` for an empty `rts`; the mean is undefined there.
pub fn describe(rts: &[f64], correct_flags: &[i64]) -> Option<TrialStats> {
    let mean_rt = mean(rts)?;
    let errors = count_errors(correct_flags);

    Some(TrialStats {
        mean_rt,
        sd_rt: population_sd(rts, mean_rt),
        errors,
        error_rate: error_rate(errors, correct_flags.len()),
    })
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Standard deviation with divisor n. A single sample yields 0.0.
pub fn population_sd(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

pub fn count_errors(correct_flags: &[i64]) -> usize {
    correct_flags.iter().filter(|&&c| c == 0).count()
}

/// Percentage of `total` that `errors` represents; 0.0 when `total` is zero
pub fn error_rate(errors: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    errors as f64 / total as f64 * 100.0
}
