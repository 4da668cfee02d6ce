use crate::args::OutputFormat;
use anyhow::Result;
use rtstat_types::{GroupAggregate, GroupComparison, SessionData, SessionSummary};
use serde::Serialize;

/// Plain-text rendering of a result as `key: value` lines
pub trait PlainLines {
    fn plain_lines(&self) -> Vec<String>;
}

/// Print a result on stdout, with a title line in plain mode
pub fn emit<T: Serialize + PlainLines>(value: &T, title: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Plain => {
            println!("{}", title);
            for line in value.plain_lines() {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

impl PlainLines for SessionData {
    fn plain_lines(&self) -> Vec<String> {
        vec![
            format!("participant_id: {}", self.participant_id()),
            format!("condition: {}", self.condition()),
            format!("trials: {}", self.trials()),
            format!("valid_trials: {}", self.valid_trials()),
            format!("rts: {}", format_list(self.rts(), |rt| format!("{:?}", rt))),
            format!(
                "correct_flags: {}",
                format_list(self.correct_flags(), |c| c.to_string())
            ),
        ]
    }
}

impl PlainLines for SessionSummary {
    fn plain_lines(&self) -> Vec<String> {
        vec![
            format!("participant_id: {}", self.participant_id),
            format!("condition: {}", self.condition),
            format!("trials: {}", self.trials),
            format!("valid_trials: {}", self.valid_trials),
            format!("mean_rt: {:.2}", self.mean_rt),
            format!("sd_rt: {:.2}", self.sd_rt),
            format!("errors: {}", self.errors),
            format!("error_rate: {:.2}", self.error_rate),
        ]
    }
}

impl PlainLines for GroupAggregate {
    fn plain_lines(&self) -> Vec<String> {
        vec![
            format!("n_sessions: {}", self.n_sessions),
            format!("mean_rt: {:.2}", self.mean_rt),
            format!("sd_rt: {:.2}", self.sd_rt),
            format!("errors: {}", self.errors),
            format!("error_rate: {:.2}", self.error_rate),
            format!("conditions: {}", format_list(&self.conditions, |c| c.clone())),
        ]
    }
}

impl PlainLines for GroupComparison {
    fn plain_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (label, group) in [("group_a", &self.group_a), ("group_b", &self.group_b)] {
            lines.push(format!("{}:", label));
            lines.extend(group.plain_lines().into_iter().map(|l| format!("  {}", l)));
        }
        lines.push(format!("diff_mean_rt: {:.2}", self.diff_mean_rt));
        lines.push(format!("diff_error_rate: {:.2}", self.diff_error_rate));
        lines
    }
}

impl PlainLines for Vec<String> {
    fn plain_lines(&self) -> Vec<String> {
        self.clone()
    }
}

fn format_list<T>(items: &[T], fmt: impl Fn(&T) -> String) -> String {
    let inner: Vec<String> = items.iter().map(fmt).collect();
    format!("[{}]", inner.join(", "))
}
