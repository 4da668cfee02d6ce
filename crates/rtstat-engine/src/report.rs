use crate::Result;
use rtstat_types::{GroupAggregate, GroupComparison, SessionSummary};
use serde_json::Value;
use std::path::Path;

/// Result shapes the renderer knows how to lay out
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Session(SessionSummary),
    Comparison(GroupComparison),
    /// Any other mapping, rendered as `key: value` lines in the given order
    Generic(Vec<(String, String)>),
}

impl From<SessionSummary> for Report {
    fn from(summary: SessionSummary) -> Self {
        Report::Session(summary)
    }
}

impl From<GroupComparison> for Report {
    fn from(comparison: GroupComparison) -> Self {
        Report::Comparison(comparison)
    }
}

impl Report {
    /// Classify an untyped result mapping.
    ///
    /// A `participant_id` key selects the session layout, `group_a` plus
    /// `group_b` the comparison layout. Anything else, including a mapping
    /// that has those keys but does not decode, becomes a generic report.
    pub fn from_json(value: Value) -> Self {
        let Value::Object(map) = value else {
            return Report::Generic(vec![("value".to_string(), display_value(&value))]);
        };

        if map.contains_key("participant_id") {
            if let Ok(summary) = serde_json::from_value(Value::Object(map.clone())) {
                return Report::Session(summary);
            }
        } else if map.contains_key("group_a") && map.contains_key("group_b") {
            if let Ok(comparison) = serde_json::from_value(Value::Object(map.clone())) {
                return Report::Comparison(comparison);
            }
        }

        Report::Generic(
            map.iter()
                .map(|(key, value)| (key.clone(), display_value(value)))
                .collect(),
        )
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render a report into text lines, without trailing newlines
pub fn render_lines(report: &Report) -> Vec<String> {
    match report {
        Report::Session(summary) => render_session(summary),
        Report::Comparison(comparison) => render_comparison(comparison),
        Report::Generic(entries) => {
            let mut lines = vec!["Resumo genérico:".to_string()];
            lines.extend(entries.iter().map(|(k, v)| format!("{}: {}", k, v)));
            lines
        }
    }
}

fn render_session(s: &SessionSummary) -> Vec<String> {
    vec![
        "Relatório de sessão".to_string(),
        format!("Participante: {}", s.participant_id),
        format!("Condição: {}", s.condition),
        format!("Trials totais: {}", s.trials),
        format!("Trials válidos: {}", s.valid_trials),
        format!("Tempo de reação médio: {:.2} ms", s.mean_rt),
        format!("Desvio padrão do TR: {:.2} ms", s.sd_rt),
        format!("Erros: {} ({:.2}%)", s.errors, s.error_rate),
    ]
}

fn render_comparison(c: &GroupComparison) -> Vec<String> {
    let mut lines = vec!["Relatório de comparação de grupos".to_string()];
    push_group(&mut lines, "A", &c.group_a);
    push_group(&mut lines, "B", &c.group_b);
    lines.push("Diferenças (B - A):".to_string());
    lines.push(format!("  Δ TR médio: {:.2} ms", c.diff_mean_rt));
    lines.push(format!(
        "  Δ taxa de erros: {:.2} pontos percentuais",
        c.diff_error_rate
    ));
    lines
}

fn push_group(lines: &mut Vec<String>, label: &str, g: &GroupAggregate) {
    lines.push(format!("Grupo {}:", label));
    lines.push(format!("  Sessões: {}", g.n_sessions));
    lines.push(format!("  TR médio: {:.2} ms (SD={:.2})", g.mean_rt, g.sd_rt));
    lines.push(format!("  Erros: {} ({:.2}%)", g.errors, g.error_rate));
}

/// Render a report and write it to `out_path`, replacing any existing file.
///
/// Parent directories are created first and the whole text goes out in a
/// single write, so a failure before that point leaves no partial file.
pub fn write_report(report: &Report, out_path: impl AsRef<Path>) -> Result<()> {
    let out_path = out_path.as_ref();

    let mut content = render_lines(report).join("\n");
    content.push('\n');

    if let Some(parent) = out_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(out_path, content)?;

    log::info!("Report written to {}", out_path.display());
    Ok(())
}
