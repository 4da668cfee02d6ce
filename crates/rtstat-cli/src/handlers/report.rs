use crate::args::OutputFormat;
use crate::config::Config;
use anyhow::{Context, Result};
use rtstat_engine::Report;
use std::path::{Path, PathBuf};

pub fn handle(
    csv_path: &Path,
    out_path: &Path,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let summary = rtstat_engine::compute_summary(csv_path)?;
    let written = write(&Report::from(summary), out_path, config, format)?;

    if format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::json!({ "report": written.display().to_string() })
        );
    }
    Ok(())
}

/// Write a report honouring the configured extension; in plain mode, echo it
/// when `include_summary` is set and confirm the destination.
pub fn write(
    report: &Report,
    out_path: &Path,
    config: &Config,
    format: OutputFormat,
) -> Result<PathBuf> {
    let out_path = config.report_path(out_path);
    rtstat_engine::write_report(report, &out_path)
        .with_context(|| format!("failed to write report {}", out_path.display()))?;

    if format == OutputFormat::Plain {
        if config.include_summary {
            for line in rtstat_engine::render_lines(report) {
                println!("{}", line);
            }
        }
        println!("Report generated at {}", out_path.display());
    }

    Ok(out_path)
}
