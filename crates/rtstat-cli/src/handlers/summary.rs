use crate::args::OutputFormat;
use crate::output;
use anyhow::Result;
use std::path::Path;

pub fn handle(csv_path: &Path, format: OutputFormat) -> Result<()> {
    let summary = rtstat_engine::compute_summary(csv_path)?;
    output::emit(&summary, "Session summary:", format)
}
