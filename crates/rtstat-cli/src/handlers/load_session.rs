use crate::args::OutputFormat;
use crate::output;
use anyhow::Result;
use std::path::Path;

pub fn handle(csv_path: &Path, format: OutputFormat) -> Result<()> {
    let session = rtstat_engine::load_session(csv_path)?;
    output::emit(&session, "Session data:", format)
}
