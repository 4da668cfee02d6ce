use crate::args::OutputFormat;
use crate::config::Config;
use crate::output;
use anyhow::Result;
use std::path::Path;

pub fn handle(data_dir: Option<&Path>, config: &Config, format: OutputFormat) -> Result<()> {
    let dir = data_dir.unwrap_or(config.data_dir.as_path());
    let participants = rtstat_engine::list_participants(dir)?;

    if participants.is_empty() && format == OutputFormat::Plain {
        println!("No participants found in {}", dir.display());
        return Ok(());
    }

    output::emit(&participants, "Participants:", format)
}
