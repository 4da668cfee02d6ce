use crate::args::{OutputFormat, split_paths};
use crate::config::Config;
use crate::output;
use anyhow::Result;
use rtstat_engine::Report;
use std::path::Path;

pub fn handle(
    paths_a: &str,
    paths_b: &str,
    report: Option<&Path>,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let comparison = rtstat_engine::compare_groups(&split_paths(paths_a), &split_paths(paths_b))?;
    output::emit(&comparison, "Group comparison:", format)?;

    if let Some(out_path) = report {
        super::report::write(&Report::from(comparison), out_path, config, format)?;
    }

    Ok(())
}
