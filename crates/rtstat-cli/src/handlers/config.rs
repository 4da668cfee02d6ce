use crate::args::OutputFormat;
use crate::config::Config;
use anyhow::{Result, bail};
use std::path::Path;

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "configuration already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save_to(config_path)?;
    println!("Configuration written to {}", config_path.display());
    Ok(())
}

pub fn show(config: &Config, config_path: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputFormat::Plain => {
            println!("# {}", config_path.display());
            print!("{}", toml::to_string_pretty(config)?);
        }
    }
    Ok(())
}
