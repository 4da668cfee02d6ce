use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rtstat")]
#[command(about = "Descriptive statistics for reaction-time experiment sessions", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Configuration file (default: platform config dir)")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Load one session file and print its trial data")]
    LoadSession { csv_path: PathBuf },

    #[command(about = "List distinct participants found in a directory of session files")]
    Participants {
        #[arg(help = "Directory to scan (default: data_dir from configuration)")]
        data_dir: Option<PathBuf>,
    },

    #[command(about = "Descriptive statistics for one session")]
    Summary { csv_path: PathBuf },

    #[command(about = "Pool two groups of sessions and compare them (B - A)")]
    Compare {
        #[arg(help = "Comma-separated session files of group A")]
        paths_a: String,

        #[arg(help = "Comma-separated session files of group B")]
        paths_b: String,

        #[arg(long, help = "Also write the comparison report to this path")]
        report: Option<PathBuf>,
    },

    #[command(about = "Write a text report for one session")]
    Report { csv_path: PathBuf, out_path: PathBuf },

    #[command(about = "Manage the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Write a configuration file with default values")]
    Init {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },

    #[command(about = "Show the effective configuration")]
    Show,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Split a comma-separated path list, trimming entries and dropping empty ones
pub fn split_paths(list: &str) -> Vec<PathBuf> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(PathBuf::from)
        .collect()
}
