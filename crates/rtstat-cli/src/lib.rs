// NOTE: rtstat Architecture Rationale
//
// Why a thin CLI over rtstat-engine?
// - The engine only returns values or errors; printing and exit codes live here
// - Configuration is read here and handed to the engine as plain parameters
// - Handlers stay one-per-command so each can be tested through the binary

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod output;

pub use args::{Cli, Commands, ConfigCommand, LogLevel, OutputFormat};
pub use commands::run;

/// Process exit code for a failure, taken from the engine error when there is one
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<rtstat_engine::Error>())
        .map(rtstat_engine::Error::exit_code)
        .unwrap_or(1)
}
