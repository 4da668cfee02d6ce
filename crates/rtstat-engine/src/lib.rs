// Engine module - session ingestion, statistics and report rendering.
// This layer sits between raw CSV files and the CLI presentation; it never
// prints and never exits, it only returns results or errors.

pub mod error;
pub mod group;
pub mod loader;
pub mod report;
pub mod scanner;
pub mod stats;
pub mod summary;

pub use error::{Error, ErrorKind, Result};
pub use group::{aggregate_group, compare_groups};
pub use loader::{REQUIRED_COLUMNS, load_session};
pub use report::{Report, render_lines, write_report};
pub use scanner::{csv_files, list_participants};
pub use summary::{compute_summary, summarize};

pub use rtstat_types::{GroupAggregate, GroupComparison, SessionData, SessionSummary, Trial};
