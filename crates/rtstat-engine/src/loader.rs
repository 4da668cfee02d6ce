use crate::{Error, Result};
use csv::StringRecord;
use rtstat_types::{SessionData, Trial};
use std::io::Read;
use std::path::Path;

/// Header columns every session file must carry (any order, extras ignored)
pub const REQUIRED_COLUMNS: [&str; 5] = ["participant_id", "condition", "trial", "rt", "correct"];

/// Positions of the columns the loader reads
#[derive(Debug, Clone, Copy)]
struct Columns {
    participant_id: usize,
    condition: usize,
    rt: usize,
    correct: usize,
}

impl Columns {
    /// Resolve required columns against a header, or report the missing ones
    fn resolve(headers: &StringRecord) -> std::result::Result<Self, Vec<String>> {
        // Later duplicates win, like a header-keyed row mapping would
        let find = |name: &str| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| *h == name)
                .map(|(i, _)| i)
                .last()
        };

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| find(**name).is_none())
            .map(|name| name.to_string())
            .collect();

        match (
            find("participant_id"),
            find("condition"),
            find("rt"),
            find("correct"),
        ) {
            (Some(participant_id), Some(condition), Some(rt), Some(correct))
                if missing.is_empty() =>
            {
                Ok(Self {
                    participant_id,
                    condition,
                    rt,
                    correct,
                })
            }
            _ => Err(missing),
        }
    }
}

/// Rows read from one file, split into what parsed and what was dropped
#[derive(Debug, Default)]
struct Ingested {
    participant_id: Option<String>,
    condition: Option<String>,
    rows: usize,
    valid: Vec<Trial>,
}

impl Ingested {
    fn discarded(&self) -> usize {
        self.rows - self.valid.len()
    }

    fn observe(&mut self, record: &StringRecord, columns: &Columns) {
        self.rows += 1;

        // NOTE: identifiers come from the first row carrying a non-empty value,
        // whether or not that row's rt/correct parse. Whether this should be the
        // first *valid* row instead is still an open question; keep as is.
        if self.participant_id.is_none() {
            self.participant_id = non_empty(record, columns.participant_id);
        }
        if self.condition.is_none() {
            self.condition = non_empty(record, columns.condition);
        }

        if let Some(trial) = parse_trial(record, columns) {
            self.valid.push(trial);
        }
    }
}

fn non_empty(record: &StringRecord, index: usize) -> Option<String> {
    record
        .get(index)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Parse the numeric fields of a row; `None` means the row is dropped
fn parse_trial(record: &StringRecord, columns: &Columns) -> Option<Trial> {
    let rt = record.get(columns.rt)?.trim().parse::<f64>().ok()?;
    let correct = record.get(columns.correct)?.trim().parse::<i64>().ok()?;
    Some(Trial::new(rt, correct))
}

/// Load and validate one session CSV file.
///
/// Malformed rows are dropped and only counted in `trials`. Fails with
/// [`Error::NotFound`] for a missing file, [`Error::Schema`] for a header
/// without the required columns and [`Error::NoValidData`] when nothing usable remains.
pub fn load_session(path: impl AsRef<Path>) -> Result<SessionData> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let file = std::fs::File::open(path)?;
    read_session(file, path)
}

fn read_session<R: Read>(source: R, path: &Path) -> Result<SessionData> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(source);

    let headers = reader.headers()?.clone();
    let columns = Columns::resolve(&headers).map_err(|missing| Error::Schema {
        path: path.to_path_buf(),
        missing,
    })?;

    let mut ingested = Ingested::default();
    for record in reader.records() {
        ingested.observe(&record?, &columns);
    }

    log::debug!(
        "{}: {} rows read, {} discarded",
        path.display(),
        ingested.rows,
        ingested.discarded()
    );

    let no_data = || Error::NoValidData(path.display().to_string());
    let (Some(participant_id), Some(condition)) = (ingested.participant_id, ingested.condition)
    else {
        return Err(no_data());
    };

    SessionData::new(participant_id, condition, ingested.rows, ingested.valid).ok_or_else(no_data)
}
