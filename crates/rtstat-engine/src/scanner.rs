use crate::loader::load_session;
use crate::{Error, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// CSV files directly inside `dir`, sorted by file name.
///
/// Non-recursive; hidden files are ignored and the `csv` extension is matched exactly.
pub fn csv_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::NotFound(dir.to_path_buf()));
    }

    let files = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::debug!("Skipping unreadable entry in {}: {}", dir.display(), err);
                None
            }
        })
        .filter(|entry| is_session_file(entry.path()))
        .map(|entry| entry.into_path())
        .collect();

    Ok(files)
}

fn is_session_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    !name.starts_with('.') && path.extension().is_some_and(|ext| ext == "csv")
}

/// Distinct participant identifiers across the session files in `dir`, sorted.
///
/// A file that fails to load is skipped; only a missing directory is an error.
pub fn list_participants(dir: impl AsRef<Path>) -> Result<Vec<String>> {
    let mut participants = BTreeSet::new();

    for path in csv_files(dir)? {
        match load_session(&path) {
            Ok(session) => {
                participants.insert(session.participant_id().to_string());
            }
            Err(err) => log::debug!("Skipping {}: {}", path.display(), err),
        }
    }

    Ok(participants.into_iter().collect())
}
