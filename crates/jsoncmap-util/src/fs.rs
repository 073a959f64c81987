use std::path::{Path, PathBuf};

/// Search `start` and each of its ancestors for a file named `filename`,
/// e.g. a `.publish.env` secrets file kept at the project root.
///
/// Returns the first directory that contains the file, nearest one wins.
pub fn find_ancestor_with(start: &Path, filename: &str) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join(filename).is_file() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}
