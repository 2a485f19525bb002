//! Durable file writes shared by the persistence crates.

use std::{
    ffi::OsString,
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

/// Replaces `path` with `contents` so readers never observe a partial file.
///
/// The data is staged in a sibling `<name>.tmp`, synced, then renamed over the
/// target. Missing parent directories are created.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let staged = staging_path(path);
    let mut file = File::create(&staged)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    drop(file);
    fs::rename(&staged, path)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("staged"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staging_file_sits_next_to_target() {
        let target = Path::new("/data/plans/cashflow-2025-03.json");
        assert_eq!(
            staging_path(target),
            PathBuf::from("/data/plans/cashflow-2025-03.json.tmp")
        );
    }

    #[test]
    fn write_atomic_creates_parents_and_leaves_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("plan.json");

        write_atomic(&target, "{\"a\":1}").unwrap();
        write_atomic(&target, "{\"a\":2}").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "{\"a\":2}");
        assert!(!staging_path(&target).exists());
    }
}
