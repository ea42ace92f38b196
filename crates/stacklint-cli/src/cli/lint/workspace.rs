//! Stack directory discovery

use stacklint_core::FileEntry;
use std::fs;
use std::path::Path;

/// Checks that `path` names an existing directory.
pub fn validate_directory(path: &str) -> Result<(), String> {
    if path.is_empty() {
        return Err("tf-directory is blank".to_string());
    }
    let metadata = fs::metadata(path).map_err(|e| format!("{}: {}", path, e))?;
    if !metadata.is_dir() {
        return Err(format!("Expected '{}' to be a directory", path));
    }
    Ok(())
}

/// Lists the entries of `dir`, sorted by name.
pub fn list_entries(dir: &Path) -> Result<Vec<FileEntry>, String> {
    let read_dir =
        fs::read_dir(dir).map_err(|e| format!("Failed to read {}: {}", dir.display(), e))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| format!("Failed to read {}: {}", dir.display(), e))?;
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        entries.push(FileEntry { name: entry.file_name().to_string_lossy().into_owned(), is_dir });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_directory_is_rejected() {
        assert_eq!(validate_directory(""), Err("tf-directory is blank".to_string()));
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("resources.tf");
        fs::write(&file, "").unwrap();

        let path = file.display().to_string();
        assert_eq!(
            validate_directory(&path),
            Err(format!("Expected '{}' to be a directory", path))
        );
        assert!(validate_directory(&dir.path().display().to_string()).is_ok());
    }

    #[test]
    fn test_entries_are_sorted_and_typed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("variables.tf"), "").unwrap();
        fs::write(dir.path().join("data.tf"), "").unwrap();
        fs::create_dir(dir.path().join("modules")).unwrap();

        let entries = list_entries(dir.path()).unwrap();
        assert_eq!(
            entries,
            vec![FileEntry::file("data.tf"), FileEntry::dir("modules"), FileEntry::file("variables.tf")]
        );
    }
}
