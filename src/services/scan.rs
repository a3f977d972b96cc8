//! Directory scanning
//!
//! Synchronous, read-only listing of the filesystem. Per the error
//! model, nothing here fails: a missing, non-directory, or unreadable
//! path produces an empty listing, and entries that cannot be inspected
//! (e.g. permission errors) are skipped silently.

use crate::model::file_item::FileItem;
use crate::model::format::FormatFilter;
use std::fs;
use std::path::{Path, PathBuf};

/// List the regular files in `directory` that pass `filter`, sorted
/// case-insensitively by name, as unchecked list items
pub fn scan_directory(directory: &Path, filter: FormatFilter) -> Vec<FileItem> {
    if !directory.is_dir() {
        return Vec::new();
    }
    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut items: Vec<FileItem> = entries
        .flatten()
        .filter_map(|entry| {
            let path = entry.path();
            // is_file follows symlinks; directories and broken links drop out
            if !path.is_file() {
                return None;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if filter.matches(&name) {
                Some(FileItem::new(name, path))
            } else {
                None
            }
        })
        .collect();

    items.sort_by_key(|item| item.name.to_lowercase());
    items
}

/// List the subdirectories of `directory` for the directory picker,
/// sorted case-insensitively by name
pub fn list_subdirectories(directory: &Path) -> Vec<(String, PathBuf)> {
    if !directory.is_dir() {
        return Vec::new();
    }
    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut dirs: Vec<(String, PathBuf)> = entries
        .flatten()
        .filter_map(|entry| {
            let path = entry.path();
            if path.is_dir() {
                Some((entry.file_name().to_string_lossy().into_owned(), path))
            } else {
                None
            }
        })
        .collect();

    dirs.sort_by_key(|(name, _)| name.to_lowercase());
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        File::create(dir.path().join(name)).unwrap();
    }

    #[test]
    fn test_filter_keeps_only_matching_extensions() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "a.tif");
        touch(&dir, "b.png");
        touch(&dir, "c.txt");
        touch(&dir, "d.TIFF");

        let items = scan_directory(dir.path(), FormatFilter::Tiff);
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a.tif", "d.TIFF"]);
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "Banana.png");
        touch(&dir, "apple.png");
        touch(&dir, "Cherry.png");

        let items = scan_directory(dir.path(), FormatFilter::Png);
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["apple.png", "Banana.png", "Cherry.png"]);
    }

    #[test]
    fn test_directories_are_excluded_even_with_matching_names() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("folder.tif")).unwrap();
        touch(&dir, "file.tif");

        let items = scan_directory(dir.path(), FormatFilter::AllSupported);
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["file.tif"]);
    }

    #[test]
    fn test_missing_directory_gives_empty_listing() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(scan_directory(&missing, FormatFilter::AllSupported).is_empty());
    }

    #[test]
    fn test_file_path_gives_empty_listing() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "plain.tif");
        let file_path = dir.path().join("plain.tif");
        assert!(scan_directory(&file_path, FormatFilter::AllSupported).is_empty());
    }

    #[test]
    fn test_items_carry_absolute_paths() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "cells.nd2");

        let items = scan_directory(dir.path(), FormatFilter::AllSupported);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].path, dir.path().join("cells.nd2"));
        assert!(!items[0].checked);
    }

    #[test]
    fn test_list_subdirectories_sorted_without_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("Zebra")).unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();
        touch(&dir, "loose.png");

        let dirs = list_subdirectories(dir.path());
        let names: Vec<&str> = dirs.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["alpha", "Zebra"]);
    }
}
