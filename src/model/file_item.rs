//! File list items and the import snapshot
//!
//! A `FileItem` is one row of the File Import list: a file name, its
//! absolute path, and the checkbox state. Check state lives only in the
//! list; it is rebuilt (all unchecked) whenever the directory or the
//! format filter changes.

use serde::Serialize;
use std::path::PathBuf;

/// One checkable row in the File Import list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileItem {
    /// File name as displayed
    pub name: String,
    /// Absolute path to the file
    pub path: PathBuf,
    /// Checkbox state
    pub checked: bool,
}

impl FileItem {
    /// New unchecked item
    pub fn new(name: String, path: PathBuf) -> Self {
        Self {
            name,
            path,
            checked: false,
        }
    }
}

/// Point-in-time view of the File Import tab, the data handed to
/// downstream consumers
#[derive(Debug, Clone, Serialize)]
pub struct ImportSnapshot {
    /// Directory currently shown
    pub directory: PathBuf,
    /// Absolute paths of checked files, in display order
    pub selected_files: Vec<PathBuf>,
    /// Label of the active format filter
    pub format_filter: String,
}
