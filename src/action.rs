//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::format::FormatFilter;
use crate::model::workspace::WorkspaceId;
use std::fmt;
use std::path::PathBuf;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Workspace Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Activate a workspace from the sidebar
    SwitchWorkspace(WorkspaceId),
    /// Move to next tab within the active workspace
    NextTab,
    /// Move to previous tab within the active workspace
    PrevTab,

    // ─────────────────────────────────────────────────────────────────────────
    // List Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next item in the file list
    NextItem,
    /// Move to previous item in the file list
    PrevItem,
    /// Jump to first item
    FirstItem,
    /// Jump to last item
    LastItem,

    // ─────────────────────────────────────────────────────────────────────────
    // File Selection
    // ─────────────────────────────────────────────────────────────────────────
    /// Toggle the checkbox of the highlighted file
    ToggleItem,
    /// Check every file in the list
    SelectAll,
    /// Uncheck every file in the list
    ClearAll,
    /// The current selection, emitted after any checkbox change
    FilesSelected(Vec<PathBuf>),

    // ─────────────────────────────────────────────────────────────────────────
    // Directory & Filter
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the directory picker modal
    OpenDirectoryPicker,
    /// A directory was chosen in the picker
    DirectorySelected(PathBuf),
    /// Open the format filter modal
    OpenFormatSelector,
    /// A format filter was chosen
    SetFormatFilter(FormatFilter),
    /// Re-scan the current directory
    RefreshListing,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SwitchWorkspace(id) => write!(f, "SwitchWorkspace({})", id),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::ToggleItem => write!(f, "ToggleItem"),
            Action::SelectAll => write!(f, "SelectAll"),
            Action::ClearAll => write!(f, "ClearAll"),
            Action::FilesSelected(files) => write!(f, "FilesSelected({} files)", files.len()),
            Action::OpenDirectoryPicker => write!(f, "OpenDirectoryPicker"),
            Action::DirectorySelected(dir) => {
                write!(f, "DirectorySelected({})", dir.display())
            }
            Action::OpenFormatSelector => write!(f, "OpenFormatSelector"),
            Action::SetFormatFilter(filter) => write!(f, "SetFormatFilter({})", filter.label()),
            Action::RefreshListing => write!(f, "RefreshListing"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
