//! Workspace identifiers
//!
//! The application is organized as a small closed set of workspaces
//! selected from the sidebar. Exactly one workspace is active at a time.

use std::fmt;

/// Identifier for a top-level workspace panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceId {
    Input,
    Analysis,
    Output,
}

impl WorkspaceId {
    /// All workspaces in sidebar order
    pub fn all() -> Vec<WorkspaceId> {
        vec![
            WorkspaceId::Input,
            WorkspaceId::Analysis,
            WorkspaceId::Output,
        ]
    }

    /// Stable machine-readable name
    pub fn name(&self) -> &'static str {
        match self {
            WorkspaceId::Input => "input",
            WorkspaceId::Analysis => "analysis",
            WorkspaceId::Output => "output",
        }
    }

    /// Display title shown in the sidebar and status bar
    pub fn title(&self) -> &'static str {
        match self {
            WorkspaceId::Input => "Input",
            WorkspaceId::Analysis => "Analysis",
            WorkspaceId::Output => "Output",
        }
    }

    /// Number key that selects this workspace ('1'..='3')
    pub fn shortcut(&self) -> char {
        match self {
            WorkspaceId::Input => '1',
            WorkspaceId::Analysis => '2',
            WorkspaceId::Output => '3',
        }
    }

    /// Map a number key back to a workspace
    pub fn from_shortcut(c: char) -> Option<WorkspaceId> {
        WorkspaceId::all().into_iter().find(|id| id.shortcut() == c)
    }
}

/// Workspace shown on startup
pub const DEFAULT_WORKSPACE: WorkspaceId = WorkspaceId::Input;

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
