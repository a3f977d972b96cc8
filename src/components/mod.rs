//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod analysis_workspace;
pub mod directory_picker;
pub mod file_import;
pub mod format_dialog;
pub mod help_dialog;
pub mod input_workspace;
pub mod layout;
pub mod nav;
pub mod output_workspace;
pub mod quit_dialog;

pub use analysis_workspace::{draw_placeholder, AnalysisWorkspace};
pub use directory_picker::DirectoryPickerDialog;
pub use file_import::FileImportComponent;
pub use format_dialog::FormatSelectorDialog;
pub use help_dialog::HelpDialog;
pub use input_workspace::InputWorkspace;
pub use layout::{calculate_main_layout, centered_popup};
pub use nav::NavSidebar;
pub use output_workspace::OutputWorkspace;
pub use quit_dialog::QuitDialog;
