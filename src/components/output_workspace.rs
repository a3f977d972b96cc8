//! Output workspace (placeholder)
//!
//! Will hold result viewing, report generation, and data export once an
//! analysis core exists. Until then it renders a static placeholder
//! panel.

use crate::component::{Component, Workspace};
use crate::components::analysis_workspace::draw_placeholder;
use crate::model::workspace::WorkspaceId;
use anyhow::Result;
use ratatui::{layout::Rect, Frame};

/// Workspace for viewing and exporting analysis results
#[derive(Default)]
pub struct OutputWorkspace;

impl Component for OutputWorkspace {
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        draw_placeholder(
            frame,
            area,
            "Output Workspace",
            &[
                "Output workspace content will be added here.",
                "",
                "Future features:",
                "• Results visualization",
                "• Report generation",
                "• Data export",
            ],
        );
        Ok(())
    }
}

impl Workspace for OutputWorkspace {
    fn id(&self) -> WorkspaceId {
        WorkspaceId::Output
    }

    fn title(&self) -> &str {
        "Output"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_members() {
        let workspace = OutputWorkspace;
        assert_eq!(workspace.id(), WorkspaceId::Output);
        assert_eq!(workspace.title(), "Output");
    }
}
