//! Analysis workspace (placeholder)
//!
//! Will hold method selection, parameter configuration, and pipeline
//! execution once an analysis core exists. Until then it renders a
//! static placeholder panel.

use crate::component::{Component, Workspace};
use crate::model::workspace::WorkspaceId;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Workspace for configuring and running image analysis
#[derive(Default)]
pub struct AnalysisWorkspace;

impl Component for AnalysisWorkspace {
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        draw_placeholder(
            frame,
            area,
            "Analysis Workspace",
            &[
                "Analysis workspace content will be added here.",
                "",
                "Future features:",
                "• Analysis method selection",
                "• Parameter configuration",
                "• Pipeline execution",
            ],
        );
        Ok(())
    }
}

impl Workspace for AnalysisWorkspace {
    fn id(&self) -> WorkspaceId {
        WorkspaceId::Analysis
    }

    fn title(&self) -> &str {
        "Analysis"
    }
}

/// Shared placeholder rendering for the unimplemented workspaces
pub fn draw_placeholder(frame: &mut Frame, area: Rect, header: &str, body: &[&str]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {}", header),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let lines: Vec<Line> = body
        .iter()
        .map(|text| Line::from(Span::styled(*text, Style::default().fg(Color::DarkGray))))
        .collect();

    let placeholder = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(placeholder, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_members() {
        let workspace = AnalysisWorkspace;
        assert_eq!(workspace.id(), WorkspaceId::Analysis);
        assert_eq!(workspace.title(), "Analysis");
    }
}
