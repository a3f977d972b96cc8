//! Navigation sidebar component
//!
//! The TUI rendition of the original sidebar buttons: one entry per
//! workspace, exactly one highlighted as active. Selecting an entry
//! emits `Action::SwitchWorkspace` carrying the workspace id; selecting
//! the already-active entry emits nothing.

use crate::action::Action;
use crate::component::Component;
use crate::model::workspace::{WorkspaceId, DEFAULT_WORKSPACE};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Sidebar listing the workspaces
pub struct NavSidebar {
    /// Entries in display order
    pub entries: Vec<WorkspaceId>,
    /// The single active entry
    pub active: WorkspaceId,
}

impl Default for NavSidebar {
    fn default() -> Self {
        Self::new()
    }
}

impl NavSidebar {
    pub fn new() -> Self {
        Self {
            entries: WorkspaceId::all(),
            active: DEFAULT_WORKSPACE,
        }
    }

    /// Mark `id` as the active entry; all others become inactive
    pub fn set_active(&mut self, id: WorkspaceId) {
        self.active = id;
    }

    /// Whether `id` is the active entry
    pub fn is_active(&self, id: WorkspaceId) -> bool {
        self.active == id
    }
}

impl Component for NavSidebar {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char(c) => match WorkspaceId::from_shortcut(c) {
                // Re-selecting the active workspace is a no-op,
                // mirroring the original toggle buttons
                Some(id) if id != self.active => Some(Action::SwitchWorkspace(id)),
                _ => None,
            },
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let mut lines = vec![
            Line::from(Span::styled(
                " Cellscope",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for id in &self.entries {
            let is_active = *id == self.active;
            let marker = if is_active { "▶" } else { " " };
            let style = if is_active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{} [{}] ", marker, id.shortcut()), style),
                Span::styled(format!("{:<10}", id.title()), style),
            ]));
            lines.push(Line::from(""));
        }

        let sidebar = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(sidebar, area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn press(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_starts_on_default_workspace() {
        let nav = NavSidebar::new();
        assert!(nav.is_active(WorkspaceId::Input));
        assert!(!nav.is_active(WorkspaceId::Analysis));
    }

    #[test]
    fn test_shortcut_emits_switch_action() {
        let mut nav = NavSidebar::new();
        let action = nav.handle_key_event(press('2')).unwrap();
        assert_eq!(action, Some(Action::SwitchWorkspace(WorkspaceId::Analysis)));
    }

    #[test]
    fn test_active_entry_does_not_reemit() {
        let mut nav = NavSidebar::new();
        let action = nav.handle_key_event(press('1')).unwrap();
        assert_eq!(action, None);
    }

    #[test]
    fn test_exactly_one_entry_active_after_switch() {
        let mut nav = NavSidebar::new();
        nav.set_active(WorkspaceId::Output);

        let active: Vec<WorkspaceId> = nav
            .entries
            .iter()
            .copied()
            .filter(|id| nav.is_active(*id))
            .collect();
        assert_eq!(active, vec![WorkspaceId::Output]);
    }
}
