//! Help dialog component
//!
//! Displays all keyboard shortcuts available in the application.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let margin = 4;
        let dialog_area = Rect::new(
            margin,
            margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        // Clamp scroll offset
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:12}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "Workspaces");
    add_shortcut(&mut lines, "1", "Input workspace");
    add_shortcut(&mut lines, "2", "Analysis workspace");
    add_shortcut(&mut lines, "3", "Output workspace");
    add_shortcut(&mut lines, "Tab", "Next tab within workspace");
    add_shortcut(&mut lines, "Shift+Tab", "Previous tab");

    add_section(&mut lines, "File List");
    add_shortcut(&mut lines, "j / ↓", "Move to next file");
    add_shortcut(&mut lines, "k / ↑", "Move to previous file");
    add_shortcut(&mut lines, "g", "Jump to first file");
    add_shortcut(&mut lines, "G", "Jump to last file");
    add_shortcut(&mut lines, "Space", "Toggle file checkbox");
    add_shortcut(&mut lines, "a", "Select all files");
    add_shortcut(&mut lines, "c", "Clear all selections");

    add_section(&mut lines, "Directory & Format");
    add_shortcut(&mut lines, "o", "Open directory picker");
    add_shortcut(&mut lines, "f", "Choose file format filter");
    add_shortcut(&mut lines, "r", "Refresh directory listing");

    add_section(&mut lines, "Dialogs");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit / Close dialog");
    add_shortcut(&mut lines, "Ctrl+c", "Quit immediately");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_scroll_and_close() {
        let mut dialog = HelpDialog::default();
        dialog.handle_key_event(press(KeyCode::Char('j'))).unwrap();
        dialog.handle_key_event(press(KeyCode::PageDown)).unwrap();
        assert_eq!(dialog.scroll_offset, 11);

        dialog.handle_key_event(press(KeyCode::Char('k'))).unwrap();
        assert_eq!(dialog.scroll_offset, 10);

        let action = dialog.handle_key_event(press(KeyCode::Char('?'))).unwrap();
        assert_eq!(action, Some(Action::CloseModal));
    }

    #[test]
    fn test_help_lists_every_workspace_shortcut() {
        let content = build_help_content();
        let text: String = content
            .iter()
            .flat_map(|line| line.spans.iter())
            .map(|span| span.content.as_ref())
            .collect();
        for label in ["Input workspace", "Analysis workspace", "Output workspace"] {
            assert!(text.contains(label), "{} missing from help", label);
        }
    }
}
