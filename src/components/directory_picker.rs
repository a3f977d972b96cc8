//! Directory picker dialog component
//!
//! Modal replacement for a desktop "choose directory" dialog: browse
//! into subdirectories, walk back up, and confirm the directory under
//! the cursor. Only directories are listed; unreadable ones simply show
//! as empty when entered.

use crate::action::Action;
use crate::component::Component;
use crate::services::list_subdirectories;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthStr;

/// Modal directory browser
pub struct DirectoryPickerDialog {
    /// Directory whose children are listed; confirming picks this
    /// directory or a highlighted child
    pub cursor: PathBuf,
    /// Subdirectories of `cursor`
    pub entries: Vec<(String, PathBuf)>,
    pub list_state: ListState,
}

impl Default for DirectoryPickerDialog {
    fn default() -> Self {
        Self {
            cursor: PathBuf::from("."),
            entries: Vec::new(),
            list_state: ListState::default(),
        }
    }
}

impl DirectoryPickerDialog {
    /// (Re)open the picker rooted at `start`
    pub fn open(&mut self, start: &Path) {
        self.cursor = start.to_path_buf();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.entries = list_subdirectories(&self.cursor);
        if self.entries.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    /// Enter the highlighted subdirectory
    pub fn descend(&mut self) {
        if let Some(index) = self.list_state.selected() {
            if let Some((_, path)) = self.entries.get(index) {
                self.cursor = path.clone();
                self.refresh();
            }
        }
    }

    /// Move the cursor to the parent directory
    pub fn ascend(&mut self) {
        if let Some(parent) = self.cursor.parent() {
            self.cursor = parent.to_path_buf();
            self.refresh();
        }
    }

    fn next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = (current + 1) % self.entries.len();
        self.list_state.select(Some(next));
    }

    fn previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = (current + self.entries.len() - 1) % self.entries.len();
        self.list_state.select(Some(prev));
    }
}

impl Component for DirectoryPickerDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Char('s') => Some(Action::DirectorySelected(self.cursor.clone())),
            KeyCode::Enter | KeyCode::Char('l') => {
                self.descend();
                None
            }
            KeyCode::Backspace | KeyCode::Char('h') => {
                self.ascend();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.next();
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous();
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let popup_width = 70u16.min(area.width.saturating_sub(4));
        let popup_height = 20u16.min(area.height.saturating_sub(4));
        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(popup_area);

        // Header: the directory that 's' would select
        let path_text = self.cursor.display().to_string();
        let budget = (chunks[0].width as usize).saturating_sub(2);
        let shown = if path_text.width() > budget {
            let tail: String = path_text
                .chars()
                .rev()
                .take(budget.saturating_sub(1))
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("…{}", tail)
        } else {
            path_text
        };
        let header = Paragraph::new(Line::from(Span::styled(
            shown,
            Style::default().fg(Color::Cyan),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Select Directory ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, chunks[0]);

        // Body: subdirectory list
        if self.entries.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "  (no subdirectories)",
                Style::default().fg(Color::DarkGray),
            )))
            .block(
                Block::default()
                    .borders(Borders::LEFT | Borders::RIGHT)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            frame.render_widget(empty, chunks[1]);
        } else {
            let items: Vec<ListItem> = self
                .entries
                .iter()
                .map(|(name, _)| {
                    ListItem::new(Line::from(vec![
                        Span::styled("📁 ", Style::default().fg(Color::Yellow)),
                        Span::raw(name.clone()),
                    ]))
                })
                .collect();

            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::LEFT | Borders::RIGHT)
                        .border_style(Style::default().fg(Color::DarkGray)),
                )
                .highlight_style(
                    Style::default()
                        .bg(Color::Blue)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▶ ");
            frame.render_stateful_widget(list, chunks[1], &mut self.list_state);
        }

        // Help bar
        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Open  "),
            Span::styled(" Bksp ", Style::default().fg(Color::Yellow)),
            Span::raw("Up  "),
            Span::styled(" s ", Style::default().fg(Color::Green)),
            Span::raw("Select this directory  "),
            Span::styled(" Esc ", Style::default().fg(Color::Yellow)),
            Span::raw("Cancel"),
        ]))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use std::fs;
    use tempfile::TempDir;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_open_lists_subdirectories_only() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::File::create(dir.path().join("file.tif")).unwrap();

        let mut picker = DirectoryPickerDialog::default();
        picker.open(dir.path());

        let names: Vec<&str> = picker.entries.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["nested"]);
    }

    #[test]
    fn test_descend_and_ascend() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();

        let mut picker = DirectoryPickerDialog::default();
        picker.open(dir.path());

        picker.handle_key_event(press(KeyCode::Enter)).unwrap();
        assert_eq!(picker.cursor, nested);

        picker.handle_key_event(press(KeyCode::Backspace)).unwrap();
        assert_eq!(picker.cursor, dir.path());
    }

    #[test]
    fn test_select_emits_cursor_directory() {
        let dir = TempDir::new().unwrap();
        let mut picker = DirectoryPickerDialog::default();
        picker.open(dir.path());

        let action = picker.handle_key_event(press(KeyCode::Char('s'))).unwrap();
        assert_eq!(
            action,
            Some(Action::DirectorySelected(dir.path().to_path_buf()))
        );
    }

    #[test]
    fn test_escape_closes_without_selection() {
        let dir = TempDir::new().unwrap();
        let mut picker = DirectoryPickerDialog::default();
        picker.open(dir.path());

        let action = picker.handle_key_event(press(KeyCode::Esc)).unwrap();
        assert_eq!(action, Some(Action::CloseModal));
    }
}
