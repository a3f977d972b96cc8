//! Format filter dialog component
//!
//! Modal stand-in for the format dropdown: pick which image formats the
//! File Import list should show. Number keys select directly, Enter
//! confirms the highlighted entry.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_popup;
use crate::model::format::FormatFilter;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState},
    Frame,
};

/// Modal list of the available format filters
pub struct FormatSelectorDialog {
    /// Filters in display order
    pub filters: Vec<FormatFilter>,
    /// Filter active in the file list when the dialog opened
    pub current: FormatFilter,
    pub list_state: ListState,
}

impl Default for FormatSelectorDialog {
    fn default() -> Self {
        Self {
            filters: FormatFilter::all(),
            current: FormatFilter::default(),
            list_state: ListState::default(),
        }
    }
}

impl FormatSelectorDialog {
    /// (Re)open the dialog with the cursor on the active filter
    pub fn open(&mut self, current: FormatFilter) {
        self.current = current;
        let index = self
            .filters
            .iter()
            .position(|f| *f == current)
            .unwrap_or(0);
        self.list_state.select(Some(index));
    }

    fn next(&mut self) {
        let current = self.list_state.selected().unwrap_or(0);
        let next = (current + 1) % self.filters.len();
        self.list_state.select(Some(next));
    }

    fn previous(&mut self) {
        let current = self.list_state.selected().unwrap_or(0);
        let prev = (current + self.filters.len() - 1) % self.filters.len();
        self.list_state.select(Some(prev));
    }

    fn confirm(&self) -> Option<Action> {
        let index = self.list_state.selected()?;
        let filter = *self.filters.get(index)?;
        Some(Action::SetFormatFilter(filter))
    }
}

impl Component for FormatSelectorDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('f') => Some(Action::CloseModal),
            KeyCode::Enter => self.confirm(),
            KeyCode::Down | KeyCode::Char('j') => {
                self.next();
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous();
                None
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                if index < self.filters.len() {
                    Some(Action::SetFormatFilter(self.filters[index]))
                } else {
                    None
                }
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let height = self.filters.len() as u16 + 4;
        let popup_area = centered_popup(area, 44, height);
        frame.render_widget(Clear, popup_area);

        let items: Vec<ListItem> = self
            .filters
            .iter()
            .enumerate()
            .map(|(index, filter)| {
                let marker = if *filter == self.current { "●" } else { " " };
                let extensions = filter
                    .extensions()
                    .iter()
                    .map(|ext| format!(".{}", ext))
                    .collect::<Vec<_>>()
                    .join(" ");
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {} ", index + 1),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(marker, Style::default().fg(Color::Green)),
                    Span::raw(format!(" {:<14}", filter.label())),
                    Span::styled(extensions, Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" File Format ")
                    .title_style(
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_stateful_widget(list, popup_area, &mut self.list_state);

        Ok(())
    }
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
    fn test_open_positions_cursor_on_current_filter() {
        let mut dialog = FormatSelectorDialog::default();
        dialog.open(FormatFilter::Nd2);
        assert_eq!(dialog.list_state.selected(), Some(3));
    }

    #[test]
    fn test_enter_confirms_highlighted_filter() {
        let mut dialog = FormatSelectorDialog::default();
        dialog.open(FormatFilter::AllSupported);
        dialog.handle_key_event(press(KeyCode::Char('k'))).unwrap();

        let action = dialog.handle_key_event(press(KeyCode::Enter)).unwrap();
        assert_eq!(action, Some(Action::SetFormatFilter(FormatFilter::Nd2)));
    }

    #[test]
    fn test_number_key_selects_directly() {
        let mut dialog = FormatSelectorDialog::default();
        dialog.open(FormatFilter::AllSupported);

        let action = dialog.handle_key_event(press(KeyCode::Char('2'))).unwrap();
        assert_eq!(action, Some(Action::SetFormatFilter(FormatFilter::Png)));
    }

    #[test]
    fn test_out_of_range_number_is_ignored() {
        let mut dialog = FormatSelectorDialog::default();
        dialog.open(FormatFilter::AllSupported);

        let action = dialog.handle_key_event(press(KeyCode::Char('9'))).unwrap();
        assert_eq!(action, None);
    }

    #[test]
    fn test_escape_closes_without_change() {
        let mut dialog = FormatSelectorDialog::default();
        dialog.open(FormatFilter::Tiff);

        let action = dialog.handle_key_event(press(KeyCode::Esc)).unwrap();
        assert_eq!(action, Some(Action::CloseModal));
    }
}
