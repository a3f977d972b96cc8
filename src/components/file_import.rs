//! File Import tab component
//!
//! Directory browser + extension filter + checkable file list. This is
//! the one component with non-trivial state: the current directory, the
//! active format filter, and the per-item checkbox flags.
//!
//! State machine over three triggers:
//! - directory changed / filter changed: re-scan, rebuild all-unchecked
//! - checkbox changed (toggle, select all, clear all): recompute the
//!   count and emit the full selection as `Action::FilesSelected`

use crate::action::Action;
use crate::component::Component;
use crate::model::file_item::{FileItem, ImportSnapshot};
use crate::model::format::FormatFilter;
use crate::services::scan_directory;
use crate::settings::Settings;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::path::PathBuf;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// File Import tab: scan a directory, filter by format, check files
pub struct FileImportComponent {
    /// Directory currently shown
    pub directory: PathBuf,
    /// Active extension filter
    pub filter: FormatFilter,
    /// Scanned listing with checkbox state
    pub items: Vec<FileItem>,
    /// Highlight state for the list widget
    pub list_state: ListState,
}

impl FileImportComponent {
    /// Build the tab starting from the persisted last-used directory
    pub fn new(settings: &Settings) -> Self {
        let mut component = Self {
            directory: settings.last_directory(),
            filter: FormatFilter::default(),
            items: Vec::new(),
            list_state: ListState::default(),
        };
        component.refresh();
        component
    }

    /// Tab label shown in the Input workspace tab strip
    pub fn tab_name(&self) -> &'static str {
        "File Import"
    }

    /// Re-scan the current directory with the current filter
    ///
    /// The listing is rebuilt with every item unchecked, so the
    /// selection count is always 0 afterwards.
    pub fn refresh(&mut self) {
        self.items = scan_directory(&self.directory, self.filter);
        if self.items.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    /// Switch to a new directory and re-scan
    pub fn change_directory(&mut self, directory: PathBuf) {
        self.directory = directory;
        self.refresh();
    }

    /// Switch the format filter and re-scan
    pub fn set_filter(&mut self, filter: FormatFilter) {
        self.filter = filter;
        self.refresh();
    }

    /// Toggle the checkbox of the highlighted item
    pub fn toggle_current(&mut self) {
        if let Some(index) = self.list_state.selected() {
            if let Some(item) = self.items.get_mut(index) {
                item.checked = !item.checked;
            }
        }
    }

    /// Check every item
    pub fn select_all(&mut self) {
        for item in &mut self.items {
            item.checked = true;
        }
    }

    /// Uncheck every item
    pub fn clear_all(&mut self) {
        for item in &mut self.items {
            item.checked = false;
        }
    }

    /// Number of checked items
    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    /// Absolute paths of checked items, in display order
    pub fn selected_files(&self) -> Vec<PathBuf> {
        self.items
            .iter()
            .filter(|item| item.checked)
            .map(|item| item.path.clone())
            .collect()
    }

    /// Current tab data for downstream consumers
    pub fn snapshot(&self) -> ImportSnapshot {
        ImportSnapshot {
            directory: self.directory.clone(),
            selected_files: self.selected_files(),
            format_filter: self.filter.label().to_string(),
        }
    }

    /// The selection emission that follows any checkbox change
    fn emit_selection(&self) -> Option<Action> {
        Some(Action::FilesSelected(self.selected_files()))
    }

    fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = if current + 1 >= self.items.len() {
            0
        } else {
            current + 1
        };
        self.list_state.select(Some(next));
    }

    fn previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 {
            self.items.len() - 1
        } else {
            current - 1
        };
        self.list_state.select(Some(prev));
    }

    fn select_first(&mut self) {
        if !self.items.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    fn select_last(&mut self) {
        if !self.items.is_empty() {
            self.list_state.select(Some(self.items.len() - 1));
        }
    }
}

impl Component for FileImportComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('G') => Some(Action::LastItem),

            // Selection
            KeyCode::Char(' ') => Some(Action::ToggleItem),
            KeyCode::Char('a') => Some(Action::SelectAll),
            KeyCode::Char('c') => Some(Action::ClearAll),

            // Directory & filter
            KeyCode::Char('o') => Some(Action::OpenDirectoryPicker),
            KeyCode::Char('f') => Some(Action::OpenFormatSelector),
            KeyCode::Char('r') => Some(Action::RefreshListing),

            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let follow_up = match action {
            Action::NextItem => {
                self.next();
                None
            }
            Action::PrevItem => {
                self.previous();
                None
            }
            Action::FirstItem => {
                self.select_first();
                None
            }
            Action::LastItem => {
                self.select_last();
                None
            }
            Action::ToggleItem => {
                self.toggle_current();
                self.emit_selection()
            }
            Action::SelectAll => {
                self.select_all();
                self.emit_selection()
            }
            Action::ClearAll => {
                self.clear_all();
                self.emit_selection()
            }
            Action::RefreshListing => {
                self.refresh();
                None
            }
            Action::DirectorySelected(directory) => {
                self.change_directory(directory);
                None
            }
            Action::SetFormatFilter(filter) => {
                self.set_filter(filter);
                None
            }
            _ => None,
        };
        Ok(follow_up)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        render_directory_line(frame, chunks[0], &self.directory);
        render_filter_line(frame, chunks[1], self.filter);
        render_file_list(
            frame,
            chunks[2],
            &self.items,
            self.selected_count(),
            &mut self.list_state,
        );
        render_count_line(frame, chunks[3], self.selected_count());

        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

fn render_directory_line(frame: &mut Frame, area: Rect, directory: &std::path::Path) {
    let label = " Directory: ";
    let available = (area.width as usize).saturating_sub(label.width());
    let path = truncate_left(&directory.display().to_string(), available);

    let line = Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(path, Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_filter_line(frame: &mut Frame, area: Rect, filter: FormatFilter) {
    let extensions = filter
        .extensions()
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(", ");

    let line = Line::from(vec![
        Span::styled(
            " Format:    ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(filter.label(), Style::default().fg(Color::White)),
        Span::styled(format!("  ({})", extensions), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_file_list(
    frame: &mut Frame,
    area: Rect,
    items: &[FileItem],
    selected_count: usize,
    list_state: &mut ListState,
) {
    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| {
            let (marker, style) = if item.checked {
                (
                    "[x] ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("[ ] ", Style::default().fg(Color::White))
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(item.name.clone(), style),
            ]))
        })
        .collect();

    let mut title = format!(" Available Files ({}) ", items.len());
    if selected_count > 0 {
        title = format!(" Available Files ({}) [{}✓] ", items.len(), selected_count);
    }

    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, list_state);
}

fn render_count_line(frame: &mut Frame, area: Rect, count: usize) {
    let line = Line::from(vec![
        Span::styled(
            format!(" Selected: {} file{}", count, if count == 1 { "" } else { "s" }),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            "   a Select All   c Clear All",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Truncate a string to `max_width` columns, keeping the tail and
/// prefixing an ellipsis when something was cut
fn truncate_left(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut tail = String::new();
    let mut used = 0;
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        tail.insert(0, c);
        used += w;
    }
    format!("…{}", tail)
}
