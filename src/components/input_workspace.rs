//! Input workspace
//!
//! Hosts input-related functions behind a tab strip. File Import is the
//! only tab today; the strip machinery is kept so further tabs slot in.

use crate::action::Action;
use crate::component::{Component, Workspace};
use crate::components::FileImportComponent;
use crate::model::workspace::WorkspaceId;
use crate::settings::Settings;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Workspace for loading input images
pub struct InputWorkspace {
    /// Index into the tab strip
    pub active_tab: usize,
    /// The File Import tab
    pub file_import: FileImportComponent,
}

impl InputWorkspace {
    pub fn new(settings: &Settings) -> Self {
        Self {
            active_tab: 0,
            file_import: FileImportComponent::new(settings),
        }
    }

    /// Tab labels in strip order
    pub fn tab_titles(&self) -> Vec<&'static str> {
        vec![self.file_import.tab_name()]
    }

    fn next_tab(&mut self) {
        self.active_tab = (self.active_tab + 1) % self.tab_titles().len();
    }

    fn previous_tab(&mut self) {
        let count = self.tab_titles().len();
        self.active_tab = (self.active_tab + count - 1) % count;
    }
}

impl Component for InputWorkspace {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            _ => return self.file_import.handle_key_event(key),
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextTab => {
                self.next_tab();
                Ok(None)
            }
            Action::PrevTab => {
                self.previous_tab();
                Ok(None)
            }
            other => self.file_import.update(other),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let tabs = Tabs::new(self.tab_titles())
            .block(Block::default().borders(Borders::BOTTOM))
            .select(self.active_tab)
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, chunks[0]);

        self.file_import.draw(frame, chunks[1])
    }
}

impl Workspace for InputWorkspace {
    fn id(&self) -> WorkspaceId {
        WorkspaceId::Input
    }

    fn title(&self) -> &str {
        "Input"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SETTINGS_FILE;
    use std::fs::File;
    use tempfile::TempDir;

    fn workspace_in(dir: &TempDir) -> InputWorkspace {
        let mut settings = Settings::load_from(dir.path().join(SETTINGS_FILE));
        settings.set_last_directory(dir.path()).unwrap();
        InputWorkspace::new(&settings)
    }

    #[test]
    fn test_contract_members() {
        let dir = TempDir::new().unwrap();
        let workspace = workspace_in(&dir);
        assert_eq!(workspace.id(), WorkspaceId::Input);
        assert_eq!(workspace.title(), "Input");
    }

    #[test]
    fn test_single_tab_strip_cycles_in_place() {
        let dir = TempDir::new().unwrap();
        let mut workspace = workspace_in(&dir);
        assert_eq!(workspace.tab_titles(), vec!["File Import"]);

        workspace.update(Action::NextTab).unwrap();
        assert_eq!(workspace.active_tab, 0);
        workspace.update(Action::PrevTab).unwrap();
        assert_eq!(workspace.active_tab, 0);
    }

    #[test]
    fn test_delegates_selection_to_file_import() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("cells.tif")).unwrap();

        let mut workspace = workspace_in(&dir);
        let emitted = workspace.update(Action::SelectAll).unwrap();
        assert!(matches!(emitted, Some(Action::FilesSelected(ref f)) if f.len() == 1));
        assert_eq!(
            workspace.file_import.selected_files(),
            vec![dir.path().join("cells.tif")]
        );
    }
}
