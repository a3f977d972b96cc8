//! Application state and orchestration
//!
//! `App` wires the sidebar, the three workspaces, and the modal overlays
//! together. It owns the settings store and passes it to whatever needs
//! it; nothing reaches for a global.
//!
//! Event flow:
//! 1. Key events go to the top modal if one is open, else to the global
//!    shortcuts, else to the active workspace.
//! 2. The resulting Action is processed in `update`, which may return a
//!    follow-up Action (e.g. a checkbox change returns the new selection).

use crate::action::Action;
use crate::component::{Component, Workspace};
use crate::components::{
    calculate_main_layout, AnalysisWorkspace, DirectoryPickerDialog, FormatSelectorDialog,
    HelpDialog, InputWorkspace, NavSidebar, OutputWorkspace, QuitDialog,
};
use crate::model::modal::{Modal, ModalStack};
use crate::model::workspace::WorkspaceId;
use crate::settings::Settings;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::path::PathBuf;

/// Top-level application state
pub struct App {
    /// Persisted settings, owned here and passed down by reference
    pub settings: Settings,
    /// Workspace navigation sidebar
    pub nav: NavSidebar,
    /// Currently active workspace
    pub active: WorkspaceId,
    pub input: InputWorkspace,
    pub analysis: AnalysisWorkspace,
    pub output: OutputWorkspace,
    /// Overlay state machine
    pub modals: ModalStack,
    pub directory_picker: DirectoryPickerDialog,
    pub format_dialog: FormatSelectorDialog,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    /// Last emitted selection from the File Import tab
    pub selection: Vec<PathBuf>,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Create the application with settings from the default location
    pub fn new() -> Self {
        Self::with_settings(Settings::load())
    }

    /// Create the application with an explicit settings store
    pub fn with_settings(settings: Settings) -> Self {
        let nav = NavSidebar::new();
        let active = nav.active;
        let input = InputWorkspace::new(&settings);
        Self {
            settings,
            nav,
            active,
            input,
            analysis: AnalysisWorkspace,
            output: OutputWorkspace,
            modals: ModalStack::new(),
            directory_picker: DirectoryPickerDialog::default(),
            format_dialog: FormatSelectorDialog::default(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            selection: Vec::new(),
            status_message: None,
            should_quit: false,
        }
    }

    fn active_workspace_mut(&mut self) -> &mut dyn Workspace {
        match self.active {
            WorkspaceId::Input => &mut self.input,
            WorkspaceId::Analysis => &mut self.analysis,
            WorkspaceId::Output => &mut self.output,
        }
    }

    /// Activate a workspace, running the deactivation/activation hooks
    fn switch_workspace(&mut self, id: WorkspaceId) {
        if id == self.active {
            return;
        }
        self.active_workspace_mut().on_deactivated();
        self.active = id;
        self.nav.set_active(id);
        self.active_workspace_mut().on_activated();
    }

    fn modal_key_event(&mut self, modal: Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::DirectoryPicker => self.directory_picker.handle_key_event(key),
            Modal::FormatSelector => self.format_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_status_bar(&self, frame: &mut Frame, area: Rect) {
        let title = match self.active {
            WorkspaceId::Input => self.input.title(),
            WorkspaceId::Analysis => self.analysis.title(),
            WorkspaceId::Output => self.output.title(),
        };

        let mut spans = vec![
            Span::styled(
                format!(" {} ", title),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                format!("Selected: {} files", self.selection.len()),
                Style::default().fg(Color::Gray),
            ),
        ];
        if self.active == WorkspaceId::Input {
            let snapshot = self.input.file_import.snapshot();
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("Filter: {}", snapshot.format_filter),
                Style::default().fg(Color::Gray),
            ));
        }
        if let Some(message) = &self.status_message {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                message.clone(),
                Style::default().fg(Color::Yellow),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn draw_help_bar(&self, frame: &mut Frame, area: Rect) {
        let hints: &[(&str, &str)] = if self.active == WorkspaceId::Input {
            &[
                ("1-3", "Workspace"),
                ("Space", "Toggle"),
                ("a/c", "All/None"),
                ("o", "Directory"),
                ("f", "Format"),
                ("?", "Help"),
                ("q", "Quit"),
            ]
        } else {
            &[("1-3", "Workspace"), ("?", "Help"), ("q", "Quit")]
        };

        let mut spans = Vec::new();
        for (key, label) in hints {
            spans.push(Span::styled(
                format!(" {} ", key),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!("{}  ", label),
                Style::default().fg(Color::Gray),
            ));
        }

        let help = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(help, area);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.input.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // A modal captures all input while open
        if let Some(modal) = self.modals.top().copied() {
            return self.modal_key_event(modal, key);
        }

        // Global shortcuts
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }
        match key.code {
            KeyCode::Char('q') => return Ok(Some(Action::OpenQuitDialog)),
            KeyCode::Char('?') => return Ok(Some(Action::OpenHelp)),
            _ => {}
        }

        // Sidebar shortcuts, then the active workspace
        if let Some(action) = self.nav.handle_key_event(key)? {
            return Ok(Some(action));
        }
        self.active_workspace_mut().handle_key_event(key)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let follow_up = match action {
            Action::Tick | Action::Resize(_, _) => None,
            Action::ForceQuit => {
                self.should_quit = true;
                None
            }

            Action::SwitchWorkspace(id) => {
                self.switch_workspace(id);
                None
            }

            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
                None
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
                None
            }
            Action::OpenDirectoryPicker => {
                self.directory_picker.open(&self.input.file_import.directory);
                self.modals.push(Modal::DirectoryPicker);
                None
            }
            Action::OpenFormatSelector => {
                self.format_dialog.open(self.input.file_import.filter);
                self.modals.push(Modal::FormatSelector);
                None
            }
            Action::CloseModal => {
                self.modals.pop();
                None
            }

            Action::DirectorySelected(directory) => {
                self.modals.pop();
                if let Err(error) = self.settings.set_last_directory(&directory) {
                    self.status_message = Some(format!("Warning: {:#}", error));
                }
                self.input.update(Action::DirectorySelected(directory))?
            }
            Action::SetFormatFilter(filter) => {
                self.modals.pop();
                self.input.update(Action::SetFormatFilter(filter))?
            }

            Action::FilesSelected(files) => {
                self.status_message = Some(format!("{} file(s) selected", files.len()));
                self.selection = files;
                None
            }

            other => self.active_workspace_mut().update(other)?,
        };
        Ok(follow_up)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area);

        self.nav.draw(frame, layout.sidebar)?;
        let content = layout.content;
        self.active_workspace_mut().draw(frame, content)?;
        self.draw_status_bar(frame, layout.status);
        self.draw_help_bar(frame, layout.help);

        if let Some(modal) = self.modals.top().copied() {
            match modal {
                Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
                Modal::DirectoryPicker => self.directory_picker.draw(frame, area)?,
                Modal::FormatSelector => self.format_dialog.draw(frame, area)?,
                Modal::Help => self.help_dialog.draw(frame, area)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::format::FormatFilter;
    use crate::settings::{Settings, SETTINGS_FILE};
    use crossterm::event::{KeyEventKind, KeyEventState};
    use std::fs::File;
    use tempfile::TempDir;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn app_in(dir: &TempDir) -> App {
        let mut settings = Settings::load_from(dir.path().join(SETTINGS_FILE));
        settings.set_last_directory(dir.path()).unwrap();
        App::with_settings(settings)
    }

    /// Feed an action through update, chasing follow-up actions the way
    /// the main loop does.
    fn run_action(app: &mut App, action: Action) {
        let mut current = Some(action);
        while let Some(a) = current {
            current = app.update(a).unwrap();
        }
    }

    #[test]
    fn test_starts_on_input_workspace() {
        let dir = TempDir::new().unwrap();
        let app = app_in(&dir);
        assert_eq!(app.active, WorkspaceId::Input);
        assert!(app.nav.is_active(WorkspaceId::Input));
    }

    #[test]
    fn test_switch_workspace_keeps_exactly_one_active() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        run_action(&mut app, Action::SwitchWorkspace(WorkspaceId::Output));
        assert_eq!(app.active, WorkspaceId::Output);
        assert!(app.nav.is_active(WorkspaceId::Output));
        assert!(!app.nav.is_active(WorkspaceId::Input));
    }

    #[test]
    fn test_checkbox_change_updates_app_selection() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("a.tif")).unwrap();
        File::create(dir.path().join("b.png")).unwrap();

        let mut app = app_in(&dir);
        run_action(&mut app, Action::SelectAll);
        assert_eq!(app.selection.len(), 2);

        run_action(&mut app, Action::ClearAll);
        assert!(app.selection.is_empty());
        assert_eq!(app.status_message.as_deref(), Some("0 file(s) selected"));
    }

    #[test]
    fn test_quit_flow_via_dialog() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        let action = app.handle_key_event(press(KeyCode::Char('q'))).unwrap();
        run_action(&mut app, action.unwrap());
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        assert!(!app.should_quit);

        // 'n' backs out, 'y' quits
        let action = app.handle_key_event(press(KeyCode::Char('n'))).unwrap();
        run_action(&mut app, action.unwrap());
        assert!(app.modals.is_empty());

        run_action(&mut app, Action::OpenQuitDialog);
        let action = app.handle_key_event(press(KeyCode::Char('y'))).unwrap();
        run_action(&mut app, action.unwrap());
        assert!(app.should_quit);
    }

    #[test]
    fn test_directory_selection_persists_and_rescans() {
        let dir = TempDir::new().unwrap();
        let images = dir.path().join("images");
        std::fs::create_dir(&images).unwrap();
        File::create(images.join("cells.nd2")).unwrap();

        let mut app = app_in(&dir);
        run_action(&mut app, Action::OpenDirectoryPicker);
        assert_eq!(app.modals.top(), Some(&Modal::DirectoryPicker));

        run_action(&mut app, Action::DirectorySelected(images.clone()));
        assert!(app.modals.is_empty());
        assert_eq!(app.input.file_import.directory, images);
        assert_eq!(app.input.file_import.items.len(), 1);
        assert_eq!(app.settings.last_directory(), images);
    }

    #[test]
    fn test_format_filter_closes_modal_and_refilters() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("a.tif")).unwrap();
        File::create(dir.path().join("b.png")).unwrap();

        let mut app = app_in(&dir);
        run_action(&mut app, Action::OpenFormatSelector);
        run_action(&mut app, Action::SetFormatFilter(FormatFilter::Png));

        assert!(app.modals.is_empty());
        assert_eq!(app.input.file_import.items.len(), 1);
        assert_eq!(app.input.file_import.items[0].name, "b.png");
    }

    #[test]
    fn test_rebuild_does_not_touch_emitted_selection() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("a.tif")).unwrap();

        let mut app = app_in(&dir);
        run_action(&mut app, Action::SelectAll);
        assert_eq!(app.selection.len(), 1);

        // Re-scan clears the checkboxes but emits nothing, so the last
        // emitted selection is unchanged until the next checkbox change.
        run_action(&mut app, Action::RefreshListing);
        assert_eq!(app.input.file_import.selected_count(), 0);
        assert_eq!(app.selection.len(), 1);
    }

    #[test]
    fn test_modal_captures_workspace_shortcuts() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        run_action(&mut app, Action::OpenHelp);

        // '2' would switch workspaces, but the help dialog is open
        let action = app.handle_key_event(press(KeyCode::Char('2'))).unwrap();
        assert_eq!(action, None);
        assert_eq!(app.active, WorkspaceId::Input);
    }
}
