//! Modal stack for managing overlays
//!
//! A proper state machine for overlays instead of a pile of boolean
//! flags. Modals are rendered bottom to top; only the top modal receives
//! input events.

/// A modal overlay displayed on top of the active workspace
///
/// Carries only the identity of the overlay; cursor and scroll state
/// live in the matching dialog component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Directory browser for picking the import directory
    DirectoryPicker,
    /// Format filter selection dialog
    FormatSelector,
    /// Help dialog showing all keyboard shortcuts
    Help,
}

/// A stack of modal overlays
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    /// Create a new empty modal stack
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a modal onto the stack
    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    /// Pop the top modal from the stack
    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// Get a reference to the top modal without removing it
    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
