//! Application state management
//!
//! Handles the screen stack and maps keyboard events to per-screen actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

/// Screens that can sit on the navigation stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Member list, always at the bottom of the stack
    #[default]
    List,
    /// Create/edit form for a single member
    Detail,
}

/// Actions produced by keyboard input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move selection or focus up (arrow up, k on the list)
    Up,
    /// Move selection or focus down (arrow down, j on the list)
    Down,
    /// Open the selected row (list) or submit the form (detail)
    Select,
    /// Open an empty detail screen (a, A, +)
    Create,
    /// Focus the next form field (Tab)
    NextField,
    /// Focus the previous form field (Shift+Tab)
    PreviousField,
    /// Type a character into the focused field
    Input(char),
    /// Erase the last character of the focused field
    Erase,
    /// Leave the current screen (Esc)
    Back,
    /// Quit application (q on the list, Ctrl+C anywhere)
    Quit,
    /// No action
    None,
}

/// Navigation stack with the list screen at its root
#[derive(Debug)]
pub struct NavigationStack {
    stack: Vec<Screen>,
    should_quit: bool,
}

impl NavigationStack {
    /// Create a stack showing the member list
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::List],
            should_quit: false,
        }
    }

    /// Screen on top of the stack
    pub fn current(&self) -> Screen {
        self.stack.last().copied().unwrap_or_default()
    }

    /// Number of screens on the stack
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Show `screen` on top of the current one
    pub fn push(&mut self, screen: Screen) {
        debug!(?screen, depth = self.stack.len() + 1, "push screen");
        self.stack.push(screen);
    }

    /// Dismiss the top screen. The root list cannot be popped.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        let popped = self.stack.pop();
        debug!(?popped, depth = self.stack.len(), "pop screen");
        true
    }

    /// Convert keyboard event to an action for `screen`
    pub fn key_to_action(key: KeyEvent, screen: Screen) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match screen {
            Screen::List => match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
                KeyCode::Up | KeyCode::Char('k') => Action::Up,
                KeyCode::Down | KeyCode::Char('j') => Action::Down,
                KeyCode::Enter => Action::Select,
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('+') => Action::Create,
                _ => Action::None,
            },
            Screen::Detail => match key.code {
                KeyCode::Esc => Action::Back,
                KeyCode::Enter => Action::Select,
                KeyCode::Up => Action::Up,
                KeyCode::Down => Action::Down,
                KeyCode::BackTab => Action::PreviousField,
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        Action::PreviousField
                    } else {
                        Action::NextField
                    }
                }
                KeyCode::Backspace => Action::Erase,
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Action::Input(c)
                }
                _ => Action::None,
            },
        }
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new()
    }
}
