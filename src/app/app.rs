//! Main application controller
//!
//! Owns the coordinator, the screens and the navigation stack, and runs the
//! synchronous draw/event loop. Every key is handled to completion before
//! the next poll.

use crate::{
    app::{
        screens::{DetailScreen, ListScreen},
        state::{Action, NavigationStack, Screen},
        tui::Tui,
    },
    config::AppConfig,
    coordinator::{Coordinator, DetailMode},
    Result,
};
use crossterm::event::KeyEvent;
use ratatui::Frame;
use tracing::{debug, info, warn};

/// TUI application controller
pub struct App {
    /// Screen stack
    navigation: NavigationStack,
    /// Store owner and delegate for detail screens
    coordinator: Coordinator,
    /// Screen components
    list_screen: ListScreen,
    detail_screen: Option<DetailScreen>,
}

impl App {
    /// Create an application over the seeded member roster
    pub fn new(config: &AppConfig) -> Self {
        Self::with_coordinator(config, Coordinator::seeded())
    }

    /// Create an application around an existing coordinator
    pub fn with_coordinator(config: &AppConfig, coordinator: Coordinator) -> Self {
        let list_screen = ListScreen::new(config, coordinator.store());
        Self {
            navigation: NavigationStack::new(),
            coordinator,
            list_screen,
            detail_screen: None,
        }
    }

    pub fn coordinator(&self) -> &Coordinator {
        &self.coordinator
    }

    pub fn navigation(&self) -> &NavigationStack {
        &self.navigation
    }

    pub fn list_screen(&self) -> &ListScreen {
        &self.list_screen
    }

    pub fn detail_screen(&self) -> Option<&DetailScreen> {
        self.detail_screen.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.navigation.should_quit()
    }

    /// Run the main application loop until the user quits
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        info!(members = self.coordinator.store().count(), "member list started");
        if !tui.is_size_adequate()? {
            warn!("terminal is smaller than the recommended size");
        }

        while !self.should_quit() {
            tui.draw(|f| self.render(f))?;
            if let Some(key) = tui.next_key()? {
                self.handle_key(key);
            }
        }

        info!("member list exiting");
        Ok(())
    }

    /// Draw the current screen
    pub fn render(&mut self, f: &mut Frame) {
        match self.navigation.current() {
            Screen::List => self.list_screen.render(f),
            Screen::Detail => match &self.detail_screen {
                Some(detail) => detail.render(f),
                None => self.list_screen.render(f),
            },
        }
    }

    /// Handle one key press and apply any pending list reload
    pub fn handle_key(&mut self, key: KeyEvent) {
        let screen = self.navigation.current();
        let action = NavigationStack::key_to_action(key, screen);

        if action == Action::Quit {
            self.navigation.quit();
            return;
        }

        match screen {
            Screen::List => self.handle_list_action(action),
            Screen::Detail => self.handle_detail_action(action),
        }

        if self.coordinator.take_reload_request() {
            self.list_screen.reload(self.coordinator.store());
        }
    }

    fn handle_list_action(&mut self, action: Action) {
        match action {
            Action::Up => self.list_screen.select_previous(),
            Action::Down => self.list_screen.select_next(),
            Action::Select => {
                if let Some(index) = self.list_screen.selected_index() {
                    let mode = self.coordinator.open_edit(index);
                    self.show_detail(DetailScreen::new(mode));
                }
            }
            Action::Create => {
                let mode = self.coordinator.open_create();
                self.show_detail(DetailScreen::new(mode));
            }
            _ => {}
        }
    }

    fn handle_detail_action(&mut self, action: Action) {
        if action == Action::Select {
            self.submit_detail();
            return;
        }

        let Some(detail) = self.detail_screen.as_mut() else {
            self.dismiss_detail();
            return;
        };

        match action {
            Action::Up | Action::PreviousField => detail.focus_previous(),
            Action::Down | Action::NextField => detail.focus_next(),
            Action::Input(c) => detail.input(c),
            Action::Erase => detail.erase(),
            Action::Back => {
                debug!("detail screen cancelled");
                self.dismiss_detail();
            }
            _ => {}
        }
    }

    fn show_detail(&mut self, detail: DetailScreen) {
        self.detail_screen = Some(detail);
        self.navigation.push(Screen::Detail);
    }

    fn submit_detail(&mut self) {
        let Some(detail) = self.detail_screen.take() else {
            self.dismiss_detail();
            return;
        };

        let created = matches!(detail.mode(), DetailMode::Create);
        match detail.submit(&mut self.coordinator) {
            Ok(()) => {
                self.navigation.pop();
                if created && self.coordinator.take_reload_request() {
                    self.list_screen.reload(self.coordinator.store());
                    self.list_screen.select_last();
                }
            }
            Err(rejected) => self.detail_screen = Some(*rejected),
        }
    }

    fn dismiss_detail(&mut self) {
        self.detail_screen = None;
        self.navigation.pop();
    }
}
