//! List screen implementation
//!
//! Shows one row per member with navigation highlighting. Rows are cached
//! view models and only change when the screen is reloaded from the store.

use crate::config::AppConfig;
use crate::models::RowViewModel;
use crate::store::MemberStore;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use tracing::debug;

/// Member list screen component
#[derive(Debug)]
pub struct ListScreen {
    title: String,
    highlight_symbol: String,
    rows: Vec<RowViewModel>,
    selected_index: usize,
    list_state: ListState,
}

impl ListScreen {
    /// Create a list screen populated from `store`
    pub fn new(config: &AppConfig, store: &MemberStore) -> Self {
        let mut screen = Self {
            title: config.title.clone(),
            highlight_symbol: config.highlight_symbol.clone(),
            rows: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
        };
        screen.reload(store);
        screen
    }

    /// Re-fetch every row from the store, keeping the selection in range
    pub fn reload(&mut self, store: &MemberStore) {
        self.rows = (0..store.count())
            .map(|i| RowViewModel::from_member(store.get(i)))
            .collect();

        if self.rows.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            self.selected_index = self.selected_index.min(self.rows.len() - 1);
            self.list_state.select(Some(self.selected_index));
        }
        debug!(rows = self.rows.len(), "list reloaded");
    }

    /// Rows as currently displayed
    pub fn rows(&self) -> &[RowViewModel] {
        &self.rows
    }

    /// Index of the highlighted row, if there are any rows
    pub fn selected_index(&self) -> Option<usize> {
        if self.rows.is_empty() {
            None
        } else {
            Some(self.selected_index)
        }
    }

    /// Highlight the last row, e.g. after a member was appended
    pub fn select_last(&mut self) {
        if let Some(last) = self.rows.len().checked_sub(1) {
            self.selected_index = last;
            self.list_state.select(Some(last));
        }
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.rows.len() - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        if self.selected_index < self.rows.len() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Render the list screen
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(3),    // Rows
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        self.render_rows(f, chunks[1]);
        self.render_help(f, chunks[2]);
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title = Paragraph::new(format!("{} ({})", self.title, self.rows.len()))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, area);
    }

    fn render_rows(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = if self.rows.is_empty() {
            vec![ListItem::new("No members yet. Press 'a' to add one.")]
        } else {
            self.rows.iter().map(row_item).collect()
        };

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(&self.highlight_symbol);

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let key = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let help_text = vec![Line::from(vec![
            Span::styled("↑↓", key),
            Span::raw(" Navigate  "),
            Span::styled("Enter", key),
            Span::raw(" Edit  "),
            Span::styled("A", key),
            Span::raw(" Add  "),
            Span::styled("Q", key),
            Span::raw(" Quit"),
        ])];

        let help = Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );

        f.render_widget(help, area);
    }
}

fn row_item(row: &RowViewModel) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(
                row.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(row.badge.clone(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(Span::styled(
            row.subtitle.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ])
}
