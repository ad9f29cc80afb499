//! Detail screen implementation
//!
//! Text form for one member. The screen is opened in a fixed `DetailMode`
//! and reports a completed entry to its delegate exactly once.

use crate::coordinator::{DetailMode, MemberDelegate};
use crate::error::user_friendly_message;
use crate::models::Member;
use crate::{MemberListError, Result};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use tracing::warn;

/// Editable fields, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailField {
    Name,
    Age,
    Phone,
    Address,
}

impl DetailField {
    pub const ALL: [DetailField; 4] = [Self::Name, Self::Age, Self::Phone, Self::Address];

    fn title(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Age => "Age",
            Self::Phone => "Phone",
            Self::Address => "Address",
        }
    }

    fn accepts(&self, c: char) -> bool {
        match self {
            Self::Age => c.is_ascii_digit(),
            _ => !c.is_control(),
        }
    }
}

/// Member form screen component
#[derive(Debug, Clone)]
pub struct DetailScreen {
    mode: DetailMode,
    values: [String; 4],
    focused: usize,
    error: Option<String>,
}

impl DetailScreen {
    /// Create a form for `mode`, pre-filled when editing
    pub fn new(mode: DetailMode) -> Self {
        let values = match mode.member() {
            Some(member) => [
                member.name.clone(),
                member.age.to_string(),
                member.phone.clone().unwrap_or_default(),
                member.address.clone().unwrap_or_default(),
            ],
            None => Default::default(),
        };

        Self {
            mode,
            values,
            focused: 0,
            error: None,
        }
    }

    pub fn mode(&self) -> &DetailMode {
        &self.mode
    }

    pub fn focused_field(&self) -> DetailField {
        DetailField::ALL[self.focused]
    }

    /// Current text of `field`
    pub fn value(&self, field: DetailField) -> &str {
        &self.values[field as usize]
    }

    /// Message from the last rejected submit
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % DetailField::ALL.len();
    }

    pub fn focus_previous(&mut self) {
        self.focused = (self.focused + DetailField::ALL.len() - 1) % DetailField::ALL.len();
    }

    /// Type `c` into the focused field. Characters the field doesn't accept are dropped.
    pub fn input(&mut self, c: char) {
        let field = self.focused_field();
        if field.accepts(c) {
            self.values[self.focused].push(c);
            self.error = None;
        }
    }

    /// Erase the last character of the focused field
    pub fn erase(&mut self) {
        self.values[self.focused].pop();
    }

    /// Build a member from the form, checking required fields
    pub fn validate(&self) -> Result<Member> {
        let name = self.value(DetailField::Name).trim();
        if name.is_empty() {
            return Err(MemberListError::Validation("Name is required".to_string()));
        }

        let age = self.value(DetailField::Age).trim();
        if age.is_empty() {
            return Err(MemberListError::Validation("Age is required".to_string()));
        }
        let age: u32 = age.parse().map_err(|_| {
            MemberListError::Validation(format!("Age must be a whole number, got '{}'", age))
        })?;

        Ok(Member {
            name: name.to_string(),
            age,
            phone: non_blank(self.value(DetailField::Phone)),
            address: non_blank(self.value(DetailField::Address)),
        })
    }

    /// Hand the entered member to `delegate` and consume the screen.
    ///
    /// On invalid input the delegate is not called and the screen comes back
    /// with its error message set.
    pub fn submit(
        mut self,
        delegate: &mut dyn MemberDelegate,
    ) -> std::result::Result<(), Box<DetailScreen>> {
        match self.validate() {
            Ok(member) => {
                match &self.mode {
                    DetailMode::Create => delegate.on_member_created(member),
                    DetailMode::Edit { index, .. } => delegate.on_member_updated(*index, member),
                }
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "member form rejected");
                self.error = Some(user_friendly_message(&err));
                Err(Box::new(self))
            }
        }
    }

    /// Render the detail screen
    pub fn render(&self, f: &mut Frame) {
        let area = f.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Fields
                Constraint::Length(3), // Status / help
            ])
            .split(area);

        self.render_title(f, chunks[0]);
        self.render_fields(f, chunks[1]);
        self.render_status(f, chunks[2]);
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title = Paragraph::new(self.mode.title())
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_fields(&self, f: &mut Frame, area: Rect) {
        let constraints: Vec<Constraint> = DetailField::ALL
            .iter()
            .map(|_| Constraint::Length(3))
            .collect();
        let field_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (i, field) in DetailField::ALL.iter().enumerate() {
            let focused = i == self.focused;
            let style = if focused {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            let block = Block::default().borders(Borders::ALL).border_style(style);
            let label = format!("{}: ", field.title());
            let text = format!("{}{}", label, self.values[i]);
            f.render_widget(Paragraph::new(text).block(block), field_chunks[i]);

            if focused {
                let chunk = field_chunks[i];
                let offset = (label.chars().count() + self.values[i].chars().count()) as u16;
                let max_x = chunk.right().saturating_sub(2);
                f.set_cursor((chunk.x + 1 + offset).min(max_x), chunk.y + 1);
            }
        }
    }

    fn render_status(&self, f: &mut Frame, area: Rect) {
        let status = match &self.error {
            Some(msg) => Paragraph::new(msg.as_str()).style(Style::default().fg(Color::Red)),
            None => Paragraph::new("Tab/↑↓: Field | Enter: Save | Esc: Cancel"),
        };
        f.render_widget(
            status
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        created: Vec<Member>,
        updated: Vec<(usize, Member)>,
    }

    impl MemberDelegate for Recorder {
        fn on_member_created(&mut self, member: Member) {
            self.created.push(member);
        }

        fn on_member_updated(&mut self, index: usize, member: Member) {
            self.updated.push((index, member));
        }
    }

    fn type_text(screen: &mut DetailScreen, text: &str) {
        text.chars().for_each(|c| screen.input(c));
    }

    #[test]
    fn test_create_form_starts_empty() {
        let screen = DetailScreen::new(DetailMode::Create);
        for field in DetailField::ALL {
            assert_eq!(screen.value(field), "");
        }
        assert_eq!(screen.focused_field(), DetailField::Name);
    }

    #[test]
    fn test_edit_form_prefilled() {
        let member = Member::new("Tim Cook", 60).with_address("California");
        let screen = DetailScreen::new(DetailMode::Edit { index: 3, member });
        assert_eq!(screen.value(DetailField::Name), "Tim Cook");
        assert_eq!(screen.value(DetailField::Age), "60");
        assert_eq!(screen.value(DetailField::Phone), "");
        assert_eq!(screen.value(DetailField::Address), "California");
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut screen = DetailScreen::new(DetailMode::Create);
        screen.focus_previous();
        assert_eq!(screen.focused_field(), DetailField::Address);
        screen.focus_next();
        assert_eq!(screen.focused_field(), DetailField::Name);
    }

    #[test]
    fn test_age_accepts_digits_only() {
        let mut screen = DetailScreen::new(DetailMode::Create);
        screen.focus_next();
        type_text(&mut screen, "4x2 ");
        assert_eq!(screen.value(DetailField::Age), "42");
        screen.erase();
        assert_eq!(screen.value(DetailField::Age), "4");
    }

    #[test]
    fn test_submit_create_calls_created() {
        let mut screen = DetailScreen::new(DetailMode::Create);
        type_text(&mut screen, "Batman");
        screen.focus_next();
        type_text(&mut screen, "40");
        screen.focus_next();
        screen.focus_next();
        type_text(&mut screen, "  Gotham ");

        let mut recorder = Recorder::default();
        assert!(screen.submit(&mut recorder).is_ok());
        assert_eq!(
            recorder.created,
            vec![Member::new("Batman", 40).with_address("Gotham")]
        );
        assert!(recorder.updated.is_empty());
    }

    #[test]
    fn test_submit_edit_calls_updated_with_index() {
        let mut screen = DetailScreen::new(DetailMode::Edit {
            index: 1,
            member: Member::new("B", 20),
        });
        type_text(&mut screen, "ob");

        let mut recorder = Recorder::default();
        assert!(screen.submit(&mut recorder).is_ok());
        assert!(recorder.created.is_empty());
        assert_eq!(recorder.updated, vec![(1, Member::new("Bob", 20))]);
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let mut screen = DetailScreen::new(DetailMode::Create);
        screen.focus_next();
        type_text(&mut screen, "30");

        let mut recorder = Recorder::default();
        let rejected = screen.submit(&mut recorder).unwrap_err();
        assert_eq!(rejected.error(), Some("Name is required"));
        assert!(recorder.created.is_empty());
        // Form content survives the rejection
        assert_eq!(rejected.value(DetailField::Age), "30");
    }

    #[test]
    fn test_missing_or_huge_age_is_rejected() {
        let mut screen = DetailScreen::new(DetailMode::Create);
        type_text(&mut screen, "Joker");
        assert!(matches!(
            screen.validate(),
            Err(MemberListError::Validation(msg)) if msg == "Age is required"
        ));

        screen.focus_next();
        type_text(&mut screen, "99999999999");
        assert!(matches!(screen.validate(), Err(MemberListError::Validation(_))));
    }

    #[test]
    fn test_typing_clears_error() {
        let screen = DetailScreen::new(DetailMode::Create);
        let mut recorder = Recorder::default();
        let mut rejected = screen.submit(&mut recorder).unwrap_err();
        assert!(rejected.error().is_some());

        rejected.input('J');
        assert!(rejected.error().is_none());
    }
}
