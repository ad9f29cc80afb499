//! List/detail coordination
//!
//! The coordinator owns the member store and is the only thing that mutates
//! it. Detail screens report completed entries through the `MemberDelegate`
//! capability; every mutation raises a reload request that the list screen
//! consumes before its next draw.

use crate::models::Member;
use crate::store::MemberStore;
use tracing::{debug, info};

/// Receiver of completed detail-screen entries
pub trait MemberDelegate {
    /// A brand-new member was entered
    fn on_member_created(&mut self, member: Member);

    /// The member at `index` was edited
    fn on_member_updated(&mut self, index: usize, member: Member);
}

/// What a detail screen was opened for. Fixed for the screen's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailMode {
    /// Empty form; completion appends
    Create,
    /// Form pre-filled with `member`; completion replaces position `index`
    Edit { index: usize, member: Member },
}

impl DetailMode {
    pub fn title(&self) -> &'static str {
        match self {
            DetailMode::Create => "New Member",
            DetailMode::Edit { .. } => "Edit Member",
        }
    }

    /// Member the form starts from, if any
    pub fn member(&self) -> Option<&Member> {
        match self {
            DetailMode::Create => None,
            DetailMode::Edit { member, .. } => Some(member),
        }
    }
}

/// Mediator between the list screen, detail screens and the store
#[derive(Debug)]
pub struct Coordinator {
    store: MemberStore,
    reload_pending: bool,
}

impl Coordinator {
    /// Take ownership of `store`
    pub fn new(store: MemberStore) -> Self {
        Self {
            store,
            reload_pending: false,
        }
    }

    /// Coordinator over the fixed seed dataset
    pub fn seeded() -> Self {
        Self::new(MemberStore::seeded())
    }

    /// Read-only view of the store
    pub fn store(&self) -> &MemberStore {
        &self.store
    }

    /// Mode for a detail screen entering a new member
    pub fn open_create(&self) -> DetailMode {
        debug!("opening detail screen in create mode");
        DetailMode::Create
    }

    /// Mode for a detail screen pre-filled with the member at `index`.
    ///
    /// # Panics
    /// If `index` is out of bounds for the store.
    pub fn open_edit(&self, index: usize) -> DetailMode {
        debug!(index, "opening detail screen in edit mode");
        DetailMode::Edit {
            index,
            member: self.store.get(index).clone(),
        }
    }

    /// Whether a reload is pending, clearing the flag
    pub fn take_reload_request(&mut self) -> bool {
        std::mem::take(&mut self.reload_pending)
    }

    fn request_reload(&mut self) {
        self.reload_pending = true;
    }
}

impl MemberDelegate for Coordinator {
    fn on_member_created(&mut self, member: Member) {
        let index = self.store.append(member);
        info!(index, count = self.store.count(), "member created");
        self.request_reload();
    }

    fn on_member_updated(&mut self, index: usize, member: Member) {
        self.store.replace(index, member);
        info!(index, "member updated");
        self.request_reload();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_members() -> Coordinator {
        Coordinator::new(MemberStore::from_members(vec![
            Member::new("A", 10),
            Member::new("B", 20),
        ]))
    }

    #[test]
    fn test_created_member_is_appended() {
        let mut coordinator = two_members();
        assert_eq!(coordinator.store().count(), 2);

        coordinator.on_member_created(Member::new("C", 30));

        let names: Vec<&str> = coordinator
            .store()
            .members()
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(coordinator.store().get(2), &Member::new("C", 30));
    }

    #[test]
    fn test_updated_member_replaced_in_place() {
        let mut coordinator = two_members();

        coordinator.on_member_updated(0, Member::new("A'", 11));

        assert_eq!(coordinator.store().count(), 2);
        assert_eq!(coordinator.store().get(0), &Member::new("A'", 11));
        assert_eq!(coordinator.store().get(1), &Member::new("B", 20));
    }

    #[test]
    fn test_mutations_request_reload_once() {
        let mut coordinator = two_members();
        assert!(!coordinator.take_reload_request());

        coordinator.on_member_created(Member::new("C", 30));
        assert!(coordinator.take_reload_request());
        assert!(!coordinator.take_reload_request());

        coordinator.on_member_updated(1, Member::new("B'", 21));
        assert!(coordinator.take_reload_request());
    }

    #[test]
    fn test_open_modes() {
        let coordinator = two_members();

        assert_eq!(coordinator.open_create(), DetailMode::Create);
        assert_eq!(
            coordinator.open_edit(1),
            DetailMode::Edit {
                index: 1,
                member: Member::new("B", 20)
            }
        );
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_open_edit_out_of_bounds_panics() {
        let _ = two_members().open_edit(2);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_update_out_of_bounds_panics() {
        let mut coordinator = two_members();
        coordinator.on_member_updated(2, Member::new("X", 1));
    }

    #[test]
    fn test_mode_title_and_member() {
        assert_eq!(DetailMode::Create.title(), "New Member");
        assert!(DetailMode::Create.member().is_none());

        let edit = DetailMode::Edit {
            index: 0,
            member: Member::new("A", 10),
        };
        assert_eq!(edit.title(), "Edit Member");
        assert_eq!(edit.member().map(|m| m.age), Some(10));
    }
}
