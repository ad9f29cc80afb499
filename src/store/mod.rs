//! Member store
//!
//! The ordered, in-memory member collection. Display order is insertion
//! order and replacing a member keeps its position. There is no removal, so
//! an index stays valid for the lifetime of the store once handed out.

use crate::models::Member;
use std::ops::Index;

mod seed;

pub use seed::{seed_members, SEED_SIZE};

/// Owning, ordered collection of members
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberStore {
    members: Vec<Member>,
}

impl MemberStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the fixed seed dataset
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.seed();
        store
    }

    /// Create a store holding `members` in the given order
    pub fn from_members(members: Vec<Member>) -> Self {
        Self { members }
    }

    /// Append the fixed seed dataset.
    ///
    /// Must run once per store; a second call duplicates every seed entry.
    pub fn seed(&mut self) {
        self.members.extend(seed_members());
    }

    /// Number of members
    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member at `index`.
    ///
    /// # Panics
    /// If `index >= self.count()`. Out-of-range access is a caller bug.
    pub fn get(&self, index: usize) -> &Member {
        self.check_bounds(index);
        &self.members[index]
    }

    /// All members in display order
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Add `member` at the end and return its index
    pub fn append(&mut self, member: Member) -> usize {
        self.members.push(member);
        self.members.len() - 1
    }

    /// Overwrite the member at `index`, returning the previous record.
    ///
    /// # Panics
    /// If `index >= self.count()`.
    pub fn replace(&mut self, index: usize, member: Member) -> Member {
        self.check_bounds(index);
        std::mem::replace(&mut self.members[index], member)
    }

    fn check_bounds(&self, index: usize) {
        assert!(
            index < self.members.len(),
            "member index out of bounds: index is {} but count is {}",
            index,
            self.members.len()
        );
    }
}

impl Index<usize> for MemberStore {
    type Output = Member;

    fn index(&self, index: usize) -> &Member {
        self.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, age: u32) -> Member {
        Member::new(name, age)
    }

    #[test]
    fn test_seeded_store_has_fixed_size() {
        let store = MemberStore::seeded();
        assert_eq!(store.count(), SEED_SIZE);
        assert_eq!(store.members(), seed_members().as_slice());
    }

    #[test]
    fn test_seed_twice_duplicates() {
        let mut store = MemberStore::seeded();
        store.seed();
        assert_eq!(store.count(), SEED_SIZE * 2);
        assert_eq!(store.get(0), store.get(SEED_SIZE));
    }

    #[test]
    fn test_append_keeps_order() {
        let mut store = MemberStore::new();
        assert!(store.is_empty());

        for (i, name) in ["a", "b", "c", "d"].iter().enumerate() {
            let index = store.append(member(name, i as u32));
            assert_eq!(index, i);
            assert_eq!(store.count(), i + 1);
        }

        for (i, name) in ["a", "b", "c", "d"].iter().enumerate() {
            assert_eq!(store.get(i).name, *name);
            assert_eq!(store[i].age, i as u32);
        }
    }

    #[test]
    fn test_replace_touches_only_target() {
        let mut store = MemberStore::from_members(vec![
            member("a", 1),
            member("b", 2),
            member("c", 3),
        ]);

        let previous = store.replace(1, member("b2", 22));
        assert_eq!(previous, member("b", 2));
        assert_eq!(store.count(), 3);
        assert_eq!(store.get(0), &member("a", 1));
        assert_eq!(store.get(1), &member("b2", 22));
        assert_eq!(store.get(2), &member("c", 3));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_at_count_panics() {
        let store = MemberStore::seeded();
        store.get(store.count());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_on_empty_panics() {
        MemberStore::new().get(0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_replace_out_of_bounds_panics() {
        let mut store = MemberStore::from_members(vec![member("a", 1)]);
        store.replace(1, member("z", 9));
    }
}
