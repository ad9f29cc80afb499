//! Member record and row projection
//!
//! A `Member` carries no identifier: its identity is its position in the
//! store. `RowViewModel` is what a list row needs to draw one member and is
//! computed without touching any terminal type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single roster entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Contact phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Postal address or city
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Member {
    /// Create a member with no contact info
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
            phone: None,
            address: None,
        }
    }

    /// Set the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}

/// Everything a list row displays for one member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowViewModel {
    pub title: String,
    pub subtitle: String,
    pub badge: String,
}

impl RowViewModel {
    /// Placeholder subtitle for members without phone or address
    pub const NO_CONTACT: &'static str = "No contact info";

    /// Project a member onto its list row
    pub fn from_member(member: &Member) -> Self {
        let subtitle = member
            .address
            .as_deref()
            .or(member.phone.as_deref())
            .unwrap_or(Self::NO_CONTACT)
            .to_string();

        Self {
            title: member.name.clone(),
            subtitle,
            badge: format!("{} yrs", member.age),
        }
    }
}

impl From<&Member> for RowViewModel {
    fn from(member: &Member) -> Self {
        Self::from_member(member)
    }
}
