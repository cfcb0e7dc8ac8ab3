//! Record - The Person Entity Listed in the Table

use std::fmt;

use crate::error::{Error, Result};

/// Stable identifier assigned when a record enters the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Gender options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Translation key for the option label
    pub fn label_key(&self) -> &'static str {
        match self {
            Gender::Male => "form.gender_male",
            Gender::Female => "form.gender_female",
        }
    }

    pub fn all() -> &'static [Gender] {
        &[Gender::Male, Gender::Female]
    }
}

/// Role options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    /// Translation key for the option label
    pub fn label_key(&self) -> &'static str {
        match self {
            Role::Admin => "form.role_admin",
            Role::User => "form.role_user",
        }
    }

    pub fn all() -> &'static [Role] {
        &[Role::Admin, Role::User]
    }
}

/// A single person record.
///
/// Records are immutable once built: an update replaces the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    name: String,
    age: u32,
    gender: Gender,
    role: Role,
}

impl Record {
    /// Build a record, rejecting an empty name
    pub fn new(name: impl Into<String>, age: u32, gender: Gender, role: Role) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::MissingRequired);
        }
        Ok(Self {
            name,
            age,
            gender,
            role,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

/// Records the application starts with
pub fn seed_records() -> Vec<Record> {
    vec![
        Record {
            name: "John".to_string(),
            age: 25,
            gender: Gender::Male,
            role: Role::Admin,
        },
        Record {
            name: "Jane".to_string(),
            age: 30,
            gender: Gender::Female,
            role: Role::User,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        let result = Record::new("", 20, Gender::Male, Role::User);
        assert!(matches!(result, Err(Error::MissingRequired)));
    }

    #[test]
    fn defaults_match_form_defaults() {
        assert_eq!(Gender::default(), Gender::Male);
        assert_eq!(Role::default(), Role::Admin);
    }

    #[test]
    fn seed_contains_john_and_jane() {
        let seed = seed_records();
        assert_eq!(seed.len(), 2);
        assert_eq!(seed[0].name(), "John");
        assert_eq!(seed[1].gender(), Gender::Female);
    }
}
