//! RecordDraft - Editable Field Input Before It Becomes a Record

use crate::domain::record::{Gender, Record, Role};
use crate::error::{Error, Result};

/// Field values as typed by the user.
///
/// Age stays textual until validation so that an empty field can be told
/// apart from zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub name: String,
    pub age: String,
    pub gender: Gender,
    pub role: Role,
}

impl RecordDraft {
    /// Seed a scratch copy from an existing record
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.name().to_string(),
            age: record.age().to_string(),
            gender: record.gender(),
            role: record.role(),
        }
    }

    /// Validate the draft and build a record from it.
    ///
    /// Checks run in order: presence of name and age, then age parsing,
    /// then non-negativity.
    pub fn to_record(&self) -> Result<Record> {
        let age_text = self.age.trim();
        if self.name.is_empty() || age_text.is_empty() {
            return Err(Error::MissingRequired);
        }

        let age: i64 = match age_text.parse() {
            Ok(age) => age,
            // Out of i64 range but still a negative whole number
            Err(_) if is_negative_integer(age_text) => {
                return Err(Error::NegativeAge { age: i64::MIN });
            }
            Err(_) => {
                return Err(Error::InvalidAge {
                    input: self.age.clone(),
                });
            }
        };
        if age < 0 {
            return Err(Error::NegativeAge { age });
        }
        let age = u32::try_from(age).map_err(|_| Error::InvalidAge {
            input: self.age.clone(),
        })?;

        Record::new(self.name.clone(), age, self.gender, self.role)
    }

    /// Clear the text fields, keeping gender and role selections
    pub fn clear_text_fields(&mut self) {
        self.name.clear();
        self.age.clear();
    }
}

fn is_negative_integer(text: &str) -> bool {
    text.strip_prefix('-')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, age: &str) -> RecordDraft {
        RecordDraft {
            name: name.to_string(),
            age: age.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn missing_name_or_age_is_reported_first() {
        assert!(matches!(draft("", "20").to_record(), Err(Error::MissingRequired)));
        assert!(matches!(draft("Amy", "").to_record(), Err(Error::MissingRequired)));
        // Presence wins over negativity
        assert!(matches!(draft("", "-3").to_record(), Err(Error::MissingRequired)));
    }

    #[test]
    fn negative_age_is_rejected() {
        assert!(matches!(
            draft("Amy", "-1").to_record(),
            Err(Error::NegativeAge { age: -1 })
        ));
    }

    #[test]
    fn huge_negative_age_is_still_negative() {
        assert!(matches!(
            draft("Amy", "-99999999999999999999").to_record(),
            Err(Error::NegativeAge { .. })
        ));
        assert!(matches!(draft("Amy", "-").to_record(), Err(Error::InvalidAge { .. })));
        assert!(matches!(draft("Amy", "-1.5").to_record(), Err(Error::InvalidAge { .. })));
    }

    #[test]
    fn non_numeric_age_is_rejected() {
        assert!(matches!(draft("Amy", "abc").to_record(), Err(Error::InvalidAge { .. })));
        assert!(matches!(draft("Amy", "22.5").to_record(), Err(Error::InvalidAge { .. })));
        assert!(matches!(
            draft("Amy", "99999999999").to_record(),
            Err(Error::InvalidAge { .. })
        ));
    }

    #[test]
    fn zero_and_padded_ages_are_accepted() {
        assert_eq!(draft("Baby", "0").to_record().map(|r| r.age()).ok(), Some(0));
        assert_eq!(draft("Amy", " 22 ").to_record().map(|r| r.age()).ok(), Some(22));
    }

    #[test]
    fn round_trips_through_record() {
        let record = Record::new("Jane", 30, Gender::Female, Role::User).expect("valid record");
        let copy = RecordDraft::from_record(&record);
        assert_eq!(copy.age, "30");
        assert_eq!(copy.to_record().ok(), Some(record));
    }

    #[test]
    fn clearing_keeps_selections() {
        let mut d = RecordDraft {
            name: "Amy".into(),
            age: "22".into(),
            gender: Gender::Female,
            role: Role::User,
        };
        d.clear_text_fields();
        assert!(d.name.is_empty());
        assert!(d.age.is_empty());
        assert_eq!(d.gender, Gender::Female);
        assert_eq!(d.role, Role::User);
    }
}
