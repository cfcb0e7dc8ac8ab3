//! Entry Form State
//!
//! Draft of a new record. Gender and role selections survive a submit, only
//! the text fields are cleared.

use tracing::warn;

use crate::domain::draft::RecordDraft;
use crate::domain::record::{Gender, Record, Role};
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct EntryForm {
    draft: RecordDraft,
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &RecordDraft {
        &self.draft
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_age(&mut self, age: impl Into<String>) {
        self.draft.age = age.into();
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.draft.gender = gender;
    }

    pub fn set_role(&mut self, role: Role) {
        self.draft.role = role;
    }

    /// Validate and emit a record, then clear name and age.
    ///
    /// A rejected draft is left untouched so the user can correct it.
    pub fn submit(&mut self) -> Result<Record> {
        let record = self.draft.to_record().inspect_err(|e| {
            warn!(error = %e, "Entry form submission rejected");
        })?;
        self.draft.clear_text_fields();
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn submit_emits_record_and_clears_text() {
        let mut form = EntryForm::new();
        form.set_name("Amy");
        form.set_age("22");
        form.set_gender(Gender::Female);
        form.set_role(Role::User);

        let record = form.submit().expect("valid form");
        assert_eq!(record.name(), "Amy");
        assert_eq!(record.age(), 22);
        assert!(form.draft().name.is_empty());
        assert!(form.draft().age.is_empty());
        assert_eq!(form.draft().gender, Gender::Female);
        assert_eq!(form.draft().role, Role::User);
    }

    #[test]
    fn rejected_submit_keeps_input() {
        let mut form = EntryForm::new();
        form.set_name("Amy");
        form.set_age("-5");
        assert!(matches!(form.submit(), Err(Error::NegativeAge { age: -5 })));
        assert_eq!(form.draft().name, "Amy");
        assert_eq!(form.draft().age, "-5");
    }

    #[test]
    fn defaults_are_male_admin() {
        let form = EntryForm::new();
        assert_eq!(form.draft().gender, Gender::Male);
        assert_eq!(form.draft().role, Role::Admin);
    }
}
