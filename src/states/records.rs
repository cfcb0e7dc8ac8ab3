//! Records State
//!
//! Owns the record store, the table's view state and the row-action modal.
//! Views call these methods inside `Entity::update` and notify afterwards;
//! nothing here depends on GPUI, so the whole workflow runs headless.
//!
//! ```text
//! EntryForm::submit → append → reconcile_page → derived_view → render
//! row button → open_update/open_delete → confirm/cancel → reconcile_page
//! ```

use tracing::info;

use crate::domain::draft::RecordDraft;
use crate::domain::pipeline::{DerivedView, derive_view, matches_search};
use crate::domain::record::{Record, RecordId};
use crate::domain::view::{PageSize, SortKey, ViewState};
use crate::error::{Error, Result};
use crate::states::modal::RecordModal;
use crate::states::store::RecordStore;

#[derive(Debug, Clone, Default)]
pub struct RecordsState {
    store: RecordStore,
    view: ViewState,
    modal: RecordModal,
}

impl RecordsState {
    pub fn new(records: impl IntoIterator<Item = Record>, page_size: PageSize) -> Self {
        Self {
            store: RecordStore::from_records(records),
            view: ViewState::new(page_size),
            modal: RecordModal::Closed,
        }
    }

    // ==================== Getters ====================

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn modal(&self) -> &RecordModal {
        &self.modal
    }

    /// Recompute the visible rows from the current store and view state
    pub fn derived_view(&self) -> DerivedView {
        derive_view(self.store.rows(), &self.view)
    }

    fn filtered_len(&self) -> usize {
        let term = self.view.search_term();
        self.store.records().filter(|r| matches_search(r, term)).count()
    }

    /// Keep the page index inside the current result set
    fn reconcile_page(&mut self) {
        let len = self.filtered_len();
        self.view.clamp_page(len);
    }

    // ==================== Store operations ====================

    /// Append an already validated record
    pub fn append_record(&mut self, record: Record) -> RecordId {
        let id = self.store.append(record);
        info!(id = %id, total = self.store.len(), "Record added");
        self.reconcile_page();
        id
    }

    /// Validate field input and append the resulting record
    pub fn add_record(&mut self, draft: &RecordDraft) -> Result<RecordId> {
        let record = draft.to_record()?;
        Ok(self.append_record(record))
    }

    /// Replace a record with validated field input
    pub fn update_record(&mut self, id: RecordId, draft: &RecordDraft) -> Result<()> {
        let record = draft.to_record()?;
        self.store.replace(id, record)?;
        info!(id = %id, "Record updated");
        self.reconcile_page();
        Ok(())
    }

    pub fn delete_record(&mut self, id: RecordId) -> Result<Record> {
        let removed = self.store.remove(id)?;
        info!(id = %id, total = self.store.len(), "Record deleted");
        self.reconcile_page();
        Ok(removed)
    }

    /// Duplicate a record to the end of the store, no confirmation
    pub fn copy_record(&mut self, id: RecordId) -> Result<RecordId> {
        let copy = self.store.duplicate(id)?;
        info!(source = %id, copy = %copy, "Record copied");
        self.reconcile_page();
        Ok(copy)
    }

    // ==================== View controls ====================

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.view.set_search_term(term);
        self.reconcile_page();
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.view.toggle_sort(key);
        self.reconcile_page();
    }

    pub fn set_page_index(&mut self, index: usize) {
        let len = self.filtered_len();
        self.view.set_page_index(index, len);
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.view.set_page_size(size);
    }

    // ==================== Modals ====================

    /// Open the edit modal on a scratch copy of the target
    pub fn open_update(&mut self, id: RecordId) -> Result<()> {
        let record = self.store.get(id).ok_or_else(|| Error::RecordNotFound {
            target: id.to_string(),
        })?;
        self.modal = RecordModal::Update {
            target: id,
            draft: RecordDraft::from_record(record),
            error: None,
        };
        Ok(())
    }

    pub fn open_delete(&mut self, id: RecordId) -> Result<()> {
        if self.store.get(id).is_none() {
            return Err(Error::RecordNotFound {
                target: id.to_string(),
            });
        }
        self.modal = RecordModal::Delete { target: id };
        Ok(())
    }

    /// Mutable access to the scratch copy while the edit modal is open
    pub fn edit_draft_mut(&mut self) -> Option<&mut RecordDraft> {
        self.modal.update_draft_mut()
    }

    /// Confirm the open modal.
    ///
    /// An invalid edit keeps the modal open with the error attached; every
    /// other outcome closes it.
    pub fn confirm_modal(&mut self) -> Result<()> {
        match std::mem::take(&mut self.modal) {
            RecordModal::Closed => Ok(()),
            RecordModal::Update { target, draft, .. } => match draft.to_record() {
                Ok(record) => {
                    self.store.replace(target, record)?;
                    info!(id = %target, "Record updated");
                    self.reconcile_page();
                    Ok(())
                }
                Err(e) => {
                    self.modal = RecordModal::Update {
                        target,
                        draft,
                        error: Some(e.message_key()),
                    };
                    Err(e)
                }
            },
            RecordModal::Delete { target } => self.delete_record(target).map(|_| ()),
        }
    }

    /// Dismiss the open modal without touching the store
    pub fn cancel_modal(&mut self) {
        self.modal = RecordModal::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::{Gender, Role, seed_records};

    fn seeded() -> RecordsState {
        RecordsState::new(seed_records(), PageSize::Five)
    }

    fn names(state: &RecordsState) -> Vec<String> {
        state.store().records().map(|r| r.name().to_string()).collect()
    }

    fn id_at(state: &RecordsState, index: usize) -> RecordId {
        state.store().get_at(index).map(|(id, _)| id).expect("record at index")
    }

    fn draft(name: &str, age: &str) -> RecordDraft {
        RecordDraft {
            name: name.into(),
            age: age.into(),
            gender: Gender::Female,
            role: Role::User,
        }
    }

    #[test]
    fn invalid_drafts_leave_store_unchanged() {
        let mut state = seeded();
        assert!(state.add_record(&draft("", "20")).is_err());
        assert!(state.add_record(&draft("Amy", "-1")).is_err());
        assert_eq!(state.store().len(), 2);

        state.add_record(&draft("Amy", "22")).expect("valid");
        assert_eq!(state.store().len(), 3);
    }

    #[test]
    fn search_ja_finds_jane() {
        let mut state = seeded();
        state.set_search_term("ja");
        let view = state.derived_view();
        assert_eq!(view.total_count, 1);
        assert_eq!(view.rows[0].record.name(), "Jane");
        assert_eq!(view.total_age, 55);
    }

    #[test]
    fn update_modal_edits_scratch_copy_only() {
        let mut state = seeded();
        let jane = id_at(&state, 1);
        state.open_update(jane).expect("open");
        if let Some(d) = state.edit_draft_mut() {
            d.name = "Janet".into();
        }
        assert_eq!(names(&state), vec!["John", "Jane"]);

        state.cancel_modal();
        assert_eq!(state.modal(), &RecordModal::Closed);
        assert_eq!(names(&state), vec!["John", "Jane"]);

        state.open_update(jane).expect("open");
        if let Some(d) = state.edit_draft_mut() {
            d.name = "Janet".into();
        }
        state.confirm_modal().expect("confirm");
        assert_eq!(names(&state), vec!["John", "Janet"]);
        assert!(!state.modal().is_open());
    }

    #[test]
    fn invalid_edit_keeps_modal_open() {
        let mut state = seeded();
        let john = id_at(&state, 0);
        state.open_update(john).expect("open");
        if let Some(d) = state.edit_draft_mut() {
            d.age = "-3".into();
        }
        assert!(state.confirm_modal().is_err());
        assert_eq!(state.modal().target(), Some(john));
        assert_eq!(state.modal().error(), Some("errors.negative_age"));
        assert_eq!(state.store().get(john).map(Record::age), Some(25));
    }

    #[test]
    fn row_actions_target_store_identity_not_page_position() {
        let mut state = seeded();
        state.toggle_sort(SortKey::Age);
        state.toggle_sort(SortKey::Age);
        // Jane (30) now renders first
        let first_row = state.derived_view().rows[0].clone();
        assert_eq!(first_row.record.name(), "Jane");

        state.open_delete(first_row.id).expect("open");
        state.confirm_modal().expect("delete");
        assert_eq!(names(&state), vec!["John"]);
    }

    #[test]
    fn copy_then_delete_scenario() {
        let mut state = seeded();
        let john = id_at(&state, 0);
        state.copy_record(john).expect("copy");
        assert_eq!(state.store().len(), 3);
        assert_eq!(state.store().get_at(2).map(|(_, r)| r.clone()), state.store().get(john).cloned());

        let jane = id_at(&state, 1);
        state.delete_record(jane).expect("delete");
        assert_eq!(names(&state), vec!["John", "John"]);
    }

    #[test]
    fn page_is_clamped_after_deletes() {
        let mut state = RecordsState::new(Vec::new(), PageSize::Five);
        let ids: Vec<RecordId> = (0..11)
            .map(|i| state.add_record(&draft(&format!("P{i}"), "1")).expect("valid"))
            .collect();
        state.set_page_index(2);
        assert_eq!(state.derived_view().rows.len(), 1);

        state.delete_record(ids[10]).expect("delete");
        assert_eq!(state.view().page_index(), 1);
        assert_eq!(state.derived_view().rows.len(), 5);
    }

    #[test]
    fn search_change_resets_page() {
        let mut state = RecordsState::new(Vec::new(), PageSize::Five);
        for i in 0..12 {
            state.add_record(&draft(&format!("P{i}"), "1")).expect("valid");
        }
        state.set_page_index(2);
        state.set_search_term("p1");
        assert_eq!(state.view().page_index(), 0);
    }

    #[test]
    fn sorting_keeps_page_inside_results() {
        let mut state = RecordsState::new(Vec::new(), PageSize::Five);
        for i in 0..12 {
            state.add_record(&draft(&format!("P{i}"), &i.to_string())).expect("valid");
        }
        state.set_page_index(2);
        state.toggle_sort(SortKey::Age);
        assert_eq!(state.view().page_index(), 2);
        assert_eq!(state.derived_view().rows.len(), 2);

        state.set_search_term("p1");
        state.toggle_sort(SortKey::Age);
        let view = state.derived_view();
        assert!(view.page_index < view.page_count);
        assert_eq!(view.total_count, 3);
    }

    #[test]
    fn stale_targets_are_reported() {
        let mut state = seeded();
        let jane = id_at(&state, 1);
        state.delete_record(jane).expect("delete");
        assert!(matches!(state.open_update(jane), Err(Error::RecordNotFound { .. })));
        assert!(matches!(state.copy_record(jane), Err(Error::RecordNotFound { .. })));
        assert!(matches!(
            state.update_record(jane, &draft("X", "1")),
            Err(Error::RecordNotFound { .. })
        ));
        assert_eq!(state.store().len(), 1);
    }
}
