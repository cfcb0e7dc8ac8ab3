//! Row Action Modals
//!
//! At most one modal is open at a time. Each one targets a record by id and
//! always returns to `Closed` on confirm or cancel.

use crate::domain::draft::RecordDraft;
use crate::domain::record::RecordId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RecordModal {
    #[default]
    Closed,
    /// Editing a scratch copy of the target
    Update {
        target: RecordId,
        draft: RecordDraft,
        /// Translation key of the last rejected confirm
        error: Option<&'static str>,
    },
    /// Waiting for delete confirmation
    Delete { target: RecordId },
}

impl RecordModal {
    pub fn is_open(&self) -> bool {
        !matches!(self, RecordModal::Closed)
    }

    pub fn target(&self) -> Option<RecordId> {
        match self {
            RecordModal::Closed => None,
            RecordModal::Update { target, .. } | RecordModal::Delete { target } => Some(*target),
        }
    }

    pub fn update_draft(&self) -> Option<&RecordDraft> {
        match self {
            RecordModal::Update { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn update_draft_mut(&mut self) -> Option<&mut RecordDraft> {
        match self {
            RecordModal::Update { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&'static str> {
        match self {
            RecordModal::Update { error, .. } => *error,
            _ => None,
        }
    }
}
