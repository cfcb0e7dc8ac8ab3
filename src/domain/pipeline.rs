//! Derived View Pipeline
//!
//! Pure functions that turn the full record list plus a [`ViewState`] into the
//! rows shown on screen: filter by name, sort, slice one page, and sum ages.
//! Every step builds a new sequence; the store itself is never reordered.

use std::cmp::Ordering;

use crate::domain::highlight::fold_case;
use crate::domain::record::{Record, RecordId};
use crate::domain::view::{SortConfig, SortDirection, SortKey, ViewState};

/// Borrowed view of a stored record with its identity and store position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRef<'a> {
    pub id: RecordId,
    pub position: usize,
    pub record: &'a Record,
}

/// A row on the current page.
///
/// Row actions must use `id` (or `position`), never the row's place on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    pub id: RecordId,
    pub position: usize,
    pub record: Record,
}

impl From<RowRef<'_>> for VisibleRow {
    fn from(row: RowRef<'_>) -> Self {
        Self {
            id: row.id,
            position: row.position,
            record: row.record.clone(),
        }
    }
}

/// Output of the pipeline for one render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedView {
    /// Rows of the current page, in display order
    pub rows: Vec<VisibleRow>,
    /// Number of rows after filtering, across all pages
    pub total_count: usize,
    /// Sum of ages over the whole store, ignoring search and paging
    pub total_age: u64,
    pub page_index: usize,
    pub page_count: usize,
}

/// Case-insensitive, unanchored substring match on the name
pub fn matches_search(record: &Record, term: &str) -> bool {
    term.is_empty() || fold_case(record.name()).contains(&fold_case(term))
}

pub fn filter_rows<'a>(rows: impl IntoIterator<Item = RowRef<'a>>, term: &str) -> Vec<RowRef<'a>> {
    rows.into_iter()
        .filter(|row| matches_search(row.record, term))
        .collect()
}

/// Three-way comparison of one field
pub fn compare_by(a: &Record, b: &Record, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name().cmp(b.name()),
        SortKey::Age => a.age().cmp(&b.age()),
        SortKey::Gender => a.gender().as_str().cmp(b.gender().as_str()),
        SortKey::Role => a.role().as_str().cmp(b.role().as_str()),
    }
}

/// Stable sort; equal rows keep their filtered order in both directions
pub fn sort_rows(rows: &mut [RowRef<'_>], sort: Option<SortConfig>) {
    let Some(SortConfig { key, direction }) = sort else {
        return;
    };
    rows.sort_by(|a, b| {
        let ordering = compare_by(a.record, b.record, key);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Slice `[page_index * page_size, page_index * page_size + page_size)`.
/// Out-of-range pages yield an empty slice.
pub fn paginate<'s, T>(rows: &'s [T], page_index: usize, page_size: usize) -> &'s [T] {
    let start = page_index.saturating_mul(page_size);
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

pub fn total_age<'a>(records: impl IntoIterator<Item = &'a Record>) -> u64 {
    records.into_iter().map(|r| u64::from(r.age())).sum()
}

/// Filtered and sorted rows across all pages
pub fn arrange<'a>(rows: impl IntoIterator<Item = RowRef<'a>>, view: &ViewState) -> Vec<RowRef<'a>> {
    let mut arranged = filter_rows(rows, view.search_term());
    sort_rows(&mut arranged, view.sort());
    arranged
}

/// Run the whole pipeline
pub fn derive_view<'a>(rows: impl IntoIterator<Item = RowRef<'a>>, view: &ViewState) -> DerivedView {
    let all: Vec<RowRef<'a>> = rows.into_iter().collect();
    let total_age = total_age(all.iter().map(|row| row.record));

    let arranged = arrange(all, view);
    let page = paginate(&arranged, view.page_index(), view.page_size().rows());

    DerivedView {
        rows: page.iter().copied().map(VisibleRow::from).collect(),
        total_count: arranged.len(),
        total_age,
        page_index: view.page_index(),
        page_count: view.page_count(arranged.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::{Gender, Role};
    use crate::domain::view::PageSize;

    fn record(name: &str, age: u32) -> Record {
        Record::new(name, age, Gender::Male, Role::User).expect("valid record")
    }

    fn refs(records: &[Record]) -> Vec<RowRef<'_>> {
        records
            .iter()
            .enumerate()
            .map(|(position, record)| RowRef {
                id: RecordId(position as u64 + 1),
                position,
                record,
            })
            .collect()
    }

    fn names(rows: &[RowRef<'_>]) -> Vec<String> {
        rows.iter().map(|r| r.record.name().to_string()).collect()
    }

    fn people() -> Vec<Record> {
        vec![
            record("John", 25),
            Record::new("Jane", 30, Gender::Female, Role::User).expect("valid record"),
            record("Bob", 41),
            record("anja", 19),
            record("Zed", 33),
        ]
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let records = people();
        let filtered = filter_rows(refs(&records), "JA");
        assert_eq!(names(&filtered), vec!["Jane", "anja"]);
        for row in &filtered {
            assert!(row.record.name().to_lowercase().contains("ja"));
        }
    }

    #[test]
    fn filtered_names_always_have_a_highlight() {
        use crate::domain::highlight::highlight_segments;

        let records = vec![record("İpek", 20), record("ΟΔΟΣ", 30), record("Zoë", 40)];
        for term in ["i", "ος", "οσ", "Ë", "x"] {
            for row in filter_rows(refs(&records), term) {
                let segments = highlight_segments(row.record.name(), term);
                assert!(segments.iter().any(|s| s.matched), "{term} in {}", row.record.name());
            }
        }
        assert_eq!(filter_rows(refs(&records), "i").len(), 1);
    }

    #[test]
    fn empty_search_keeps_original_order() {
        let records = people();
        let filtered = filter_rows(refs(&records), "");
        assert_eq!(names(&filtered), vec!["John", "Jane", "Bob", "anja", "Zed"]);
    }

    #[test]
    fn ascending_then_descending_reverses_without_ties() {
        let records = people();
        let mut asc = refs(&records);
        sort_rows(
            &mut asc,
            Some(SortConfig { key: SortKey::Age, direction: SortDirection::Asc }),
        );
        let mut desc = refs(&records);
        sort_rows(
            &mut desc,
            Some(SortConfig { key: SortKey::Age, direction: SortDirection::Desc }),
        );
        let mut reversed = names(&asc);
        reversed.reverse();
        assert_eq!(names(&desc), reversed);
        assert_eq!(names(&asc), vec!["anja", "John", "Jane", "Zed", "Bob"]);
    }

    #[test]
    fn no_sort_key_is_a_no_op() {
        let records = people();
        let mut rows = refs(&records);
        sort_rows(&mut rows, None);
        assert_eq!(rows, refs(&records));
    }

    #[test]
    fn ties_keep_filtered_order() {
        let records = vec![record("Al", 20), record("Bo", 20), record("Cy", 10)];
        let mut rows = refs(&records);
        sort_rows(
            &mut rows,
            Some(SortConfig { key: SortKey::Age, direction: SortDirection::Desc }),
        );
        assert_eq!(names(&rows), vec!["Al", "Bo", "Cy"]);
    }

    #[test]
    fn name_sort_is_case_sensitive_code_point_order() {
        let records = people();
        let mut rows = refs(&records);
        sort_rows(
            &mut rows,
            Some(SortConfig { key: SortKey::Name, direction: SortDirection::Asc }),
        );
        assert_eq!(names(&rows), vec!["Bob", "Jane", "John", "Zed", "anja"]);
    }

    #[test]
    fn pages_reconstruct_the_arranged_sequence() {
        let records: Vec<Record> = (0..23).map(|i| record(&format!("P{i:02}"), i)).collect();
        let mut view = ViewState::new(PageSize::Five);
        view.toggle_sort(SortKey::Age);
        view.toggle_sort(SortKey::Age);

        let arranged = arrange(refs(&records), &view);
        let mut concatenated = Vec::new();
        for page in 0..view.page_count(arranged.len()) {
            let slice = paginate(&arranged, page, 5);
            assert!(slice.len() <= 5);
            concatenated.extend_from_slice(slice);
        }
        assert_eq!(concatenated, arranged);
        assert_eq!(view.page_count(arranged.len()), 5);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let rows = [1, 2, 3];
        assert!(paginate(&rows, 4, 5).is_empty());
        assert_eq!(paginate(&rows, 0, 5), &[1, 2, 3]);
        assert!(paginate(&rows, usize::MAX, 25).is_empty());
    }

    #[test]
    fn total_age_ignores_filter_and_page() {
        let records = people();
        let mut view = ViewState::new(PageSize::Five);
        view.set_search_term("zed");
        let derived = derive_view(refs(&records), &view);
        assert_eq!(derived.total_count, 1);
        assert_eq!(derived.total_age, 25 + 30 + 41 + 19 + 33);
    }

    #[test]
    fn visible_rows_carry_store_identity() {
        let records = people();
        let mut view = ViewState::new(PageSize::Five);
        view.set_search_term("ja");
        let derived = derive_view(refs(&records), &view);
        assert_eq!(derived.rows.len(), 2);
        assert_eq!(derived.rows[1].position, 3);
        assert_eq!(derived.rows[1].id, RecordId(4));
    }
}
