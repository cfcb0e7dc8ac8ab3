//! View State - Search, Sort and Page Controls of the Records Table

use serde::{Deserialize, Serialize};

/// Column a table can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Age,
    Gender,
    Role,
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Rows per page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Five,
    Ten,
    TwentyFive,
}

impl PageSize {
    pub fn rows(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
        }
    }

    pub fn all() -> &'static [PageSize] {
        &[PageSize::Five, PageSize::Ten, PageSize::TwentyFive]
    }
}

impl TryFrom<usize> for PageSize {
    type Error = String;

    fn try_from(rows: usize) -> Result<Self, Self::Error> {
        match rows {
            5 => Ok(PageSize::Five),
            10 => Ok(PageSize::Ten),
            25 => Ok(PageSize::TwentyFive),
            other => Err(format!("unsupported page size {other}, expected 5, 10 or 25")),
        }
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.rows()
    }
}

/// UI-driven parameters that decide which slice of the store is shown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    search_term: String,
    sort: Option<SortConfig>,
    page_index: usize,
    page_size: PageSize,
}

impl ViewState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    // ==================== Getters ====================

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort(&self) -> Option<SortConfig> {
        self.sort
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Number of pages for a result set, never less than one
    pub fn page_count(&self, filtered_len: usize) -> usize {
        filtered_len.div_ceil(self.page_size.rows()).max(1)
    }

    // ==================== Setters ====================

    /// Change the search term; always returns to the first page
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page_index = 0;
    }

    /// Clicking the active column flips it, any other column starts ascending
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = Some(match self.sort {
            Some(current) if current.key == key => SortConfig {
                key,
                direction: current.direction.flipped(),
            },
            _ => SortConfig {
                key,
                direction: SortDirection::Asc,
            },
        });
    }

    /// Jump to a page, bounded by the current result size
    pub fn set_page_index(&mut self, index: usize, filtered_len: usize) {
        self.page_index = index.min(self.page_count(filtered_len) - 1);
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.page_index = 0;
    }

    /// Pull the page index back once the result set no longer reaches it
    pub fn clamp_page(&mut self, filtered_len: usize) {
        let last = self.page_count(filtered_len) - 1;
        if self.page_index > last {
            self.page_index = last;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_resets_page() {
        let mut view = ViewState::default();
        view.set_page_index(3, 100);
        assert_eq!(view.page_index(), 3);
        view.set_search_term("ja");
        assert_eq!(view.page_index(), 0);
        assert_eq!(view.search_term(), "ja");
    }

    #[test]
    fn toggle_sort_flips_same_key_and_resets_new_key() {
        let mut view = ViewState::default();
        view.toggle_sort(SortKey::Name);
        assert_eq!(view.sort().map(|s| s.direction), Some(SortDirection::Asc));
        view.toggle_sort(SortKey::Name);
        assert_eq!(view.sort().map(|s| s.direction), Some(SortDirection::Desc));
        view.toggle_sort(SortKey::Age);
        assert_eq!(
            view.sort(),
            Some(SortConfig {
                key: SortKey::Age,
                direction: SortDirection::Asc
            })
        );
    }

    #[test]
    fn page_index_is_bounded() {
        let mut view = ViewState::new(PageSize::Five);
        view.set_page_index(10, 12);
        assert_eq!(view.page_index(), 2);
        view.set_page_index(4, 0);
        assert_eq!(view.page_index(), 0);
    }

    #[test]
    fn clamp_after_shrink() {
        let mut view = ViewState::new(PageSize::Five);
        view.set_page_index(2, 15);
        view.clamp_page(10);
        assert_eq!(view.page_index(), 1);
        view.clamp_page(10);
        assert_eq!(view.page_index(), 1);
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut view = ViewState::new(PageSize::Five);
        view.set_page_index(1, 10);
        view.set_page_size(PageSize::TwentyFive);
        assert_eq!(view.page_index(), 0);
        assert_eq!(view.page_size().rows(), 25);
    }

    #[test]
    fn page_size_only_accepts_known_options() {
        assert_eq!(PageSize::try_from(10), Ok(PageSize::Ten));
        assert!(PageSize::try_from(7).is_err());
        assert_eq!(ViewState::default().page_count(0), 1);
        assert_eq!(ViewState::default().page_count(11), 3);
    }
}
