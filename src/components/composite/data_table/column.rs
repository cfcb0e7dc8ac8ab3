//! Column Definition
//!
//! Defines table columns with their properties and cell renderers.

use gpui::{AnyElement, App, SharedString};

use crate::domain::view::SortKey;

/// Cell renderer; receives the row and the app for theme access
pub type CellRenderer<R> = Box<dyn Fn(&R, &App) -> AnyElement + 'static>;

/// Column definition for the DataTable
pub struct Column<R> {
    /// Column identifier
    pub id: SharedString,
    /// Column header label
    pub label: SharedString,
    /// Column width
    pub width: ColumnWidth,
    /// Sort key applied when the header is clicked
    pub sort_key: Option<SortKey>,
    /// Cell renderer function
    pub render: CellRenderer<R>,
}

/// Column width specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Share of the remaining space
    Flex(f32),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex(1.0)
    }
}

impl<R: 'static> Column<R> {
    /// Create a new column
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        render: impl Fn(&R, &App) -> AnyElement + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width: ColumnWidth::default(),
            sort_key: None,
            render: Box::new(render),
        }
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set flexible width
    pub fn flex_width(mut self, grow: f32) -> Self {
        self.width = ColumnWidth::Flex(grow);
        self
    }

    /// Make the column sortable by `key`
    pub fn sortable(mut self, key: SortKey) -> Self {
        self.sort_key = Some(key);
        self
    }

    /// Render a cell
    pub fn render_cell(&self, row: &R, cx: &App) -> AnyElement {
        (self.render)(row, cx)
    }
}
