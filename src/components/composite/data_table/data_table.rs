//! DataTable Component
//!
//! Renders a header with sort indicators, the rows of the current page, an
//! optional footer row and an empty state.

use std::rc::Rc;

use gpui::{
    AnyElement, App, ClickEvent, Div, ElementId, FontWeight, IntoElement, ParentElement,
    RenderOnce, SharedString, Styled, Window, div, prelude::*, px,
};
use gpui_component::{ActiveTheme, Colorize, Icon, IconName, Sizable, h_flex, label::Label, v_flex};

use super::column::{Column, ColumnWidth};
use crate::domain::view::{SortConfig, SortDirection, SortKey};

type SortHandler = Rc<dyn Fn(SortKey, &mut Window, &mut App) + 'static>;

const ROW_HEIGHT: f32 = 40.0;
const HEADER_HEIGHT: f32 = 40.0;

/// DataTable component
#[derive(IntoElement)]
pub struct DataTable<R: 'static> {
    id: ElementId,
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    footer: Vec<AnyElement>,
    sort: Option<SortConfig>,
    on_sort: Option<SortHandler>,
    empty_message: SharedString,
}

impl<R: 'static> DataTable<R> {
    /// Create a new data table
    pub fn new(id: impl Into<ElementId>, columns: Vec<Column<R>>) -> Self {
        Self {
            id: id.into(),
            columns,
            rows: Vec::new(),
            footer: Vec::new(),
            sort: None,
            on_sort: None,
            empty_message: "No data".into(),
        }
    }

    /// Set the rows
    pub fn rows(mut self, rows: Vec<R>) -> Self {
        self.rows = rows;
        self
    }

    /// Set the footer cells, one per column
    pub fn footer(mut self, cells: Vec<AnyElement>) -> Self {
        self.footer = cells;
        self
    }

    /// Show the active sort column and direction
    pub fn sort(mut self, sort: Option<SortConfig>) -> Self {
        self.sort = sort;
        self
    }

    /// Set the header click handler for sortable columns
    pub fn on_sort(mut self, handler: impl Fn(SortKey, &mut Window, &mut App) + 'static) -> Self {
        self.on_sort = Some(Rc::new(handler));
        self
    }

    /// Set the empty message
    pub fn empty_message(mut self, message: impl Into<SharedString>) -> Self {
        self.empty_message = message.into();
        self
    }
}

fn sized(cell: Div, width: ColumnWidth) -> Div {
    match width {
        ColumnWidth::Fixed(w) => cell.w(px(w)).flex_none(),
        ColumnWidth::Flex(grow) => cell.flex_grow().flex_basis(px(0.0)).min_w(px(80.0 * grow)),
    }
}

impl<R: 'static> DataTable<R> {
    fn render_header(&self, cx: &App) -> impl IntoElement {
        let sort = self.sort;

        h_flex()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .bg(cx.theme().secondary)
            .border_b_1()
            .border_color(cx.theme().border)
            .children(self.columns.iter().map(|col| {
                let label = Label::new(col.label.clone())
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM);
                let cell = sized(div().px_3(), col.width);

                let Some(key) = col.sort_key else {
                    return cell.child(label).into_any_element();
                };

                let icon = match sort {
                    Some(SortConfig { key: active, direction }) if active == key => match direction {
                        SortDirection::Asc => IconName::ArrowUp,
                        SortDirection::Desc => IconName::ArrowDown,
                    },
                    _ => IconName::ChevronsUpDown,
                };
                let on_sort = self.on_sort.clone();

                cell.child(
                    h_flex()
                        .id(SharedString::from(format!("sort-{}", col.id)))
                        .gap_1()
                        .cursor_pointer()
                        .child(label)
                        .child(Icon::new(icon).xsmall().text_color(cx.theme().muted_foreground))
                        .when_some(on_sort, |el, handler| {
                            el.on_click(move |_: &ClickEvent, window, cx| handler(key, window, cx))
                        }),
                )
                .into_any_element()
            }))
    }

    fn render_row(&self, row: &R, index: usize, cx: &App) -> impl IntoElement {
        let bg = if index % 2 == 0 {
            cx.theme().background
        } else if cx.theme().is_dark() {
            cx.theme().background.lighten(0.3)
        } else {
            cx.theme().background.darken(0.02)
        };

        h_flex()
            .h(px(ROW_HEIGHT))
            .w_full()
            .bg(bg)
            .border_b_1()
            .border_color(cx.theme().border)
            .children(self.columns.iter().map(|col| {
                sized(div().px_3().text_sm().overflow_hidden(), col.width)
                    .child(col.render_cell(row, cx))
            }))
    }

    fn render_empty(&self, cx: &App) -> impl IntoElement {
        div()
            .w_full()
            .py_8()
            .flex()
            .items_center()
            .justify_center()
            .child(Label::new(self.empty_message.clone()).text_color(cx.theme().muted_foreground))
    }
}

impl<R: 'static> RenderOnce for DataTable<R> {
    fn render(mut self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let header = self.render_header(cx).into_any_element();
        let body = if self.rows.is_empty() {
            self.render_empty(cx).into_any_element()
        } else {
            v_flex()
                .w_full()
                .children(
                    self.rows
                        .iter()
                        .enumerate()
                        .map(|(i, row)| self.render_row(row, i, cx)),
                )
                .into_any_element()
        };

        let footer = std::mem::take(&mut self.footer);
        let widths: Vec<ColumnWidth> = self.columns.iter().map(|col| col.width).collect();

        v_flex()
            .id(self.id)
            .w_full()
            .border_1()
            .border_color(cx.theme().border)
            .rounded_md()
            .overflow_hidden()
            .child(header)
            .child(body)
            .when(!footer.is_empty(), |table| {
                table.child(
                    h_flex()
                        .h(px(ROW_HEIGHT))
                        .w_full()
                        .bg(cx.theme().secondary)
                        .font_weight(FontWeight::SEMIBOLD)
                        .children(
                            footer
                                .into_iter()
                                .zip(widths)
                                .map(|(cell, width)| sized(div().px_3().text_sm(), width).child(cell)),
                        ),
                )
            })
    }
}
