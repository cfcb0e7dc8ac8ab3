//! Pagination Component
//!
//! Page navigation and rows-per-page options for the DataTable.

use std::rc::Rc;

use gpui::{App, ClickEvent, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window};
use gpui_component::{
    ActiveTheme, Disableable, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
};

use crate::domain::view::PageSize;

type PageHandler = Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>;
type PageSizeHandler = Rc<dyn Fn(PageSize, &mut Window, &mut App) + 'static>;

/// Pagination component. `page_index` is zero-based.
#[derive(IntoElement)]
pub struct Pagination {
    page_index: usize,
    page_count: usize,
    total_items: usize,
    page_size: PageSize,
    items_label: SharedString,
    page_label: SharedString,
    rows_label: SharedString,
    on_page_change: Option<PageHandler>,
    on_page_size_change: Option<PageSizeHandler>,
}

impl Pagination {
    /// Create a new pagination component
    pub fn new(page_index: usize, page_count: usize, total_items: usize, page_size: PageSize) -> Self {
        Self {
            page_index,
            page_count: page_count.max(1),
            total_items,
            page_size,
            items_label: "items".into(),
            page_label: format!("{} / {}", page_index + 1, page_count.max(1)).into(),
            rows_label: "Rows per page".into(),
            on_page_change: None,
            on_page_size_change: None,
        }
    }

    /// Set the items label
    pub fn items_label(mut self, label: impl Into<SharedString>) -> Self {
        self.items_label = label.into();
        self
    }

    /// Replace the "X / Y" page indicator text
    pub fn page_label(mut self, label: impl Into<SharedString>) -> Self {
        self.page_label = label.into();
        self
    }

    /// Set the rows-per-page label
    pub fn rows_label(mut self, label: impl Into<SharedString>) -> Self {
        self.rows_label = label.into();
        self
    }

    /// Set the page change handler, called with the zero-based target page
    pub fn on_page_change(mut self, handler: impl Fn(usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_page_change = Some(Rc::new(handler));
        self
    }

    /// Set the page size change handler
    pub fn on_page_size_change(
        mut self,
        handler: impl Fn(PageSize, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_page_size_change = Some(Rc::new(handler));
        self
    }

    fn nav_button(&self, id: &'static str, icon: IconName, target: Option<usize>) -> Button {
        let button = Button::new(id).icon(icon).ghost().small().disabled(target.is_none());
        match (target, self.on_page_change.clone()) {
            (Some(page), Some(handler)) => {
                button.on_click(move |_: &ClickEvent, window, cx| handler(page, window, cx))
            }
            _ => button,
        }
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let current = self.page_index;
        let prev = current.checked_sub(1);
        let next = (current + 1 < self.page_count).then_some(current + 1);

        let size_buttons = PageSize::all().iter().map(|&size| {
            let selected = size == self.page_size;
            let button = Button::new(("page-size", size.rows()))
                .label(size.rows().to_string())
                .small();
            let button = if selected { button.primary() } else { button.ghost() };
            match self.on_page_size_change.clone() {
                Some(handler) if !selected => {
                    button.on_click(move |_: &ClickEvent, window, cx| handler(size, window, cx))
                }
                _ => button,
            }
        });

        h_flex()
            .w_full()
            .px_2()
            .py_2()
            .items_center()
            .justify_between()
            // Item count
            .child(
                Label::new(format!("{} {}", self.total_items, self.items_label))
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
            // Page navigation
            .child(
                h_flex()
                    .items_center()
                    .gap_2()
                    .child(self.nav_button("prev-page", IconName::ChevronLeft, prev))
                    .child(Label::new(self.page_label.clone()).text_sm())
                    .child(self.nav_button("next-page", IconName::ChevronRight, next)),
            )
            // Rows per page
            .child(
                h_flex()
                    .items_center()
                    .gap_1()
                    .child(
                        Label::new(self.rows_label.clone())
                            .text_sm()
                            .text_color(cx.theme().muted_foreground),
                    )
                    .children(size_buttons),
            )
    }
}
