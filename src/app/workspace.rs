//! Workspace - Main Shell
//!
//! Holds the title bar, the entry form and the records table, and routes the
//! window-level keyboard actions to them.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  TitleBar                    │
//! ├──────────────┬───────────────────────────────┤
//! │  Entry form  │        Records table          │
//! └──────────────┴───────────────────────────────┘
//! ```

use gpui::{Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*, px};
use gpui_component::{ActiveTheme, h_flex, v_flex};

use crate::constants::ENTRY_FORM_WIDTH;
use crate::helpers::RecordAction;
use crate::states::RecordsState;
use crate::views::{EntryFormView, RecordsTableView, RecordsTitleBar};

/// Main workspace containing the application layout
pub struct Workspace {
    title_bar: Entity<RecordsTitleBar>,
    entry_form: Entity<EntryFormView>,
    records_table: Entity<RecordsTableView>,
}

impl Workspace {
    pub fn new(records: Entity<RecordsState>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let title_bar = cx.new(|cx| RecordsTitleBar::new(window, cx));
        let entry_form = cx.new(|cx| EntryFormView::new(records.clone(), window, cx));
        let records_table = cx.new(|cx| RecordsTableView::new(records, window, cx));

        Self {
            title_bar,
            entry_form,
            records_table,
        }
    }

    fn on_record_action(&mut self, action: &RecordAction, window: &mut Window, cx: &mut Context<Self>) {
        match action {
            RecordAction::FocusSearch => {
                self.records_table
                    .update(cx, |table, cx| table.focus_search(window, cx));
            }
            RecordAction::CancelModal => {
                self.entry_form.update(cx, |form, cx| form.dismiss_alert(cx));
                self.records_table.update(cx, |table, cx| table.cancel_modal(cx));
            }
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .id("workspace")
            .key_context("Workspace")
            .on_action(cx.listener(Self::on_record_action))
            .size_full()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(self.title_bar.clone())
            .child(
                h_flex()
                    .id("workspace-content")
                    .flex_1()
                    .items_start()
                    .gap_4()
                    .p_4()
                    .overflow_y_scroll()
                    .child(div().w(px(ENTRY_FORM_WIDTH)).flex_none().child(self.entry_form.clone()))
                    .child(div().flex_1().child(self.records_table.clone())),
            )
    }
}
