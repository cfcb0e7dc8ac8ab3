//! Records Table View
//!
//! Search box, sortable table with per-row actions and a total row,
//! pagination, and the update / delete modals.
//!
//! ```text
//! ┌ search ───────────────────────────────────────────────┐
//! │ Name ⇅ │ Age ⇅ │ Gender │ Role │ Update Delete Copy    │
//! │ ...                                                   │
//! │ Total  │ 55    │        │      │                       │
//! └ 2 items        ‹ Page 1 / 1 ›        Rows per page 5 10 25 ┘
//! ```

use crate::components::composite::{Column, DataTable, Modal, Pagination};
use crate::components::primitives::{Choice, ChoiceGroup, HighlightedText};
use crate::domain::draft::RecordDraft;
use crate::domain::pipeline::VisibleRow;
use crate::domain::record::{Gender, RecordId, Role};
use crate::domain::view::{PageSize, SortKey};
use crate::helpers::humanize_keystroke;
use crate::states::{
    RecordModal, RecordsGlobalStore, RecordsState, i18n_common, i18n_dialog, i18n_format,
    i18n_form, i18n_key, i18n_table,
};
use gpui::{
    AnyElement, App, Context, Entity, SharedString, Subscription, WeakEntity, Window, div,
    prelude::*, px,
};
use gpui_component::{
    ActiveTheme, Icon, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
    v_flex,
};
use tracing::warn;

const ACTIONS_COLUMN_WIDTH: f32 = 260.0;
const MODAL_LABEL_WIDTH: f32 = 72.0;

/// Element id of a row control, unique per record
fn row_element_id(prefix: &str, id: RecordId) -> SharedString {
    SharedString::from(format!("{prefix}-{}", id.0))
}

/// Records table with search, sorting, paging and row actions
pub struct RecordsTableView {
    records: Entity<RecordsState>,
    search_state: Entity<InputState>,
    edit_name_state: Entity<InputState>,
    edit_age_state: Entity<InputState>,
    _subscriptions: Vec<Subscription>,
}

impl RecordsTableView {
    pub fn new(records: Entity<RecordsState>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let mut subscriptions = Vec::new();

        let search_state = cx.new(|cx| {
            InputState::new(window, cx)
                .clean_on_escape()
                .placeholder(i18n_table(cx, "search_placeholder"))
        });
        let edit_name_state = cx.new(|cx| InputState::new(window, cx));
        let edit_age_state = cx.new(|cx| InputState::new(window, cx));

        // Re-render whenever records or view state change
        subscriptions.push(cx.observe(&records, |_, _, cx| cx.notify()));

        subscriptions.push(cx.subscribe(&search_state, |this, state, event, cx| {
            if matches!(event, InputEvent::Change) {
                let term = state.read(cx).value().to_string();
                this.records.update(cx, |records, cx| {
                    records.set_search_term(term);
                    cx.notify();
                });
            }
        }));

        subscriptions.push(cx.subscribe_in(&edit_name_state, window, |this, state, event, _, cx| {
            match event {
                InputEvent::Change => {
                    let name = state.read(cx).value().to_string();
                    this.edit_draft(cx, |draft| draft.name = name);
                }
                InputEvent::PressEnter { .. } => this.confirm_modal(cx),
                _ => {}
            }
        }));
        subscriptions.push(cx.subscribe_in(&edit_age_state, window, |this, state, event, _, cx| {
            match event {
                InputEvent::Change => {
                    let age = state.read(cx).value().to_string();
                    this.edit_draft(cx, |draft| draft.age = age);
                }
                InputEvent::PressEnter { .. } => this.confirm_modal(cx),
                _ => {}
            }
        }));

        let settings = cx.global::<RecordsGlobalStore>().settings();
        subscriptions.push(cx.observe_in(&settings, window, |this, _, window, cx| {
            this.search_state.update(cx, |state, cx| {
                state.set_placeholder(i18n_table(cx, "search_placeholder"), window, cx);
            });
        }));

        Self {
            records,
            search_state,
            edit_name_state,
            edit_age_state,
            _subscriptions: subscriptions,
        }
    }

    // ==================== Actions ====================

    pub fn focus_search(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.search_state.update(cx, |state, cx| state.focus(window, cx));
    }

    fn open_update(&mut self, id: RecordId, window: &mut Window, cx: &mut Context<Self>) {
        let draft = self.records.update(cx, |records, cx| {
            let opened = records.open_update(id);
            cx.notify();
            opened.map(|_| records.modal().update_draft().cloned())
        });

        match draft {
            Ok(Some(draft)) => {
                self.edit_name_state
                    .update(cx, |state, cx| state.set_value(draft.name.clone(), window, cx));
                self.edit_age_state
                    .update(cx, |state, cx| state.set_value(draft.age.clone(), window, cx));
                self.edit_name_state.update(cx, |state, cx| state.focus(window, cx));
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Cannot open update dialog"),
        }
    }

    fn open_delete(&mut self, id: RecordId, cx: &mut Context<Self>) {
        self.records.update(cx, |records, cx| {
            if let Err(e) = records.open_delete(id) {
                warn!(error = %e, "Cannot open delete dialog");
            }
            cx.notify();
        });
    }

    fn copy_record(&mut self, id: RecordId, cx: &mut Context<Self>) {
        self.records.update(cx, |records, cx| {
            if let Err(e) = records.copy_record(id) {
                warn!(error = %e, "Copy failed");
            }
            cx.notify();
        });
    }

    fn edit_draft(&mut self, cx: &mut Context<Self>, edit: impl FnOnce(&mut RecordDraft)) {
        self.records.update(cx, |records, cx| {
            if let Some(draft) = records.edit_draft_mut() {
                edit(draft);
                cx.notify();
            }
        });
    }

    fn confirm_modal(&mut self, cx: &mut Context<Self>) {
        self.records.update(cx, |records, cx| {
            // Validation failures stay visible inside the open modal
            if let Err(e) = records.confirm_modal() {
                warn!(error = %e, "Modal confirmation rejected");
            }
            cx.notify();
        });
    }

    pub fn cancel_modal(&mut self, cx: &mut Context<Self>) {
        self.records.update(cx, |records, cx| {
            if records.modal().is_open() {
                records.cancel_modal();
                cx.notify();
            }
        });
    }

    fn toggle_sort(&mut self, key: SortKey, cx: &mut Context<Self>) {
        self.records.update(cx, |records, cx| {
            records.toggle_sort(key);
            cx.notify();
        });
    }

    fn set_page(&mut self, page: usize, cx: &mut Context<Self>) {
        self.records.update(cx, |records, cx| {
            records.set_page_index(page);
            cx.notify();
        });
    }

    fn set_page_size(&mut self, size: PageSize, cx: &mut Context<Self>) {
        self.records.update(cx, |records, cx| {
            records.set_page_size(size);
            cx.notify();
        });
    }

    // ==================== Rendering ====================

    fn columns(&self, term: SharedString, cx: &mut Context<Self>) -> Vec<Column<VisibleRow>> {
        let view = cx.entity().downgrade();

        vec![
            Column::new("name", i18n_table(cx, "name"), move |row: &VisibleRow, _| {
                HighlightedText::new(row.record.name().to_string(), term.clone()).into_any_element()
            })
            .flex_width(2.0)
            .sortable(SortKey::Name),
            Column::new("age", i18n_table(cx, "age"), |row: &VisibleRow, _| {
                Label::new(row.record.age().to_string()).into_any_element()
            })
            .sortable(SortKey::Age),
            Column::new("gender", i18n_table(cx, "gender"), |row: &VisibleRow, cx| {
                Label::new(i18n_key(cx, row.record.gender().label_key())).into_any_element()
            }),
            Column::new("role", i18n_table(cx, "role"), |row: &VisibleRow, cx| {
                Label::new(i18n_key(cx, row.record.role().label_key())).into_any_element()
            }),
            Column::new("actions", i18n_table(cx, "actions"), move |row: &VisibleRow, cx| {
                Self::render_row_actions(view.clone(), row.id, cx)
            })
            .fixed_width(ACTIONS_COLUMN_WIDTH),
        ]
    }

    fn render_row_actions(view: WeakEntity<Self>, id: RecordId, cx: &App) -> AnyElement {
        let (update_view, delete_view, copy_view) = (view.clone(), view.clone(), view);

        h_flex()
            .gap_1()
            .child(
                Button::new(row_element_id("update-record", id))
                    .small()
                    .ghost()
                    .label(i18n_table(cx, "update"))
                    .on_click(move |_, window, cx| {
                        update_view
                            .update(cx, |this, cx| this.open_update(id, window, cx))
                            .ok();
                    }),
            )
            .child(
                Button::new(row_element_id("delete-record", id))
                    .small()
                    .ghost()
                    .label(i18n_table(cx, "delete"))
                    .on_click(move |_, _, cx| {
                        delete_view.update(cx, |this, cx| this.open_delete(id, cx)).ok();
                    }),
            )
            .child(
                Button::new(row_element_id("copy-record", id))
                    .small()
                    .ghost()
                    .label(i18n_table(cx, "copy"))
                    .on_click(move |_, _, cx| {
                        copy_view.update(cx, |this, cx| this.copy_record(id, cx)).ok();
                    }),
            )
            .into_any_element()
    }

    fn modal_field(label: SharedString, field: impl IntoElement) -> impl IntoElement {
        h_flex()
            .gap_3()
            .items_center()
            .child(div().w(px(MODAL_LABEL_WIDTH)).child(Label::new(label).text_sm()))
            .child(div().flex_1().child(field))
    }

    fn render_update_modal(
        &self,
        draft: &RecordDraft,
        error: Option<&'static str>,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let view = cx.entity().downgrade();
        let (cancel_view, confirm_view) = (view.clone(), view.clone());
        let (gender_view, role_view) = (view.clone(), view);

        let genders = Gender::all()
            .iter()
            .map(|&gender| Choice::new(gender, i18n_key(cx, gender.label_key())))
            .collect();
        let roles = Role::all()
            .iter()
            .map(|&role| Choice::new(role, i18n_key(cx, role.label_key())))
            .collect();

        Modal::new(i18n_dialog(cx, "update_title"))
            .on_close({
                let view = cancel_view.clone();
                move |_, cx| {
                    view.update(cx, |this, cx| this.cancel_modal(cx)).ok();
                }
            })
            .child(Self::modal_field(i18n_form(cx, "name"), Input::new(&self.edit_name_state)))
            .child(Self::modal_field(i18n_form(cx, "age"), Input::new(&self.edit_age_state)))
            .child(Self::modal_field(
                i18n_form(cx, "gender"),
                ChoiceGroup::new("edit-gender", draft.gender)
                    .choices(genders)
                    .on_change(move |gender, _, cx| {
                        gender_view
                            .update(cx, |this, cx| this.edit_draft(cx, |d| d.gender = gender))
                            .ok();
                    }),
            ))
            .child(Self::modal_field(
                i18n_form(cx, "role"),
                ChoiceGroup::new("edit-role", draft.role)
                    .choices(roles)
                    .on_change(move |role, _, cx| {
                        role_view
                            .update(cx, |this, cx| this.edit_draft(cx, |d| d.role = role))
                            .ok();
                    }),
            ))
            .children(error.map(|key| {
                h_flex()
                    .gap_2()
                    .child(Icon::new(IconName::CircleX).small().text_color(cx.theme().danger))
                    .child(Label::new(i18n_key(cx, key)).text_sm().text_color(cx.theme().danger))
            }))
            .footer_child(
                Button::new("update-cancel")
                    .ghost()
                    .label(i18n_common(cx, "cancel"))
                    .on_click(move |_, _, cx| {
                        cancel_view.update(cx, |this, cx| this.cancel_modal(cx)).ok();
                    }),
            )
            .footer_child(
                Button::new("update-confirm")
                    .primary()
                    .label(i18n_dialog(cx, "update_confirm"))
                    .on_click(move |_, _, cx| {
                        confirm_view.update(cx, |this, cx| this.confirm_modal(cx)).ok();
                    }),
            )
    }

    fn render_delete_modal(&self, target: RecordId, cx: &mut Context<Self>) -> impl IntoElement {
        let view = cx.entity().downgrade();
        let (cancel_view, confirm_view) = (view.clone(), view.clone());
        let name = self
            .records
            .read(cx)
            .store()
            .get(target)
            .map(|record| record.name().to_string())
            .unwrap_or_default();

        Modal::new(i18n_dialog(cx, "delete_title"))
            .on_close(move |_, cx| {
                view.update(cx, |this, cx| this.cancel_modal(cx)).ok();
            })
            .child(Label::new(i18n_format(cx, "dialog.delete_message", &[("name", name.as_str())])))
            .footer_child(
                Button::new("delete-cancel")
                    .ghost()
                    .label(i18n_common(cx, "cancel"))
                    .on_click(move |_, _, cx| {
                        cancel_view.update(cx, |this, cx| this.cancel_modal(cx)).ok();
                    }),
            )
            .footer_child(
                Button::new("delete-confirm")
                    .danger()
                    .label(i18n_dialog(cx, "delete_confirm"))
                    .on_click(move |_, _, cx| {
                        confirm_view.update(cx, |this, cx| this.confirm_modal(cx)).ok();
                    }),
            )
    }
}

impl Render for RecordsTableView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let records = self.records.read(cx);
        let derived = records.derived_view();
        let view_state = records.view().clone();
        let modal = records.modal().clone();

        let term: SharedString = view_state.search_term().to_string().into();
        let empty_key = if term.is_empty() { "empty" } else { "no_matches" };
        let (page, pages) = ((derived.page_index + 1).to_string(), derived.page_count.to_string());
        let page_label = i18n_format(
            cx,
            "table.page_of",
            &[("page", page.as_str()), ("pages", pages.as_str())],
        );

        let entity = cx.entity().downgrade();
        let (sort_view, page_view, size_view) = (entity.clone(), entity.clone(), entity);

        let footer = vec![
            Label::new(i18n_table(cx, "total")).into_any_element(),
            Label::new(derived.total_age.to_string()).into_any_element(),
            div().into_any_element(),
            div().into_any_element(),
            div().into_any_element(),
        ];

        let table = DataTable::new("records-table", self.columns(term, cx))
            .rows(derived.rows)
            .sort(view_state.sort())
            .on_sort(move |key, _, cx| {
                sort_view.update(cx, |this, cx| this.toggle_sort(key, cx)).ok();
            })
            .footer(footer)
            .empty_message(i18n_table(cx, empty_key));

        let pagination = Pagination::new(
            derived.page_index,
            derived.page_count,
            derived.total_count,
            view_state.page_size(),
        )
        .items_label(i18n_table(cx, "items"))
        .page_label(page_label)
        .rows_label(i18n_table(cx, "rows_per_page"))
        .on_page_change(move |page, _, cx| {
            page_view.update(cx, |this, cx| this.set_page(page, cx)).ok();
        })
        .on_page_size_change(move |size, _, cx| {
            size_view.update(cx, |this, cx| this.set_page_size(size, cx)).ok();
        });

        let modal = match &modal {
            RecordModal::Closed => None,
            RecordModal::Update { draft, error, .. } => {
                Some(self.render_update_modal(draft, *error, cx).into_any_element())
            }
            RecordModal::Delete { target } => {
                Some(self.render_delete_modal(*target, cx).into_any_element())
            }
        };

        v_flex()
            .w_full()
            .p_4()
            .gap_3()
            .border_1()
            .border_color(cx.theme().border)
            .rounded_md()
            .child(
                h_flex()
                    .justify_between()
                    .items_center()
                    .child(Label::new(i18n_table(cx, "title")).text_lg())
                    .child(
                        div().w(px(280.0)).child(
                            Input::new(&self.search_state)
                                .prefix(Icon::new(IconName::Search).small())
                                .suffix(
                                    Label::new(humanize_keystroke("secondary-f"))
                                        .text_xs()
                                        .text_color(cx.theme().muted_foreground),
                                )
                                .cleanable(true),
                        ),
                    ),
            )
            .child(table)
            .child(pagination)
            .children(modal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_element_ids_stay_distinct_for_large_ids() {
        let low = row_element_id("update-record", RecordId(1));
        let high = row_element_id("update-record", RecordId((1 << 32) + 1));
        assert_ne!(low, high);
        assert_eq!(high, SharedString::from("update-record-4294967297"));
    }
}
