//! Entry Form View
//!
//! Name and age inputs, a gender select and a role radio group. A rejected
//! submission opens a blocking alert and keeps the input.

use crate::components::composite::Modal;
use crate::components::primitives::{Choice, ChoiceGroup};
use crate::domain::record::{Gender, Role};
use crate::states::{
    EntryForm, RecordsGlobalStore, RecordsState, i18n_common, i18n_dialog, i18n_form, i18n_key,
};
use gpui::{
    Action, App, Context, Corner, Entity, FocusHandle, Focusable, Subscription, Window, div,
    prelude::*, px,
};
use gpui_component::{
    ActiveTheme, IconName,
    button::{Button, ButtonVariants, DropdownButton},
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
    v_flex,
};
use schemars::JsonSchema;
use serde::Deserialize;

const FIELD_LABEL_WIDTH: f32 = 72.0;

#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
enum GenderChoice {
    Male,
    Female,
}

impl From<GenderChoice> for Gender {
    fn from(choice: GenderChoice) -> Self {
        match choice {
            GenderChoice::Male => Gender::Male,
            GenderChoice::Female => Gender::Female,
        }
    }
}

/// Form for adding records
pub struct EntryFormView {
    form: EntryForm,
    records: Entity<RecordsState>,
    name_state: Entity<InputState>,
    age_state: Entity<InputState>,
    /// Translation key of the blocking validation alert
    alert: Option<&'static str>,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl EntryFormView {
    pub fn new(records: Entity<RecordsState>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let mut subscriptions = Vec::new();

        let name_state = cx.new(|cx| {
            InputState::new(window, cx).placeholder(i18n_form(cx, "name_placeholder"))
        });
        let age_state = cx.new(|cx| {
            InputState::new(window, cx).placeholder(i18n_form(cx, "age_placeholder"))
        });

        subscriptions.push(cx.subscribe_in(&name_state, window, |this, state, event, window, cx| {
            match event {
                InputEvent::Change => {
                    let value = state.read(cx).value();
                    this.form.set_name(value.to_string());
                }
                InputEvent::PressEnter { .. } => this.submit(window, cx),
                _ => {}
            }
        }));
        subscriptions.push(cx.subscribe_in(&age_state, window, |this, state, event, window, cx| {
            match event {
                InputEvent::Change => {
                    let value = state.read(cx).value();
                    this.form.set_age(value.to_string());
                }
                InputEvent::PressEnter { .. } => this.submit(window, cx),
                _ => {}
            }
        }));

        // Placeholders follow the locale
        let settings = cx.global::<RecordsGlobalStore>().settings();
        subscriptions.push(cx.observe_in(&settings, window, |this, _, window, cx| {
            this.name_state.update(cx, |state, cx| {
                state.set_placeholder(i18n_form(cx, "name_placeholder"), window, cx);
            });
            this.age_state.update(cx, |state, cx| {
                state.set_placeholder(i18n_form(cx, "age_placeholder"), window, cx);
            });
        }));

        name_state.update(cx, |state, cx| state.focus(window, cx));

        Self {
            form: EntryForm::new(),
            records,
            name_state,
            age_state,
            alert: None,
            focus_handle: cx.focus_handle(),
            _subscriptions: subscriptions,
        }
    }

    /// Validate the draft and append it to the store
    fn submit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        match self.form.submit() {
            Ok(record) => {
                self.records.update(cx, |state, cx| {
                    state.append_record(record);
                    cx.notify();
                });
                for input in [&self.name_state, &self.age_state] {
                    input.update(cx, |state, cx| state.set_value("", window, cx));
                }
                self.name_state.update(cx, |state, cx| state.focus(window, cx));
            }
            Err(e) => {
                self.alert = Some(e.message_key());
            }
        }
        cx.notify();
    }

    /// Close the validation alert, if open
    pub fn dismiss_alert(&mut self, cx: &mut Context<Self>) {
        if self.alert.take().is_some() {
            cx.notify();
        }
    }

    fn render_field(label: impl IntoElement, field: impl IntoElement) -> impl IntoElement {
        h_flex()
            .gap_3()
            .items_center()
            .child(div().w(px(FIELD_LABEL_WIDTH)).child(label))
            .child(div().flex_1().child(field))
    }

    fn render_gender_select(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let gender = self.form.draft().gender;
        let male = i18n_key(cx, Gender::Male.label_key());
        let female = i18n_key(cx, Gender::Female.label_key());
        let current = if gender == Gender::Male { male.clone() } else { female.clone() };

        DropdownButton::new("gender-select")
            .button(Button::new("gender-select-btn").label(current))
            .dropdown_menu_with_anchor(Corner::TopLeft, move |menu, _, _| {
                menu.menu_with_check(male.clone(), gender == Gender::Male, Box::new(GenderChoice::Male))
                    .menu_with_check(
                        female.clone(),
                        gender == Gender::Female,
                        Box::new(GenderChoice::Female),
                    )
            })
    }

    fn render_role_group(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let view = cx.entity().downgrade();
        let choices = Role::all()
            .iter()
            .map(|&role| Choice::new(role, i18n_key(cx, role.label_key())))
            .collect();

        ChoiceGroup::new("role-group", self.form.draft().role)
            .choices(choices)
            .on_change(move |role, _, cx| {
                view.update(cx, |this, cx| {
                    this.form.set_role(role);
                    cx.notify();
                })
                .ok();
            })
    }

    fn render_alert(&self, key: &'static str, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let view = cx.entity().downgrade();
        let close = move |_: &mut Window, cx: &mut App| {
            view.update(cx, |this, cx| this.dismiss_alert(cx)).ok();
        };
        let ok = close.clone();

        Modal::new(i18n_dialog(cx, "validation_title"))
            .width(360.0)
            .on_close(close)
            .child(Label::new(i18n_key(cx, key)))
            .footer_child(
                Button::new("alert-ok")
                    .primary()
                    .label(i18n_common(cx, "ok"))
                    .on_click(move |_, window, cx| ok(window, cx)),
            )
    }
}

impl Focusable for EntryFormView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for EntryFormView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let alert = self.alert.map(|key| self.render_alert(key, cx));

        v_flex()
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(|this, choice: &GenderChoice, _window, cx| {
                this.form.set_gender((*choice).into());
                cx.notify();
            }))
            .w_full()
            .p_4()
            .gap_3()
            .border_1()
            .border_color(cx.theme().border)
            .rounded_md()
            .child(Label::new(i18n_form(cx, "title")).text_lg())
            .child(Self::render_field(
                Label::new(i18n_form(cx, "name")).text_sm(),
                Input::new(&self.name_state).cleanable(true),
            ))
            .child(Self::render_field(
                Label::new(i18n_form(cx, "age")).text_sm(),
                Input::new(&self.age_state).cleanable(true),
            ))
            .child(Self::render_field(
                Label::new(i18n_form(cx, "gender")).text_sm(),
                self.render_gender_select(cx),
            ))
            .child(Self::render_field(
                Label::new(i18n_form(cx, "role")).text_sm(),
                self.render_role_group(cx),
            ))
            .child(
                h_flex().justify_end().child(
                    Button::new("submit-record")
                        .primary()
                        .icon(IconName::Plus)
                        .label(i18n_form(cx, "submit"))
                        .on_click(cx.listener(|this, _, window, cx| this.submit(window, cx))),
                ),
            )
            .children(alert)
    }
}
