//! Choice Group Component
//!
//! A row of radio-style options with exactly one selected.

use std::rc::Rc;

use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::{ActiveTheme, h_flex};

/// One selectable option
#[derive(Debug, Clone)]
pub struct Choice<T> {
    pub value: T,
    pub label: SharedString,
}

impl<T> Choice<T> {
    pub fn new(value: T, label: impl Into<SharedString>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

type ChangeHandler<T> = Rc<dyn Fn(T, &mut Window, &mut App) + 'static>;

/// A radio group component
#[derive(IntoElement)]
pub struct ChoiceGroup<T: Copy + PartialEq + 'static> {
    id: ElementId,
    selected: T,
    choices: Vec<Choice<T>>,
    on_change: Option<ChangeHandler<T>>,
}

impl<T: Copy + PartialEq + 'static> ChoiceGroup<T> {
    /// Create a new group with `selected` checked
    pub fn new(id: impl Into<ElementId>, selected: T) -> Self {
        Self {
            id: id.into(),
            selected,
            choices: Vec::new(),
            on_change: None,
        }
    }

    /// Set the options
    pub fn choices(mut self, choices: Vec<Choice<T>>) -> Self {
        self.choices = choices;
        self
    }

    /// Set the change handler
    pub fn on_change(mut self, handler: impl Fn(T, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }
}

impl<T: Copy + PartialEq + 'static> RenderOnce for ChoiceGroup<T> {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let (accent, border, fg) = (theme.primary, theme.input, theme.foreground);

        h_flex()
            .id(self.id)
            .gap_4()
            .children(self.choices.into_iter().enumerate().map(|(ix, choice)| {
                let checked = choice.value == self.selected;
                let on_change = self.on_change.clone();

                div()
                    .id(ix)
                    .flex()
                    .items_center()
                    .gap_2()
                    .cursor_pointer()
                    .child(
                        div()
                            .size(px(16.0))
                            .rounded_full()
                            .border_1()
                            .border_color(if checked { accent } else { border })
                            .flex()
                            .items_center()
                            .justify_center()
                            .when(checked, |dot| {
                                dot.child(div().size(px(8.0)).rounded_full().bg(accent))
                            }),
                    )
                    .child(div().text_sm().text_color(fg).child(choice.label))
                    .when_some(on_change.filter(|_| !checked), |el, handler| {
                        let value = choice.value;
                        el.on_click(move |_, window, cx| handler(value, window, cx))
                    })
            }))
    }
}
