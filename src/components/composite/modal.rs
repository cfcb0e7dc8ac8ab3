//! Modal Component
//!
//! A blocking dialog drawn over the whole window. Clicks never reach the
//! content underneath; the backdrop itself does not dismiss.

use gpui::{
    AnyElement, App, ClickEvent, FontWeight, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, Styled, Window, anchored, deferred, div, point, prelude::*, px,
};
use gpui_component::{
    ActiveTheme, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};

type CloseHandler = Box<dyn Fn(&mut Window, &mut App) + 'static>;

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    children: Vec<AnyElement>,
    footer: Vec<AnyElement>,
    on_close: Option<CloseHandler>,
    width: f32,
}

impl Modal {
    /// Create a new modal
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
            footer: Vec::new(),
            on_close: None,
            width: 420.0,
        }
    }

    /// Add a child element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Add a footer element, laid out right-aligned
    pub fn footer_child(mut self, child: impl IntoElement) -> Self {
        self.footer.push(child.into_any_element());
        self
    }

    /// Set the close handler; shows the close button
    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }

    /// Set the dialog width in pixels
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}

impl ParentElement for Modal {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Modal {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let viewport = window.viewport_size();

        let header = h_flex()
            .px_5()
            .py_3()
            .justify_between()
            .border_b_1()
            .border_color(cx.theme().border)
            .child(Label::new(self.title).font_weight(FontWeight::SEMIBOLD))
            .when_some(self.on_close, |el, handler| {
                el.child(
                    Button::new("modal-close")
                        .icon(IconName::Close)
                        .ghost()
                        .xsmall()
                        .on_click(move |_: &ClickEvent, window, cx| handler(window, cx)),
                )
            });

        let dialog = v_flex()
            .w(px(self.width))
            .bg(cx.theme().background)
            .border_1()
            .border_color(cx.theme().border)
            .rounded_lg()
            .shadow_lg()
            .child(header)
            .child(v_flex().px_5().py_4().gap_3().children(self.children))
            .when(!self.footer.is_empty(), |el| {
                el.child(
                    h_flex()
                        .px_5()
                        .py_3()
                        .gap_2()
                        .justify_end()
                        .border_t_1()
                        .border_color(cx.theme().border)
                        .children(self.footer),
                )
            });

        // Backdrop
        deferred(
            anchored().position(point(px(0.0), px(0.0))).child(
                div()
                    .id("modal-backdrop")
                    .occlude()
                    .w(viewport.width)
                    .h(viewport.height)
                    .bg(gpui::rgba(0x00000088))
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(dialog),
            ),
        )
        .with_priority(1)
    }
}
