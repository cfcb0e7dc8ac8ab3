//! Highlighted Text Component
//!
//! Renders a string with every match of a search term marked.

use gpui::{App, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div};
use gpui_component::{ActiveTheme, h_flex};

use crate::domain::highlight::highlight_segments;

#[derive(IntoElement)]
pub struct HighlightedText {
    text: SharedString,
    term: SharedString,
}

impl HighlightedText {
    pub fn new(text: impl Into<SharedString>, term: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            term: term.into(),
        }
    }
}

impl RenderOnce for HighlightedText {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let mark_bg = cx.theme().warning.opacity(0.35);

        h_flex().children(highlight_segments(&self.text, &self.term).into_iter().map(|segment| {
            let piece = div().child(segment.text);
            if segment.matched {
                piece.bg(mark_bg).rounded_sm().font_weight(FontWeight::SEMIBOLD)
            } else {
                piece
            }
        }))
    }
}
