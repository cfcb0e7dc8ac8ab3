//! Primitive Components
//!
//! Basic building blocks not covered by gpui-component.

pub mod choice_group;
pub mod highlighted_text;

pub use choice_group::{Choice, ChoiceGroup};
pub use highlighted_text::HighlightedText;
