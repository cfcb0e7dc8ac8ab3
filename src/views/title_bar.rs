//! Title Bar Component
//!
//! Custom title bar with the settings menu and branding.

use crate::domain::view::PageSize;
use crate::states::{
    LocaleAction, PageSizeAction, RecordsGlobalStore, ThemeAction, i18n_common, i18n_settings,
};
use gpui::{App, Context, Corner, Window, prelude::*};
use gpui_component::{
    IconName, Sizable, ThemeMode, TitleBar,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    menu::{DropdownMenu, PopupMenu},
};

/// Title bar component
pub struct RecordsTitleBar;

impl RecordsTitleBar {
    /// Create a new title bar
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self
    }

    /// Render the settings dropdown menu
    fn render_settings_menu(menu: PopupMenu, _window: &mut Window, cx: &App) -> PopupMenu {
        let settings = cx.global::<RecordsGlobalStore>().read(cx);
        let (locale, theme, page_size) = (settings.locale(), settings.theme(), settings.page_size());

        menu
            // Language section
            .label(i18n_settings(cx, "language"))
            .menu_with_check("中文", locale == "zh", Box::new(LocaleAction::Zh))
            .menu_with_check("English", locale == "en", Box::new(LocaleAction::En))
            .separator()
            // Theme section
            .label(i18n_settings(cx, "theme"))
            .menu_with_check(
                i18n_settings(cx, "light"),
                theme == Some(ThemeMode::Light),
                Box::new(ThemeAction::Light),
            )
            .menu_with_check(
                i18n_settings(cx, "dark"),
                theme == Some(ThemeMode::Dark),
                Box::new(ThemeAction::Dark),
            )
            .menu_with_check(
                i18n_settings(cx, "system"),
                theme.is_none(),
                Box::new(ThemeAction::System),
            )
            .separator()
            // Default rows per page
            .label(i18n_settings(cx, "page_size"))
            .menu_with_check("5", page_size == PageSize::Five, Box::new(PageSizeAction::Five))
            .menu_with_check("10", page_size == PageSize::Ten, Box::new(PageSizeAction::Ten))
            .menu_with_check(
                "25",
                page_size == PageSize::TwentyFive,
                Box::new(PageSizeAction::TwentyFive),
            )
    }
}

impl Render for RecordsTitleBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        TitleBar::new()
            .child(
                h_flex()
                    .flex_1()
                    .items_center()
                    .pl_4()
                    .child(Label::new(i18n_common(cx, "app_title")).text_sm()),
            )
            .child(
                h_flex().items_center().justify_end().px_2().gap_2().mr_2().child(
                    Button::new("settings")
                        .tooltip(i18n_settings(cx, "settings"))
                        .icon(IconName::Settings2)
                        .small()
                        .ghost()
                        .dropdown_menu(move |menu, window, cx| Self::render_settings_menu(menu, window, cx))
                        .anchor(Corner::TopRight),
                ),
            )
    }
}
