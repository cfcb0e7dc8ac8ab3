//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    AnyView, App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds,
    WindowOptions, px, size,
};
use gpui_component::{Root, Theme, ThemeMode};
use tracing::{error, info};

use crate::app::workspace::Workspace;
use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::domain::record::seed_records;
use crate::helpers::{MenuAction, new_key_bindings};
use crate::states::{
    AppSettings, LocaleAction, PageSizeAction, RecordsGlobalStore, RecordsState, ThemeAction,
    i18n_common, save_settings, update_settings_and_save,
};

fn apply_theme(mode: Option<ThemeMode>, cx: &mut App) {
    match mode {
        Some(mode) => Theme::change(mode, None, cx),
        None => Theme::sync_system_appearance(None, cx),
    }
}

/// Register handlers for the title bar settings menu
fn register_settings_actions(cx: &mut App) {
    cx.on_action(|action: &ThemeAction, cx: &mut App| {
        let mode = match action {
            ThemeAction::Light => Some(ThemeMode::Light),
            ThemeAction::Dark => Some(ThemeMode::Dark),
            ThemeAction::System => None,
        };
        apply_theme(mode, cx);
        update_settings_and_save(cx, "theme", move |settings, _| settings.set_theme(mode));
    });

    cx.on_action(|action: &LocaleAction, cx: &mut App| {
        let locale = match action {
            LocaleAction::En => "en",
            LocaleAction::Zh => "zh",
        };
        update_settings_and_save(cx, "locale", move |settings, _| settings.set_locale(locale));
    });

    cx.on_action(|action: &PageSizeAction, cx: &mut App| {
        let page_size = (*action).into();
        let records = cx.global::<RecordsGlobalStore>().records();
        records.update(cx, |state, cx| {
            state.set_page_size(page_size);
            cx.notify();
        });
        update_settings_and_save(cx, "page_size", move |settings, _| {
            settings.set_page_size(page_size)
        });
    });
}

/// Run the application
pub fn run_app() {
    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(|cx: &mut App| {
            gpui_component::init(cx);
            cx.bind_keys(new_key_bindings());

            cx.on_action(|action: &MenuAction, cx: &mut App| match action {
                MenuAction::Quit => cx.quit(),
            });

            // Quit the app when all windows are closed
            cx.on_window_closed(|cx| {
                if cx.windows().is_empty() {
                    cx.quit();
                }
            })
            .detach();

            let settings = AppSettings::try_load().unwrap_or_else(|e| {
                error!(error = %e, "Falling back to default settings");
                AppSettings::default()
            });
            apply_theme(settings.theme(), cx);

            let records = cx.new(|_| RecordsState::new(seed_records(), settings.page_size()));
            let window_bounds = settings.bounds().cloned();
            let settings = cx.new(|_| settings);
            cx.set_global(RecordsGlobalStore::new(settings, records.clone()));
            register_settings_actions(cx);

            let bounds = window_bounds.unwrap_or_else(|| {
                Bounds::centered(None, size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)), cx)
            });
            let window_options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
                titlebar: Some(TitlebarOptions {
                    title: Some(i18n_common(cx, "app_title")),
                    appears_transparent: true,
                    traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
                }),
                ..Default::default()
            };

            let opened = cx.open_window(window_options, |window, cx| {
                // Remember the window position for the next launch
                window.on_window_should_close(cx, |window, cx| {
                    let bounds = window.bounds();
                    let store = cx.global::<RecordsGlobalStore>().clone();
                    let settings = store.update(cx, |settings, _| {
                        settings.set_bounds(bounds);
                        settings.clone()
                    });
                    if let Err(e) = save_settings(&settings) {
                        error!(error = %e, "Failed to save window bounds");
                    }
                    true
                });

                let workspace = cx.new(|cx| Workspace::new(records, window, cx));
                cx.new(|cx| Root::new(AnyView::from(workspace), window, cx))
            });

            match opened {
                Ok(_) => info!("Main window opened"),
                Err(e) => {
                    error!(error = %e, "Failed to open main window");
                    cx.quit();
                }
            }

            cx.activate(true);
        });
}
