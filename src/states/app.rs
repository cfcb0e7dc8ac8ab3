//! Application State
//!
//! Persisted user settings (theme, locale, rows per page, window bounds) and
//! the global store that hands out the shared entities.

use crate::domain::view::PageSize;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::states::RecordsState;
use gpui::{Action, App, AppContext, Bounds, Context, Entity, Global, Pixels};
use gpui_component::ThemeMode;
use locale_config::Locale;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

// ==================== Actions ====================

/// Theme selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ThemeAction {
    Light,
    Dark,
    System,
}

/// Locale selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    En,
    Zh,
}

/// Default rows-per-page action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum PageSizeAction {
    Five,
    Ten,
    TwentyFive,
}

impl From<PageSizeAction> for PageSize {
    fn from(action: PageSizeAction) -> Self {
        match action {
            PageSizeAction::Five => PageSize::Five,
            PageSizeAction::Ten => PageSize::Ten,
            PageSizeAction::TwentyFive => PageSize::TwentyFive,
        }
    }
}

// ==================== Persisted State ====================

const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";
const SETTINGS_FILE: &str = "record-desk.toml";

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(SETTINGS_FILE);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Persisted application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    locale: Option<String>,
    theme: Option<String>,
    page_size: Option<PageSize>,
    bounds: Option<Bounds<Pixels>>,
}

impl AppSettings {
    /// Load settings from the config file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading settings file");
        let value = std::fs::read_to_string(&path)?;

        let mut settings = Self::parse(&value).inspect_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse settings file");
        })?;

        // Detect system locale if not set
        if settings.locale.as_ref().is_none_or(|l| l.is_empty()) {
            if let Some((lang, _)) = Locale::current().to_string().split_once('-') {
                settings.locale = Some(lang.to_string());
            }
        }

        Ok(settings)
    }

    /// Parse the TOML body of a settings file; blank input yields defaults
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }

    // ==================== Getters ====================

    pub fn bounds(&self) -> Option<&Bounds<Pixels>> {
        self.bounds.as_ref()
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        match self.theme.as_deref() {
            Some(LIGHT_THEME_MODE) => Some(ThemeMode::Light),
            Some(DARK_THEME_MODE) => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    /// Two-letter locale used for translations
    pub fn locale(&self) -> &str {
        match self.locale.as_deref() {
            Some("zh") => "zh",
            _ => "en",
        }
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size.unwrap_or_default()
    }

    // ==================== Setters ====================

    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = Some(bounds);
    }

    pub fn set_theme(&mut self, theme: Option<ThemeMode>) {
        self.theme = match theme {
            Some(ThemeMode::Light) => Some(LIGHT_THEME_MODE.to_string()),
            Some(ThemeMode::Dark) => Some(DARK_THEME_MODE.to_string()),
            _ => None,
        };
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = Some(locale.into());
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = Some(page_size);
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<RecordsGlobalStore>()`
#[derive(Clone)]
pub struct RecordsGlobalStore {
    settings: Entity<AppSettings>,
    records: Entity<RecordsState>,
}

impl RecordsGlobalStore {
    pub fn new(settings: Entity<AppSettings>, records: Entity<RecordsState>) -> Self {
        Self { settings, records }
    }

    pub fn settings(&self) -> Entity<AppSettings> {
        self.settings.clone()
    }

    pub fn records(&self) -> Entity<RecordsState> {
        self.records.clone()
    }

    /// Read settings
    pub fn read<'a>(&self, cx: &'a App) -> &'a AppSettings {
        self.settings.read(cx)
    }

    /// Update settings
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut AppSettings, &mut Context<AppSettings>) -> R,
    ) -> C::Result<R> {
        self.settings.update(cx, update)
    }
}

impl Global for RecordsGlobalStore {}

// ==================== Persistence ====================

/// Save settings to disk
pub fn save_settings(settings: &AppSettings) -> Result<()> {
    let path = get_config_path()?;
    let value = toml::to_string(settings)?;
    std::fs::write(path, value)?;
    Ok(())
}

/// Update settings and save them to disk in the background
pub fn update_settings_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut AppSettings, &App) + Send + 'static,
{
    let store = cx.global::<RecordsGlobalStore>().clone();

    cx.spawn(async move |cx| {
        let current = store.update(cx, |settings, cx| {
            mutation(settings, cx);
            cx.notify();
            settings.clone()
        });

        if let Ok(settings) = current {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_settings(&settings) {
                        error!(error = %e, action = action_name, "Failed to save settings");
                    } else {
                        info!(action = action_name, "Settings saved");
                    }
                })
                .await;
        }

        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_file_yields_defaults() {
        let settings = AppSettings::parse("  \n").expect("blank parses");
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.page_size(), PageSize::Five);
        assert_eq!(settings.locale(), "en");
        assert_eq!(settings.theme(), None);
    }

    #[test]
    fn reads_known_fields() {
        let settings = AppSettings::parse(
            r#"
locale = "zh"
theme = "dark"
page_size = 25
"#,
        )
        .expect("valid settings");
        assert_eq!(settings.locale(), "zh");
        assert_eq!(settings.theme(), Some(ThemeMode::Dark));
        assert_eq!(settings.page_size(), PageSize::TwentyFive);
    }

    #[test]
    fn rejects_unsupported_page_size() {
        assert!(AppSettings::parse("page_size = 7").is_err());
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        let mut settings = AppSettings::default();
        settings.set_locale("fr");
        assert_eq!(settings.locale(), "en");
        settings.set_theme(Some(ThemeMode::Light));
        assert_eq!(settings.theme(), Some(ThemeMode::Light));
    }
}
