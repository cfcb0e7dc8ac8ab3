//! Internationalization Helpers
//!
//! Provides convenient functions for translating strings based on current locale.

use super::RecordsGlobalStore;
use gpui::{App, SharedString};
use rust_i18n::t;

fn locale(cx: &App) -> &str {
    cx.global::<RecordsGlobalStore>().read(cx).locale()
}

/// Get translated string from "common" namespace
pub fn i18n_common(cx: &App, key: &str) -> SharedString {
    t!(format!("common.{key}"), locale = locale(cx)).into()
}

/// Get translated string from "form" namespace
pub fn i18n_form(cx: &App, key: &str) -> SharedString {
    t!(format!("form.{key}"), locale = locale(cx)).into()
}

/// Get translated string from "table" namespace
pub fn i18n_table(cx: &App, key: &str) -> SharedString {
    t!(format!("table.{key}"), locale = locale(cx)).into()
}

/// Get translated string from "dialog" namespace
pub fn i18n_dialog(cx: &App, key: &str) -> SharedString {
    t!(format!("dialog.{key}"), locale = locale(cx)).into()
}

/// Get translated string from "settings" namespace
pub fn i18n_settings(cx: &App, key: &str) -> SharedString {
    t!(format!("settings.{key}"), locale = locale(cx)).into()
}

/// Translate a fully qualified key, e.g. one returned by `Error::message_key`
pub fn i18n_key(cx: &App, key: &str) -> SharedString {
    t!(key, locale = locale(cx)).into_owned().into()
}

/// Format a translated string with arguments
///
/// # Example
/// ```ignore
/// // With translation `page_of = "Page {page} / {pages}"`
/// i18n_format(cx, "table.page_of", &[("page", "1"), ("pages", "3")])
/// // Returns "Page 1 / 3"
/// ```
pub fn i18n_format(cx: &App, key: &str, args: &[(&str, &str)]) -> SharedString {
    let mut result = t!(key, locale = locale(cx)).to_string();

    for (name, value) in args {
        result = result.replace(&format!("{{{name}}}"), value);
    }

    result.into()
}
