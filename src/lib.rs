//! Record Desk Library
//!
//! A desktop CRUD table: an entry form adds records, and a table lists,
//! searches, sorts, paginates, updates, copies and deletes them. The `domain`
//! and `states` layers hold all behavior and run without a window.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod states;
pub mod views;
