//! State Management Layer
//!
//! Application state held in GPUI entities. Views mutate state through the
//! methods here and notify; the derived view is recomputed on every render:
//!
//! ```text
//! UI Action → State Method → reconcile page → notify → derive_view → UI Refresh
//! ```

mod app;
mod form;
mod i18n;
mod modal;
mod records;
mod store;

pub use app::*;
pub use form::*;
pub use i18n::*;
pub use modal::*;
pub use records::*;
pub use store::*;
