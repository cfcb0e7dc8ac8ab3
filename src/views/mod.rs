//! View Components
//!
//! GPUI views of the Record Desk window.

mod entry_form;
mod records_table;
mod title_bar;

pub use entry_form::*;
pub use records_table::*;
pub use title_bar::*;
