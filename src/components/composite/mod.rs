//! Composite Components
//!
//! Larger building blocks assembled from primitives.

pub mod data_table;
pub mod modal;

pub use data_table::{Column, DataTable, Pagination};
pub use modal::Modal;
