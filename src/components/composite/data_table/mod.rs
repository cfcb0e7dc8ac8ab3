//! DataTable Component
//!
//! A table of typed rows with sortable headers, a footer row and pagination.

pub mod column;
pub mod data_table;
pub mod pagination;

pub use column::Column;
pub use data_table::DataTable;
pub use pagination::Pagination;
