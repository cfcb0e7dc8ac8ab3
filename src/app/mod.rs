//! Application Layer
//!
//! App initialization, window management and the workspace root view.

pub mod application;
pub mod workspace;
