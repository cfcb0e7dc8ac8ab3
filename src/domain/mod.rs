//! Domain - Pure Data Structures and the Derived View Pipeline
//!
//! These types don't depend on GPUI and represent the business domain.

pub mod draft;
pub mod highlight;
pub mod pipeline;
pub mod record;
pub mod view;
