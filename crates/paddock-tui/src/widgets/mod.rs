//! Shared widgets used across screens.

pub mod resource_table;
pub mod toast;
