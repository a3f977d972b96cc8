//! Data model
//!
//! Plain data types shared across components: workspace identifiers,
//! format filters, file list items, and the modal overlay stack.

pub mod file_item;
pub mod format;
pub mod modal;
pub mod workspace;
