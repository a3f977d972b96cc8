//! Services - filesystem access
//!
//! Pure functions with no UI state; components call into these and own
//! the results.

pub mod scan;

pub use scan::{list_subdirectories, scan_directory};
