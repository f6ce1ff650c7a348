//! CLI library for testing purposes

pub mod scan;
pub mod update;

pub use scan::run_scan;
pub use update::run_update;
