//! Services over the collections

pub mod backup;
pub mod catalog;
pub mod data;
pub mod integrity;

pub use backup::BackupService;
pub use catalog::Catalog;
pub use data::DataService;
pub use integrity::{IntegrityIssue, IntegrityReport, IntegrityService};
