pub mod activity_log;
pub mod catalogs;
pub mod dates;
pub mod document_filter;
pub mod serde_helpers;
pub mod status_catalog;
