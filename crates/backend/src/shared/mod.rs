pub mod app_context;
pub mod config;
pub mod error;
pub mod format;
pub mod remote;
pub mod snapshot;
