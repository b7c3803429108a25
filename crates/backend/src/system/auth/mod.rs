pub mod guard;
pub mod service;
