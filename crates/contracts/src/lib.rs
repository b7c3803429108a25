//! Общие типы и чистая логика трекера документов.
//!
//! Крейт используется и сервером, и клиентом, поэтому здесь нет ни I/O,
//! ни асинхронности: только данные, справочники статусов и фильтрация.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
pub mod usecases;
