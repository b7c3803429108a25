pub mod a001_document;
pub mod a002_staff;
pub mod catalogs;
pub mod dashboards;
pub mod u501_import_documents;
