//! Bulk load of obligations from an Excel workbook; the backend parses the file.

pub mod api;
mod view;

pub use view::ImportObligations;
