pub mod api_error;
pub mod attachments;
pub mod config;
pub mod dates;
pub mod pagination;
pub mod text_filter;
