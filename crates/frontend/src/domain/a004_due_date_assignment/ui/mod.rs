pub mod finalize;
pub mod list;
