pub mod details;
pub mod due_date_grid;
pub mod due_date_viewer;
pub mod list;
