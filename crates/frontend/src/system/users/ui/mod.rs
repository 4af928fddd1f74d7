pub mod picker;

pub use picker::UserPicker;
