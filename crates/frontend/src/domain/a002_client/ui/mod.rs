pub mod picker;

pub use picker::ClientPicker;
