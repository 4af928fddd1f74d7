//! Generic modal picker (clients, users).
//!
//! The item type implements `AggregatePickerResult` + `TableDisplayable` for the
//! table and `Searchable` for the filter box:
//!
//! ```rust,ignore
//! view! {
//!     <GenericAggregatePicker
//!         items=clients
//!         title="Seleccionar Cliente".to_string()
//!         on_confirm=Callback::new(move |c: Option<Client>| { /* ... */ })
//!         on_cancel=Callback::new(move |_| handle.close())
//!     />
//! }
//! ```

pub mod component;
pub mod traits;

pub use component::GenericAggregatePicker;
pub use traits::{AggregatePickerResult, TableDisplayable};
