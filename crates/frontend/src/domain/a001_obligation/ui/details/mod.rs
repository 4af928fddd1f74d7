//! Obligation editor (create and edit)
//!
//! - view_model.rs: form state, load and save commands
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::ObligationDetails;
pub use view_model::ObligationDetailsViewModel;
