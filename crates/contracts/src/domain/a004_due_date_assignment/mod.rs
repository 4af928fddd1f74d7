pub mod aggregate;
pub mod filter;
pub mod finalize;
pub mod status;

pub use aggregate::{DueDateAssignment, DueDateState, DueDateRef};
pub use filter::{user_options, DueDateFilter, StateFilter};
pub use finalize::{finalize, FinalizeForm, FinalizeOutcome, FinalizeStateRequest};
pub use status::DisplayState;
