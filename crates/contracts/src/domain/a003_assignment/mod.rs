pub mod aggregate;
pub mod selection;

pub use aggregate::{AssignObligationsRequest, AssignedObligation, Assignment};
pub use selection::ObligationSelection;
