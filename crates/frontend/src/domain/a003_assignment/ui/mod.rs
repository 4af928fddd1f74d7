pub mod assign_obligations;
pub mod assign_responsible;

pub use assign_obligations::AssignObligations;
pub use assign_responsible::AssignResponsible;
