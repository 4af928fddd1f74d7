pub mod aggregate;
pub mod due_date_matrix;

pub use aggregate::{
    create_error_message, update_error_message, DueDateEntry, DueDateRecord, Obligation,
    ObligationForm, ObligationPayload,
};
pub use due_date_matrix::{parse_day_input, CellConflict, DueDateMatrix, MatrixBuild};
