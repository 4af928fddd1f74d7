pub mod a001_obligation;
pub mod a002_client;
pub mod a003_assignment;
pub mod a004_due_date_assignment;
pub mod a005_contact;
