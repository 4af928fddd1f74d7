//! Shared "próximas a vencer" list: one store, polled while the shell is mounted.

pub mod api;
pub mod store;
pub mod ui;
