//! Shared contracts for the Contable 360 dashboard.
//!
//! Wire DTOs for every backend endpoint plus the pure logic the screens build
//! on (due-date matrix, derived states, filters, pagination, session and
//! notification state machines). Nothing here touches the browser, so the
//! whole crate is tested natively.

pub mod domain;
pub mod shared;
pub mod system;
