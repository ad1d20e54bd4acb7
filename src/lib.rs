//! In-memory account ledger: customers, one account each, and an
//! append-only history of deposits, withdrawals and transfers.

pub mod app;
pub mod common;
pub mod domain;
pub mod io;
pub mod worker;
