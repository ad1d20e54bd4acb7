pub mod account;
pub mod customer;
pub mod ledger;
pub mod sequence;
pub mod shared;
pub mod transaction;
