pub mod create;
pub mod deposit;
pub mod transfer;
pub mod view;
pub mod withdrawal;
