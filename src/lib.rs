pub mod command;
pub mod config;
pub mod constants;
pub mod container;
pub mod dispatcher;
pub mod errors;
pub mod inventory;
pub mod machine_ledger;
pub mod recipe;
pub mod shared_machine;
pub mod statistics;
