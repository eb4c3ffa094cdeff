//! Contract bindings for the deployed decentralised bank.
//!
//! The bank contract is an external collaborator: it owns the ledger,
//! balance accounting and access control. This crate only mirrors its
//! interface, generated with alloy's `sol!` macro.

pub mod bank;
