//! Configuration types for the bank session client.
//!
//! This crate provides:
//! - Per-network deployment parameters (chain id, bank contract address)
//! - Asset precision used for amount conversion
//! - A builder for overriding a deployment address

pub mod network;

pub use network::{BankConfig, BankConfigBuilder, NetworkType};
