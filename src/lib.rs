//! # Ethsim - Funded In-Memory Ethereum Backend for Tests
//!
//! A test helper that spins up an in-memory simulated Ethereum chain
//! pre-funded with a configurable number of keypairs, plus a one-call
//! helper to transfer ether between two of them and get the mined receipt
//! back. Everything lives in process memory for the duration of one test
//! run: no ports, no files, no external node.
//!
//! ```no_run
//! use ethsim::{fixture::FundedBackend, transfer::send_value};
//!
//! let mut fixture = FundedBackend::new(2);
//! let sender = fixture.key(0).clone();
//! let receiver = fixture.address_of(1);
//!
//! let receipt = send_value(
//!     fixture.backend_mut(),
//!     &sender,
//!     receiver,
//!     ethsim::constants::eth_to_wei(1),
//! )
//! .unwrap();
//! assert!(receipt.success);
//! ```

pub mod backend;
pub mod cli;
pub mod constants;
pub mod fixture;
pub mod genesis;
pub mod output;
pub mod transfer;
