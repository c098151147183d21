//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: the SQLite user store, built on Diesel.
//!
//! Adapters only translate between domain types and storage
//! representations. They contain no request logic.

pub mod persistence;
