//! Application Ports (Driven)
//!
//! Ports define interfaces for the external systems the engine reads from.

mod fee_ledger_port;

#[cfg(test)]
pub use fee_ledger_port::MockFeeLedgerPort;
pub use fee_ledger_port::{FeeLedgerError, FeeLedgerPort, InMemoryFeeLedger};
