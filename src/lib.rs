//! JSON view models returned by a blockchain-explorer HTTP API.
//!
//! These are passive wire shapes: an upstream data source builds them right
//! before they are serialized into a response body, and nothing mutates them
//! afterwards. They deliberately carry plain strings and integers instead of
//! node-internal types so the wire format stays stable.

pub mod transaction;
pub mod utxo;

pub use transaction::{Input, Output, SparseBlock, Transaction};
pub use utxo::Utxo;
