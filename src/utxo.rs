use serde::{Deserialize, Serialize};

/// An unspent transaction output. Convenience type for limited use only;
/// not part of the main transaction response graph.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utxo {
    /// Value in satoshis.
    pub value: i64,
    pub address: String,
}
