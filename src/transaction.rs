use serde::{Deserialize, Serialize};

/// One transaction input.
///
/// Coinbase and spending inputs carry disjoint field sets on the wire, so
/// the variant is untagged and resolved by field presence: an object with a
/// `coinbase` key decodes as [`Input::Coinbase`], anything else as
/// [`Input::Spending`]. Optional fields are omitted when absent, never
/// emitted as null, which keeps the two forms distinguishable in a response
/// body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Input {
    Coinbase {
        /// The coinbase, encoded as hex.
        coinbase: String,
        /// Position of this input within the owning transaction.
        input_index: u32,
        /// Input sequence number.
        sequence: u32,
    },
    Spending {
        /// Transaction id of the output being spent.
        output_hash: String,
        /// Index of that output within its transaction.
        output_index: u32,
        /// Value of the spent output in satoshis.
        value: i64,
        /// Address of the spent output; absent when the script is
        /// non-standard or unspendable.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address: Option<String>,
        /// Hex-encoded signature script; absent for native segwit spends.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        script_signature: Option<String>,
        /// Hex-encoded witness items, in stack order.
        #[serde(
            rename = "txinwitness",
            default,
            skip_serializing_if = "Vec::is_empty"
        )]
        witness: Vec<String>,
        /// Position of this input within the owning transaction.
        input_index: u32,
        /// Input sequence number, used to track replace-by-fee and
        /// locktime signaling.
        sequence: u32,
    },
}

impl Input {
    /// Position of this input within the owning transaction.
    pub fn input_index(&self) -> u32 {
        match self {
            Input::Coinbase { input_index, .. } => *input_index,
            Input::Spending { input_index, .. } => *input_index,
        }
    }

    /// Input sequence number.
    pub fn sequence(&self) -> u32 {
        match self {
            Input::Coinbase { sequence, .. } => *sequence,
            Input::Spending { sequence, .. } => *sequence,
        }
    }

    pub fn is_coinbase(&self) -> bool {
        matches!(self, Input::Coinbase { .. })
    }
}

/// One transaction output.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    /// Uniquely identifies the output within its transaction.
    pub output_index: u32,
    /// Value of the output in satoshis. Zero is a legitimate value
    /// (OP_RETURN outputs) and is always emitted.
    pub value: i64,
    /// Hex-encoded script.
    pub script_hex: String,
    /// Address of the output; absent when the script is non-standard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Minimal reference to the block confirming a transaction. Identifies the
/// block without embedding full block data.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparseBlock {
    pub hash: String,
    pub height: i64,
    /// Serialized block timestamp.
    pub time: String,
}

/// Response body of the get-transaction endpoint.
///
/// Inputs and outputs are kept in on-chain order; that order is significant
/// and survives serialization.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub hash: String,
    /// Timestamp at which the transaction was first seen.
    pub received_at: String,
    pub lock_time: u32,
    /// Total fees in satoshis.
    pub fees: i64,
    /// Number of blocks mined on top of the confirming block.
    pub confirmations: u64,
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
    pub block: SparseBlock,
}
