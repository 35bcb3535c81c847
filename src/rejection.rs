//! The closed taxonomy of node-side rejection reasons.
//!
//! A rejection is discriminated by its `reason` string alone; the shape of
//! `reason_data` never participates in variant selection. Variant names are
//! the wire strings, so the discriminant enum doubles as the parser for raw
//! reason codes.

/// Reason-specific detail for a rejected broadcast, tagged by the node's
/// `reason` string and carrying the matching `reason_data` payload.
///
/// Variants with no payload tolerate an absent or `null` `reason_data`.
#[derive(
    Debug,
    Clone,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum_macros::EnumDiscriminants,
)]
#[serde(tag = "reason", content = "reason_data")]
#[strum_discriminants(name(ReasonCode))]
#[strum_discriminants(derive(
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::AsRefStr,
    strum_macros::VariantNames
))]
pub enum RejectionKind {
    Serialization(MessageData),
    Deserialization(MessageData),
    SignatureValidation(MessageData),
    BadNonce(BadNonceData),
    ConflictingNonceInMempool(NonceConflictData),
    FeeTooLow(FeeTooLowData),
    NotEnoughFunds(NotEnoughFundsData),
    /// Payload shape is not pinned down by the node; kept verbatim.
    NotEnoughTokenBalance(OpaqueReasonData),
    /// Payload shape is not pinned down by the node; kept verbatim.
    PostConditionFailed(OpaqueReasonData),
    NoSuchContract,
    NoSuchPublicFunction,
    BadFunctionArgument(MessageData),
    ContractAlreadyExists(ContractAlreadyExistsData),
    /// A poison-microblock report whose two headers do not actually conflict.
    PoisonMicroblocksDoNotConflict,
    /// A poison-microblock report signed by a key the node cannot attribute.
    PoisonMicroblockHasUnknownPubKeyHash,
    /// A poison-microblock report that fails its own validity checks.
    PoisonMicroblockIsInvalid,
    BadAddressVersionByte,
    NoCoinbaseViaMempool,
    ServerFailureNoSuchChainTip,
    ServerFailureDatabase(MessageData),
    ServerFailureOther(MessageData),
    /// Catch-all rejection with no structured payload contract.
    ServerRejected(OpaqueReasonData),
}

impl RejectionKind {
    /// The payload-free code identifying this rejection reason.
    pub fn code(&self) -> ReasonCode {
        self.into()
    }
}

/// Payload carrying only a diagnostic message from the node.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MessageData {
    /// Node-produced diagnostic text.
    pub message: String,
}

/// Payload for `BadNonce`: the nonce the node expected versus what it saw.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BadNonceData {
    /// Nonce the node expected for the account.
    pub expected: u64,
    /// Nonce the transaction actually carried.
    pub actual: u64,
    /// Whether the mismatch is on the origin account.
    pub is_origin: bool,
    /// Whether the mismatch is on the (distinct) principal account.
    pub principal: bool,
}

/// Payload for `ConflictingNonceInMempool`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NonceConflictData {
    /// Nonce the node expected for the account.
    pub expected: u64,
    /// Nonce the transaction actually carried.
    pub actual: u64,
}

/// Payload for `FeeTooLow`: the estimated fee versus what was offered.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FeeTooLowData {
    /// Minimum fee the node estimated for the transaction.
    pub expected: u64,
    /// Fee the transaction actually offered.
    pub actual: u64,
}

/// Payload for `NotEnoughFunds`. Balances are decimal strings because they
/// can exceed `u64` on the wire.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NotEnoughFundsData {
    /// Amount in microSTX the transaction required.
    pub expected: String,
    /// Amount in microSTX the account held.
    pub actual: String,
}

/// Payload for `ContractAlreadyExists`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContractAlreadyExistsData {
    /// Fully-qualified identifier of the conflicting contract.
    pub contract_identifier: String,
}

/// Verbatim `reason_data` for reasons with no structured payload contract.
/// Classification normalizes an absent `reason_data` to `null`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct OpaqueReasonData(pub serde_json::Value);
