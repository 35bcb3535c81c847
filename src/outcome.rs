//! Classified outcome of a transaction broadcast.

use crate::rejection::{ReasonCode, RejectionKind};

/// Outcome of submitting a signed transaction to a node.
///
/// Serializes back to the node's wire shape: accepted results as a bare
/// `{"txid": ..}` object, rejections with their flattened `reason` and
/// `reason_data` fields.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum BroadcastResult {
    /// The node admitted the transaction to its mempool. Admission is not
    /// confirmation; the transaction may still be dropped or replaced.
    Accepted {
        /// Identifier of the accepted transaction.
        txid: String,
    },
    /// The node refused the transaction.
    Rejected(Rejection),
}

/// A rejected broadcast: the fields every rejection carries plus the
/// reason-specific detail.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Rejection {
    /// Top-level error label from the node (e.g. `"transaction rejected"`).
    pub error: String,
    /// Identifier the transaction would have had. It never entered the chain.
    pub txid: String,
    /// Discriminated reason and payload.
    #[serde(flatten)]
    pub kind: RejectionKind,
}

impl Rejection {
    /// The payload-free code for this rejection's reason.
    pub fn code(&self) -> ReasonCode {
        self.kind.code()
    }

    /// Human-readable sentence describing this rejection.
    pub fn friendly_message(&self) -> &'static str {
        self.code().friendly_message()
    }
}

impl BroadcastResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// The rejection code, or `None` for an accepted result.
    pub fn reason(&self) -> Option<ReasonCode> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected(rejection) => Some(rejection.code()),
        }
    }

    /// Transaction id reported by the node. Present on both outcomes; for a
    /// rejection it names a transaction that never entered the chain.
    pub fn txid(&self) -> &str {
        match self {
            Self::Accepted { txid } => txid,
            Self::Rejected(rejection) => &rejection.txid,
        }
    }

    pub fn is_serialization(&self) -> bool {
        self.reason() == Some(ReasonCode::Serialization)
    }

    pub fn is_deserialization(&self) -> bool {
        self.reason() == Some(ReasonCode::Deserialization)
    }

    pub fn is_signature_validation(&self) -> bool {
        self.reason() == Some(ReasonCode::SignatureValidation)
    }

    pub fn is_bad_nonce(&self) -> bool {
        self.reason() == Some(ReasonCode::BadNonce)
    }

    pub fn is_conflicting_nonce_in_mempool(&self) -> bool {
        self.reason() == Some(ReasonCode::ConflictingNonceInMempool)
    }

    pub fn is_fee_too_low(&self) -> bool {
        self.reason() == Some(ReasonCode::FeeTooLow)
    }

    pub fn is_not_enough_funds(&self) -> bool {
        self.reason() == Some(ReasonCode::NotEnoughFunds)
    }

    pub fn is_not_enough_token_balance(&self) -> bool {
        self.reason() == Some(ReasonCode::NotEnoughTokenBalance)
    }

    pub fn is_post_condition_failed(&self) -> bool {
        self.reason() == Some(ReasonCode::PostConditionFailed)
    }

    pub fn is_no_such_contract(&self) -> bool {
        self.reason() == Some(ReasonCode::NoSuchContract)
    }

    pub fn is_no_such_public_function(&self) -> bool {
        self.reason() == Some(ReasonCode::NoSuchPublicFunction)
    }

    pub fn is_bad_function_argument(&self) -> bool {
        self.reason() == Some(ReasonCode::BadFunctionArgument)
    }

    pub fn is_contract_already_exists(&self) -> bool {
        self.reason() == Some(ReasonCode::ContractAlreadyExists)
    }

    pub fn is_poison_microblocks_do_not_conflict(&self) -> bool {
        self.reason() == Some(ReasonCode::PoisonMicroblocksDoNotConflict)
    }

    pub fn is_poison_microblock_has_unknown_pub_key_hash(&self) -> bool {
        self.reason() == Some(ReasonCode::PoisonMicroblockHasUnknownPubKeyHash)
    }

    pub fn is_poison_microblock_is_invalid(&self) -> bool {
        self.reason() == Some(ReasonCode::PoisonMicroblockIsInvalid)
    }

    pub fn is_bad_address_version_byte(&self) -> bool {
        self.reason() == Some(ReasonCode::BadAddressVersionByte)
    }

    pub fn is_no_coinbase_via_mempool(&self) -> bool {
        self.reason() == Some(ReasonCode::NoCoinbaseViaMempool)
    }

    pub fn is_server_failure_no_such_chain_tip(&self) -> bool {
        self.reason() == Some(ReasonCode::ServerFailureNoSuchChainTip)
    }

    pub fn is_server_failure_database(&self) -> bool {
        self.reason() == Some(ReasonCode::ServerFailureDatabase)
    }

    pub fn is_server_failure_other(&self) -> bool {
        self.reason() == Some(ReasonCode::ServerFailureOther)
    }

    pub fn is_server_rejected(&self) -> bool {
        self.reason() == Some(ReasonCode::ServerRejected)
    }
}
