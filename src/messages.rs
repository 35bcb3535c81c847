//! User-facing sentences for rejection codes.

use crate::rejection::ReasonCode;

impl ReasonCode {
    /// Human-readable sentence for this rejection code. Total over the
    /// taxonomy, so every classified rejection has a message.
    pub fn friendly_message(self) -> &'static str {
        match self {
            Self::Serialization => "The node was unable to serialize the transaction.",
            Self::Deserialization => "The node could not decode the submitted transaction.",
            Self::SignatureValidation => "The transaction signature is invalid.",
            Self::BadNonce => "The nonce provided is incorrect or has already been used.",
            Self::ConflictingNonceInMempool => {
                "A transaction with this nonce is already waiting in the mempool. Try increasing the nonce."
            }
            Self::FeeTooLow => "The transaction fee is too low for the current network congestion.",
            Self::NotEnoughFunds => "You do not have enough STX to pay for the transaction fees.",
            Self::NotEnoughTokenBalance => {
                "You do not have enough custom tokens to complete this transfer."
            }
            Self::PostConditionFailed => {
                "The transaction failed because a post-condition was not met (e.g., balance protection)."
            }
            Self::NoSuchContract => "The contract you are calling does not exist.",
            Self::NoSuchPublicFunction => {
                "The function you are calling does not exist on this contract."
            }
            Self::BadFunctionArgument => "One of the function arguments is invalid.",
            Self::ContractAlreadyExists => {
                "A contract with this identifier has already been deployed."
            }
            Self::PoisonMicroblocksDoNotConflict => {
                "The reported microblocks do not conflict with each other."
            }
            Self::PoisonMicroblockHasUnknownPubKeyHash => {
                "The reported microblock was signed by an unknown public key."
            }
            Self::PoisonMicroblockIsInvalid => "The reported microblock is invalid.",
            Self::BadAddressVersionByte => {
                "An address in the transaction has the wrong version byte for this network."
            }
            Self::NoCoinbaseViaMempool => {
                "Coinbase transactions cannot be submitted through the mempool."
            }
            Self::ServerFailureNoSuchChainTip => {
                "The node could not find the requested chain tip. Try again shortly."
            }
            Self::ServerFailureDatabase => {
                "The node hit a database error while processing the transaction."
            }
            Self::ServerFailureOther => {
                "The node hit an internal error while processing the transaction."
            }
            Self::ServerRejected => "The node rejected the transaction without a specific reason.",
        }
    }
}

/// Resolve a raw reason code to a user-facing sentence.
///
/// Unknown codes fall back to a sentence embedding the literal code, so the
/// result is never empty and never loses the code.
pub fn friendly_error_message(error_code: &str) -> String {
    match error_code.parse::<ReasonCode>() {
        Ok(code) => code.friendly_message().to_string(),
        Err(_) => format!("An unknown error occurred: {error_code}"),
    }
}
