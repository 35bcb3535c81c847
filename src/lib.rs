#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod classify;
pub mod error;
pub mod messages;
pub mod outcome;
pub mod rejection;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use classify::{classify, classify_json};
pub use error::Error;
pub use messages::friendly_error_message;
pub use outcome::{BroadcastResult, Rejection};
pub use rejection::{
    BadNonceData, ContractAlreadyExistsData, FeeTooLowData, MessageData, NonceConflictData,
    NotEnoughFundsData, OpaqueReasonData, ReasonCode, RejectionKind,
};
