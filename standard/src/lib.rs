//! Lets a non-fungible token act as a signer of arbitrary data.
//!
//! A contract holding NFTs answers [`TokenSigner::is_valid_signature`] for a
//! `(token_id, hash)` pair with [`MagicValue::VALID`] if the owner of the
//! token has vouched for the hash, and with any other value otherwise. How
//! consent gets recorded is up to the contract, [`TokenSignatureRecorder`]
//! is the way the reference contract does it.

mod error;
mod events;
mod magic;
mod signer;
mod token_id;

pub use near_sdk::CryptoHash;
pub use tokensig_serde_utils::hex::AsHex;

pub use self::{error::*, events::*, magic::*, signer::*, token_id::*};

/// Digest of the data a token vouches for.
pub type SignatureHash = CryptoHash;
