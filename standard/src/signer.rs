use near_sdk::ext_contract;
use tokensig_serde_utils::hex::AsHex;

use crate::{MagicValue, SignatureHash, TokenId};

/// Contracts whose tokens can act as signers.
#[ext_contract(ext_token_signer)]
pub trait TokenSigner {
    /// Returns [`MagicValue::VALID`] if the token `token_id` has vouched for
    /// `hash`, and [`MagicValue::INVALID`] otherwise, including when the
    /// token doesn't exist.
    ///
    /// MUST NOT modify state and MUST be callable by anyone, including
    /// other contracts.
    fn is_valid_signature(&self, token_id: TokenId, hash: AsHex<SignatureHash>) -> MagicValue;
}

/// Consent marking used by the reference contract. Other contracts may
/// record consent in any other way.
///
/// Consent is bound to the token, not to its owner: a transfer doesn't
/// revoke it. The new owner can revoke it explicitly.
#[ext_contract(ext_token_signature_recorder)]
pub trait TokenSignatureRecorder {
    /// Records that the token vouches for `hash`. Only the current owner of
    /// the token can call this.
    ///
    /// Returns `false` if consent had already been recorded.
    ///
    /// NOTE: MUST attach at least 1 yⓃ, and enough to cover storage of the
    /// new record. The rest is refunded to the caller.
    fn nft_sign(&mut self, token_id: TokenId, hash: AsHex<SignatureHash>) -> bool;

    /// Withdraws consent for `hash`, whoever recorded it. Only the current
    /// owner of the token can call this.
    ///
    /// Returns `false` if there was no consent to withdraw. Storage
    /// released by the record is refunded to the caller.
    ///
    /// NOTE: MUST attach 1 yⓃ for security purposes.
    fn nft_revoke_signature(&mut self, token_id: TokenId, hash: AsHex<SignatureHash>) -> bool;
}
