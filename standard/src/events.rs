use near_sdk::{AccountId, near};
use tokensig_serde_utils::hex::AsHex;

use crate::{SignatureHash, TokenId};

pub const TOKENSIG_STANDARD: &str = "tokensig";

/// [NEP-297](https://nomicon.io/Standards/EventsFormat) events
#[must_use = "make sure to `.emit()` this event"]
#[near(event_json(standard = "tokensig"))]
#[derive(Debug, Clone)]
pub enum TokenSignerEvent {
    #[event_version("1.0.0")]
    NftSign(SignatureEvent),

    #[event_version("1.0.0")]
    NftRevokeSignature(SignatureEvent),
}

#[near(serializers = [json])]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureEvent {
    /// Owner of the token at the time of the call
    pub owner_id: AccountId,
    pub token_id: TokenId,
    pub hash: AsHex<SignatureHash>,
}
