use near_contract_standards::non_fungible_token::{
    self, assert_at_least_one_yocto, refund_deposit,
};
use near_sdk::{AccountId, Promise, assert_one_yocto, env, near};
use tokensig_near_utils::UnwrapOrPanic;
use tokensig_standard::{
    AsHex, MagicValue, Result, SignatureEvent, SignatureHash, TokenId, TokenSignatureRecorder,
    TokenSigner, TokenSignerError, TokenSignerEvent,
};

use super::{Contract, ContractExt};

/// Consent of a token for a hash
#[near(serializers = [borsh])]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SignatureKey {
    /// NEP-171 `token_id`, i.e. canonical decimal [`TokenId`]
    pub token_id: non_fungible_token::TokenId,
    pub hash: SignatureHash,
}

impl SignatureKey {
    #[inline]
    pub fn new(token_id: TokenId, hash: SignatureHash) -> Self {
        Self {
            token_id: token_id.to_nft_token_id(),
            hash,
        }
    }
}

#[near]
impl TokenSigner for Contract {
    fn is_valid_signature(&self, token_id: TokenId, hash: AsHex<SignatureHash>) -> MagicValue {
        self.internal_is_valid_signature(token_id, hash.into_inner())
    }
}

#[near]
impl TokenSignatureRecorder for Contract {
    #[payable]
    fn nft_sign(&mut self, token_id: TokenId, hash: AsHex<SignatureHash>) -> bool {
        assert_at_least_one_yocto();
        let initial_storage_usage = env::storage_usage();

        let signed = self
            .internal_sign(env::predecessor_account_id(), token_id, hash.into_inner())
            .unwrap_or_panic();

        // caller pays for the new record, the rest of the deposit is refunded
        refund_deposit(env::storage_usage().saturating_sub(initial_storage_usage));
        signed
    }

    #[payable]
    fn nft_revoke_signature(&mut self, token_id: TokenId, hash: AsHex<SignatureHash>) -> bool {
        assert_one_yocto();
        let initial_storage_usage = env::storage_usage();

        let owner_id = env::predecessor_account_id();
        let revoked = self
            .internal_revoke_signature(owner_id.clone(), token_id, hash.into_inner())
            .unwrap_or_panic();

        let released = initial_storage_usage.saturating_sub(env::storage_usage());
        if released > 0 {
            Promise::new(owner_id)
                .transfer(env::storage_byte_cost().saturating_mul(released.into()));
        }
        revoked
    }
}

impl Contract {
    #[inline]
    pub(crate) fn internal_is_valid_signature(
        &self,
        token_id: TokenId,
        hash: SignatureHash,
    ) -> MagicValue {
        self.signatures
            .contains(&SignatureKey::new(token_id, hash))
            .into()
    }

    pub(crate) fn internal_sign(
        &mut self,
        owner_id: AccountId,
        token_id: TokenId,
        hash: SignatureHash,
    ) -> Result<bool> {
        self.check_token_owner(&owner_id, token_id)?;

        if !self.signatures.insert(SignatureKey::new(token_id, hash)) {
            return Ok(false);
        }
        TokenSignerEvent::NftSign(SignatureEvent {
            owner_id,
            token_id,
            hash: AsHex(hash),
        })
        .emit();
        Ok(true)
    }

    pub(crate) fn internal_revoke_signature(
        &mut self,
        owner_id: AccountId,
        token_id: TokenId,
        hash: SignatureHash,
    ) -> Result<bool> {
        self.check_token_owner(&owner_id, token_id)?;

        if !self.signatures.remove(&SignatureKey::new(token_id, hash)) {
            return Ok(false);
        }
        TokenSignerEvent::NftRevokeSignature(SignatureEvent {
            owner_id,
            token_id,
            hash: AsHex(hash),
        })
        .emit();
        Ok(true)
    }

    /// Ownership is checked at call time, so only the current owner passes
    fn check_token_owner(&self, account_id: &AccountId, token_id: TokenId) -> Result<()> {
        let owner_id = self
            .tokens
            .owner_by_id
            .get(&token_id.to_nft_token_id())
            .ok_or(TokenSignerError::TokenNotFound(token_id))?;
        if owner_id != *account_id {
            return Err(TokenSignerError::NotTokenOwner);
        }
        Ok(())
    }
}
