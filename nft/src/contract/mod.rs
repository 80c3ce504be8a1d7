mod signatures;
mod tokens;

use near_contract_standards::non_fungible_token::{
    NonFungibleToken, Token,
    metadata::{NFT_METADATA_SPEC, NFTContractMetadata, TokenMetadata},
};
use near_plugins::{Ownable, events::AsEvent, only, ownable::OwnershipTransferred};
use near_sdk::{
    AccountId, BorshStorageKey, PanicOnDefault, Promise, PublicKey, assert_one_yocto,
    borsh::BorshSerialize,
    env, near, require,
    store::{Lazy, LookupSet},
};
use tokensig_admin_utils::full_access_keys::FullAccessKeys;
use tokensig_standard::TokenId;

use crate::TokenSignerNft;

pub use self::signatures::SignatureKey;

#[near(contract_state)]
#[derive(Ownable, PanicOnDefault)]
pub struct Contract {
    tokens: NonFungibleToken,
    metadata: Lazy<NFTContractMetadata>,
    signatures: LookupSet<SignatureKey>,
}

#[near]
impl Contract {
    #[init]
    #[allow(dead_code)]
    pub fn new(owner_id: Option<AccountId>, metadata: Option<NFTContractMetadata>) -> Self {
        let metadata = metadata.unwrap_or_else(|| NFTContractMetadata {
            spec: NFT_METADATA_SPEC.to_string(),
            name: String::new(),
            symbol: String::new(),
            icon: None,
            base_uri: None,
            reference: None,
            reference_hash: None,
        });
        metadata.assert_valid();

        let owner = owner_id.unwrap_or_else(env::predecessor_account_id);
        let contract = Self {
            tokens: NonFungibleToken::new(
                Prefix::Owners,
                owner.clone(),
                Some(Prefix::TokenMetadata),
                Some(Prefix::Enumeration),
                None::<Prefix>,
            ),
            metadata: Lazy::new(Prefix::Metadata, metadata),
            signatures: LookupSet::new(Prefix::Signatures),
        };

        // Ownable::owner_set requires the caller to be the owner already
        require!(!env::storage_write(
            contract.owner_storage_key(),
            owner.as_bytes()
        ));
        OwnershipTransferred {
            previous_owner: None,
            new_owner: Some(owner),
        }
        .emit();
        contract
    }
}

#[near]
impl TokenSignerNft for Contract {
    #[only(self, owner)]
    #[payable]
    fn nft_mint(
        &mut self,
        token_id: TokenId,
        receiver_id: AccountId,
        token_metadata: Option<TokenMetadata>,
    ) -> Token {
        // refunds unused deposit to the predecessor
        self.tokens.internal_mint(
            token_id.to_nft_token_id(),
            receiver_id,
            Some(token_metadata.unwrap_or_default()),
        )
    }

    #[only(self, owner)]
    #[payable]
    fn set_metadata(&mut self, metadata: NFTContractMetadata) {
        assert_one_yocto();
        metadata.assert_valid();
        self.metadata.set(metadata);
    }
}

#[near]
impl FullAccessKeys for Contract {
    #[only(self, owner)]
    #[payable]
    fn add_full_access_key(&mut self, public_key: PublicKey) -> Promise {
        assert_one_yocto();
        Promise::new(env::current_account_id()).add_full_access_key(public_key)
    }

    #[only(self, owner)]
    #[payable]
    fn delete_key(&mut self, public_key: PublicKey) -> Promise {
        assert_one_yocto();
        Promise::new(env::current_account_id()).delete_key(public_key)
    }
}

#[derive(BorshSerialize, BorshStorageKey)]
#[borsh(crate = "::near_sdk::borsh")]
enum Prefix {
    Owners,
    TokenMetadata,
    Enumeration,
    Metadata,
    Signatures,
}
