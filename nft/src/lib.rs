#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]
#[cfg(feature = "contract")]
pub mod contract;

pub use tokensig_admin_utils as admin_utils;
pub use tokensig_standard as standard;

use near_contract_standards::non_fungible_token::{
    Token,
    core::NonFungibleTokenCore,
    enumeration::NonFungibleTokenEnumeration,
    metadata::{NFTContractMetadata, NonFungibleTokenMetadataProvider, TokenMetadata},
};
use near_plugins::Ownable;
use near_sdk::{AccountId, ext_contract};
use tokensig_admin_utils::full_access_keys::FullAccessKeys;
use tokensig_standard::{TokenId, TokenSignatureRecorder, TokenSigner};

#[ext_contract(ext_token_signer_nft)]
pub trait TokenSignerNft:
    TokenSigner
    + TokenSignatureRecorder
    // NEP-171 + NEP-181 + NEP-177
    + NonFungibleTokenCore
    + NonFungibleTokenEnumeration
    + NonFungibleTokenMetadataProvider
    // Governance
    + Ownable
    + FullAccessKeys
{
    /// Mints `token_id` to `receiver_id`. Only callable by the owner of the
    /// contract.
    ///
    /// Attached deposit MUST cover storage, the rest is refunded.
    fn nft_mint(
        &mut self,
        token_id: TokenId,
        receiver_id: AccountId,
        token_metadata: Option<TokenMetadata>,
    ) -> Token;

    /// NOTE: MUST attach 1 yⓃ for security purposes.
    fn set_metadata(&mut self, metadata: NFTContractMetadata);
}
