use core::{
    fmt::{self, Debug, Display},
    str::FromStr,
};

use bnum::types::U256;
use near_contract_standards::non_fungible_token;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error as ThisError;

/// Number of decimal digits in `U256::MAX`
pub const MAX_TOKEN_ID_DIGITS: usize = 78;

/// Identifier of a token within a collection, an unsigned 256-bit integer
/// like `uint256` in ERC-721.
///
/// Serialized as a canonical decimal string: no sign, no leading zeros.
/// The NEP-171 `token_id` of the token is this very string, so a token has
/// exactly one spelling on either side.
#[derive(
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeDisplay,
    DeserializeFromStr,
    derive_more::From,
)]
pub struct TokenId(U256);

impl TokenId {
    pub const MIN: Self = Self(U256::ZERO);
    pub const MAX: Self = Self(U256::MAX);

    #[inline]
    pub const fn new(n: U256) -> Self {
        Self(n)
    }

    #[inline]
    pub const fn as_u256(&self) -> &U256 {
        &self.0
    }

    /// NEP-171 `token_id` of this token
    #[inline]
    pub fn to_nft_token_id(&self) -> non_fungible_token::TokenId {
        self.to_string()
    }

    #[inline]
    pub fn from_nft_token_id(token_id: &str) -> Result<Self, TokenIdError> {
        token_id.parse()
    }
}

impl From<u64> for TokenId {
    #[inline]
    fn from(n: u64) -> Self {
        Self(U256::from(n))
    }
}

impl From<u128> for TokenId {
    #[inline]
    fn from(n: u128) -> Self {
        Self(U256::from(n))
    }
}

impl From<TokenId> for U256 {
    #[inline]
    fn from(token_id: TokenId) -> Self {
        token_id.0
    }
}

impl Debug for TokenId {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Display for TokenId {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl FromStr for TokenId {
    type Err = TokenIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(TokenIdError::Empty);
        }
        if s.len() > MAX_TOKEN_ID_DIGITS {
            return Err(TokenIdError::TooLong(s.len()));
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TokenIdError::NotDecimal);
        }
        if s.len() > 1 && s.starts_with('0') {
            return Err(TokenIdError::LeadingZeros);
        }
        U256::from_str_radix(s, 10)
            .map(Self)
            .map_err(|_| TokenIdError::Overflow)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum TokenIdError {
    #[error("empty")]
    Empty,
    #[error("too long: {0} digits")]
    TooLong(usize),
    #[error("not a decimal number")]
    NotDecimal,
    #[error("leading zeros")]
    LeadingZeros,
    #[error("overflows uint256")]
    Overflow,
}

#[cfg(all(feature = "abi", not(target_arch = "wasm32")))]
mod abi {
    use super::*;

    use near_sdk::schemars::{
        JsonSchema,
        r#gen::SchemaGenerator,
        schema::{InstanceType, Schema, SchemaObject, StringValidation},
    };

    impl JsonSchema for TokenId {
        fn schema_name() -> String {
            stringify!(TokenId).to_string()
        }

        fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
            SchemaObject {
                instance_type: Some(InstanceType::String.into()),
                string: Some(Box::new(StringValidation {
                    max_length: Some(78),
                    pattern: Some("^(0|[1-9][0-9]*)$".to_string()),
                    ..Default::default()
                })),
                extensions: [(
                    "examples",
                    [TokenId::from(1u64), TokenId::MAX]
                        .map(|t| t.to_string())
                        .to_vec()
                        .into(),
                )]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
                ..Default::default()
            }
            .into()
        }
    }
}
