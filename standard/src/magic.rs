use core::{
    fmt::{self, Debug, Display},
    str::FromStr,
};

use hex_literal::hex;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use tokensig_serde_utils::hex as hex0x;

/// 4-byte answer of [`is_valid_signature()`](crate::TokenSigner::is_valid_signature).
///
/// Only [`MagicValue::VALID`] means the signature is valid. Callers MUST
/// treat any other value as a plain negative, [`MagicValue::INVALID`] is
/// just what this implementation returns.
#[derive(Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct MagicValue(pub [u8; 4]);

impl MagicValue {
    /// Solidity signature of the method the magic value is the selector of
    pub const SELECTOR_SIGNATURE: &'static str = "isValidSignature(uint256,bytes32)";

    /// `bytes4(keccak256("isValidSignature(uint256,bytes32)"))`
    pub const VALID: Self = Self(hex!("1e6395e6"));

    pub const INVALID: Self = Self(hex!("ffffffff"));

    #[inline]
    pub const fn from_validity(valid: bool) -> Self {
        if valid { Self::VALID } else { Self::INVALID }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self == Self::VALID
    }

    #[inline]
    pub const fn into_bytes(self) -> [u8; 4] {
        self.0
    }
}

impl From<bool> for MagicValue {
    #[inline]
    fn from(valid: bool) -> Self {
        Self::from_validity(valid)
    }
}

impl From<MagicValue> for u32 {
    #[inline]
    fn from(value: MagicValue) -> Self {
        Self::from_be_bytes(value.0)
    }
}

impl From<u32> for MagicValue {
    #[inline]
    fn from(value: u32) -> Self {
        Self(value.to_be_bytes())
    }
}

impl Debug for MagicValue {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex0x::encode(self.0))
    }
}

impl Display for MagicValue {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl FromStr for MagicValue {
    type Err = hex::FromHexError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex0x::decode_array(s).map(Self)
    }
}

#[cfg(all(feature = "abi", not(target_arch = "wasm32")))]
mod abi {
    use super::*;

    use near_sdk::schemars::{
        JsonSchema,
        r#gen::SchemaGenerator,
        schema::{InstanceType, Schema, SchemaObject, StringValidation},
    };

    impl JsonSchema for MagicValue {
        fn schema_name() -> String {
            stringify!(MagicValue).to_string()
        }

        fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
            SchemaObject {
                instance_type: Some(InstanceType::String.into()),
                string: Some(Box::new(StringValidation {
                    pattern: Some("^(0x)?[0-9a-fA-F]{8}$".to_string()),
                    ..Default::default()
                })),
                extensions: [(
                    "examples",
                    [MagicValue::VALID, MagicValue::INVALID]
                        .map(|v| v.to_string())
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
