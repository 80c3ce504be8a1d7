//! `0x`-prefixed hex encoding for fixed-size byte arrays, the way EVM
//! tooling prints `bytes32` and `bytes4` values.

use impl_tools::autoimpl;
use near_sdk::serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_with::{DeserializeAs, SerializeAs};

pub const PREFIX: &str = "0x";

/// Lowercase hex with `0x` prefix.
#[inline]
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    format!("{PREFIX}{}", ::hex::encode(bytes))
}

/// Accepts both prefixed and bare hex.
#[inline]
pub fn decode(s: impl AsRef<str>) -> Result<Vec<u8>, ::hex::FromHexError> {
    let s = s.as_ref();
    ::hex::decode(s.strip_prefix(PREFIX).unwrap_or(s))
}

/// Same as [`decode`], but into a fixed-size array.
#[inline]
pub fn decode_array<const N: usize>(s: impl AsRef<str>) -> Result<[u8; N], ::hex::FromHexError> {
    let s = s.as_ref();
    let mut out = [0; N];
    ::hex::decode_to_slice(s.strip_prefix(PREFIX).unwrap_or(s), &mut out)?;
    Ok(out)
}

/// [`serde_with`] adapter: `#[serde_as(as = "Hex")]`
pub struct Hex;

impl<T> SerializeAs<T> for Hex
where
    T: AsRef<[u8]>,
{
    fn serialize_as<S>(source: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&encode(source))
    }
}

impl<'de, T> DeserializeAs<'de, T> for Hex
where
    T: TryFrom<Vec<u8>>,
{
    fn deserialize_as<D>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = decode(&s).map_err(de::Error::custom)?;
        let len = bytes.len();
        T::try_from(bytes)
            .map_err(|_| de::Error::invalid_length(len, &"byte array of a fixed length"))
    }
}

/// Wrapper to pass hex-encoded bytes as a method argument or return value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[autoimpl(Deref using self.0)]
#[autoimpl(DerefMut using self.0)]
#[repr(transparent)]
pub struct AsHex<T>(pub T);

impl<T> AsHex<T> {
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for AsHex<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Serialize for AsHex<T>
where
    T: AsRef<[u8]>,
{
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Hex::serialize_as(&self.0, serializer)
    }
}

impl<'de, T> Deserialize<'de> for AsHex<T>
where
    T: TryFrom<Vec<u8>>,
{
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Hex::deserialize_as(deserializer).map(Self)
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

    impl<T> JsonSchema for AsHex<T> {
        fn schema_name() -> String {
            "HexString".to_string()
        }

        fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
            SchemaObject {
                instance_type: Some(InstanceType::String.into()),
                string: Some(Box::new(StringValidation {
                    pattern: Some("^(0x)?([0-9a-fA-F]{2})*$".to_string()),
                    ..Default::default()
                })),
                ..Default::default()
            }
            .into()
        }
    }
}
