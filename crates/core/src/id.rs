//! Strongly-typed identifiers used across the domain.
//!
//! Product and cart line ids come from the content store as opaque strings, so
//! these wrap `String` rather than `Uuid`.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

/// Identifier of a line within a single cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CartLineId(String);

macro_rules! impl_string_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap an identifier issued by an upstream store, as-is.
            ///
            /// Deserialization and `FromStr` reject blank ids; this does not.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Generate a fresh identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
            /// for determinism.
            pub fn generate() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::invalid_id(format!("{}: empty", $name)));
                }
                Ok(Self(trimmed.to_owned()))
            }
        }
    };
}

impl_string_newtype!(ProductId, "ProductId");
impl_string_newtype!(CartLineId, "CartLineId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_blank_ids() {
        let err = "   ".parse::<ProductId>().unwrap_err();
        assert_eq!(err, DomainError::invalid_id("ProductId: empty"));
    }

    #[test]
    fn parse_trims_whitespace() {
        let id: CartLineId = " item-1 ".parse().unwrap();
        assert_eq!(id.as_str(), "item-1");
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(CartLineId::generate(), CartLineId::generate());
    }

    #[test]
    fn deserialize_rejects_blank_ids() {
        let err = serde_json::from_str::<CartLineId>("\"  \"").unwrap_err();
        assert!(err.to_string().contains("CartLineId: empty"));

        let id: ProductId = serde_json::from_str("\"sku-9\"").unwrap();
        assert_eq!(id, ProductId::new("sku-9"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&ProductId::new("1")).unwrap();
        assert_eq!(json, "\"1\"");
    }
}
