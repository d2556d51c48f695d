//! Validated field value objects for catalog items.
//!
//! Each type can only be constructed through its `parse` function, so a value
//! held anywhere in the system is known to satisfy its constraint. The serde
//! impls go through the same parsers, rejecting invalid wire values at
//! deserialization time.

use serde::{Deserialize, Serialize};
use shopforge_core::{CatalogError, CatalogResult, ValueObject};

/// Monetary price, stored in cents.
///
/// Parsed from a decimal string with exactly two fractional digits
/// (e.g. `"19.99"`). Strictly positive, at most [`Price::MAX`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price(u64);

impl Price {
    /// Upper bound: 1,000,000.00 in cents.
    pub const MAX: u64 = 100_000_000;

    pub fn parse(s: &str) -> CatalogResult<Self> {
        let reject = |reason: &str| CatalogError::validation("price", s, reason);

        let Some((whole, frac)) = s.split_once('.') else {
            return Err(reject("price must have exactly two fractional digits"));
        };
        if frac.len() != 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(reject("price must have exactly two fractional digits"));
        }
        if whole.is_empty() || whole.len() > 7 || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(reject("price must be a plain decimal number"));
        }

        // Lengths are bounded above, so this cannot overflow u64.
        let whole: u64 = whole.parse().map_err(|_| reject("price must be a plain decimal number"))?;
        let frac: u64 = frac.parse().map_err(|_| reject("price must be a plain decimal number"))?;
        let cents = whole * 100 + frac;

        if cents == 0 {
            return Err(reject("price must be positive"));
        }
        if cents > Self::MAX {
            return Err(reject("price exceeds the maximum of 1000000.00"));
        }
        Ok(Self(cents))
    }

    pub fn cents(&self) -> u64 {
        self.0
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl TryFrom<String> for Price {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Price> for String {
    fn from(value: Price) -> Self {
        value.to_string()
    }
}

/// Stock-keeping code: three uppercase letters, a hyphen, six digits
/// (e.g. `"ABC-123456"`). Unique across all live items; uniqueness is
/// enforced by the item store, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SkuCode(String);

impl SkuCode {
    pub fn parse(s: &str) -> CatalogResult<Self> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes[..3].iter().all(|b| b.is_ascii_uppercase())
            && bytes[3] == b'-'
            && bytes[4..].iter().all(|b| b.is_ascii_digit());

        if !well_formed {
            return Err(CatalogError::validation(
                "sku",
                s,
                "SKU must match three uppercase letters, a hyphen, six digits (e.g. ABC-123456)",
            ));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for SkuCode {}

impl core::fmt::Display for SkuCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SkuCode {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SkuCode> for String {
    fn from(value: SkuCode) -> Self {
        value.0
    }
}

/// Contact email address, checked syntactically: no whitespace, exactly one
/// `@`, non-empty local part, domain with an interior dot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(s: &str) -> CatalogResult<Self> {
        let reject = || CatalogError::validation("contact", s, "not a valid email address");

        if s.chars().any(char::is_whitespace) {
            return Err(reject());
        }
        let Some((local, domain)) = s.split_once('@') else {
            return Err(reject());
        };
        if local.is_empty() || domain.contains('@') {
            return Err(reject());
        }
        // The domain needs an interior dot: "a.b", not ".b" or "a.".
        let dotted = domain
            .split_once('.')
            .is_some_and(|(head, tail)| !head.is_empty() && !tail.is_empty());
        if !dotted {
            return Err(reject());
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for EmailAddress {}

impl core::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_parses_plain_decimal() {
        let price = Price::parse("19.99").unwrap();
        assert_eq!(price.cents(), 1999);
        assert_eq!(price.to_string(), "19.99");
    }

    #[test]
    fn price_requires_two_fractional_digits() {
        for bad in ["19", "19.9", "19.999", "19.", ".99", "19,99"] {
            let err = Price::parse(bad).unwrap_err();
            match err {
                CatalogError::Validation { field: "price", .. } => {}
                other => panic!("expected price validation error for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn price_must_be_positive() {
        assert!(Price::parse("0.00").is_err());
        assert_eq!(Price::parse("0.01").unwrap().cents(), 1);
    }

    #[test]
    fn price_is_bounded() {
        assert_eq!(Price::parse("1000000.00").unwrap().cents(), Price::MAX);
        assert!(Price::parse("1000000.01").is_err());
        assert!(Price::parse("99999999.00").is_err());
    }

    #[test]
    fn price_rejects_signs_and_garbage() {
        for bad in ["-1.00", "+1.00", "1e2.00", "abc.de", ""] {
            assert!(Price::parse(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn sku_accepts_canonical_pattern() {
        let sku = SkuCode::parse("ABC-123456").unwrap();
        assert_eq!(sku.as_str(), "ABC-123456");
    }

    #[test]
    fn sku_rejects_malformed_codes() {
        for bad in [
            "abc-123456",
            "ABCD-123456",
            "AB-123456",
            "ABC_123456",
            "ABC-12345",
            "ABC-1234567",
            "ABC-12345a",
            "",
        ] {
            let err = SkuCode::parse(bad).unwrap_err();
            match err {
                CatalogError::Validation { field: "sku", .. } => {}
                other => panic!("expected sku validation error for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn email_accepts_reasonable_addresses() {
        for ok in ["ops@example.com", "a.b+c@sub.example.org"] {
            assert!(EmailAddress::parse(ok).is_ok(), "{ok:?} should parse");
        }
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for bad in [
            "",
            "plainaddress",
            "@example.com",
            "a@b",
            "a@.com",
            "a@com.",
            "a b@example.com",
            "a@b@example.com",
        ] {
            assert!(EmailAddress::parse(bad).is_err(), "{bad:?} should be rejected");
        }
    }
}
