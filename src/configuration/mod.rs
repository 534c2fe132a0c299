//! Configuration
//!
//! Turns the stored configuration payload into typed [`Tier`]s. Two payload shapes are
//! recognised: the current `{ "tiers": [...] }` object, and the legacy bare array of tiers whose
//! first entry carries a threshold type. Anything else is malformed.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::{input::DiscountInput, tiers::Tier};

pub use location::{DEFAULT_KEY, DEFAULT_NAMESPACE, MetafieldLocation};

use payload::{PayloadShape, TierPayload};

mod location;
mod payload;

/// Why a configuration payload could not be used.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// No payload was stored at the configured location.
    #[error("no configuration stored at {namespace}/{key}")]
    Missing {
        /// Metafield namespace searched
        namespace: String,
        /// Metafield key searched
        key: String,
    },

    /// The payload is not valid JSON.
    #[error("configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload is JSON, but neither of the recognised shapes.
    #[error("configuration has an unrecognised shape: {0}")]
    UnrecognisedShape(&'static str),

    /// A tier entry has a field of the wrong type.
    #[error("tier {index} is invalid: {source}")]
    InvalidTier {
        /// Position of the tier in the payload
        index: usize,
        /// Underlying decode error
        source: serde_json::Error,
    },

    /// The payload parsed, but no tier would have any effect.
    #[error("configuration has no live tiers")]
    NoLiveTiers,
}

/// Parses stored configuration payloads into tiers.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationParser {
    location: MetafieldLocation,
}

impl ConfigurationParser {
    /// Create a parser reading from the given metafield location.
    pub fn new(location: MetafieldLocation) -> Self {
        Self { location }
    }

    /// Return the metafield location.
    pub fn location(&self) -> &MetafieldLocation {
        &self.location
    }

    /// Select this parser's raw payload from a discount.
    pub fn payload<'a>(&self, discount: &'a DiscountInput) -> Option<&'a str> {
        self.location.select(discount)
    }

    /// Parse a payload, resolving every failure to an empty list.
    pub fn parse(&self, raw: Option<&str>) -> Vec<Tier> {
        self.try_parse(raw).unwrap_or_default()
    }

    /// Parse a payload, reporting why it could not be used.
    ///
    /// A current-shape object without a `tiers` key parses to an empty list.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::Missing`]: `raw` is `None`.
    /// - [`ConfigurationError::Json`]: `raw` is not JSON.
    /// - [`ConfigurationError::UnrecognisedShape`]: `raw` is neither payload shape.
    /// - [`ConfigurationError::InvalidTier`]: a tier entry could not be decoded.
    pub fn try_parse(&self, raw: Option<&str>) -> Result<Vec<Tier>, ConfigurationError> {
        let Some(raw) = raw else {
            return Err(ConfigurationError::Missing {
                namespace: self.location.namespace().to_string(),
                key: self.location.key().to_string(),
            });
        };

        let value: Value = serde_json::from_str(raw)?;

        match value {
            Value::Object(mut object) => match object.remove("tiers") {
                None | Some(Value::Null) => Ok(Vec::new()),
                Some(Value::Array(entries)) => decode_tiers(entries, PayloadShape::Current),
                Some(_) => Err(ConfigurationError::UnrecognisedShape("`tiers` is not an array")),
            },
            Value::Array(entries) if is_legacy(&entries) => {
                decode_tiers(entries, PayloadShape::Legacy)
            }
            Value::Array(_) => Err(ConfigurationError::UnrecognisedShape(
                "array without a threshold type",
            )),
            _ => Err(ConfigurationError::UnrecognisedShape("not an object or array")),
        }
    }
}

/// A legacy payload is a non-empty array whose first entry names a threshold type.
fn is_legacy(entries: &[Value]) -> bool {
    entries.first().and_then(Value::as_object).is_some_and(|first| {
        first.contains_key("tresholdType") || first.contains_key("thresholdType")
    })
}

fn decode_tiers(entries: Vec<Value>, shape: PayloadShape) -> Result<Vec<Tier>, ConfigurationError> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            TierPayload::deserialize(entry)
                .map(|payload| payload.into_tier(shape))
                .map_err(|source| ConfigurationError::InvalidTier { index, source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        input::Metafield,
        tiers::{DiscountValue, Threshold},
    };

    use super::*;

    #[test]
    fn parses_current_shape() -> TestResult {
        let raw = r#"{"tiers":[
            {"tresholdType":"qty","quantity":3,"percentage":20,"discountType":"percentage",
             "discountMessage":"Buy 3","products":[{"id":"gid://shopify/Product/1","title":"Brie"}]},
            {"tresholdType":"amount","amount":"40.00","flatPrice":5,"discountType":"flat",
             "products":["gid://shopify/Product/2"]}
        ]}"#;

        let tiers = ConfigurationParser::default().try_parse(Some(raw))?;

        assert_eq!(tiers.len(), 2);

        let first = tiers.first().ok_or("missing first tier")?;
        assert_eq!(first.threshold(), &Threshold::Quantity(3));
        assert_eq!(first.discount(), &DiscountValue::Percentage(Decimal::from(20)));
        assert_eq!(first.message(), "Buy 3");

        let second = tiers.get(1).ok_or("missing second tier")?;
        assert_eq!(second.threshold(), &Threshold::Amount(Decimal::new(4000, 2)));
        assert_eq!(second.discount(), &DiscountValue::FixedAmount(Decimal::from(5)));

        Ok(())
    }

    #[test]
    fn parses_legacy_shape_as_percentage() -> TestResult {
        let raw = r#"[{"tresholdType":"qty","quantity":2,"percentage":10,
                       "products":["gid://shopify/Product/1"]}]"#;

        let tiers = ConfigurationParser::default().try_parse(Some(raw))?;
        let tier = tiers.first().ok_or("missing tier")?;

        assert_eq!(tier.discount(), &DiscountValue::Percentage(Decimal::TEN));
        assert!(tier.is_live());

        Ok(())
    }

    #[test]
    fn object_without_tiers_is_empty() -> TestResult {
        let tiers = ConfigurationParser::default().try_parse(Some(r#"{"version":2}"#))?;

        assert!(tiers.is_empty());

        Ok(())
    }

    #[test]
    fn unusable_payloads_report_why() {
        let parser = ConfigurationParser::default();

        assert!(matches!(
            parser.try_parse(None),
            Err(ConfigurationError::Missing { .. })
        ));
        assert!(matches!(
            parser.try_parse(Some("not json")),
            Err(ConfigurationError::Json(_))
        ));
        assert!(matches!(
            parser.try_parse(Some(r#"{"tiers":"all"}"#)),
            Err(ConfigurationError::UnrecognisedShape(_))
        ));
        assert!(matches!(
            parser.try_parse(Some(r#"[{"quantity":1}]"#)),
            Err(ConfigurationError::UnrecognisedShape(_))
        ));
        assert!(matches!(
            parser.try_parse(Some("[]")),
            Err(ConfigurationError::UnrecognisedShape(_))
        ));
        assert!(matches!(
            parser.try_parse(Some("42")),
            Err(ConfigurationError::UnrecognisedShape(_))
        ));
        assert!(matches!(
            parser.try_parse(Some(r#"{"tiers":[{},{"percentage":"lots"}]}"#)),
            Err(ConfigurationError::InvalidTier { index: 1, .. })
        ));
    }

    #[test]
    fn parse_resolves_failures_to_empty() {
        let parser = ConfigurationParser::default();

        assert!(parser.parse(None).is_empty());
        assert!(parser.parse(Some("{{{")).is_empty());
    }

    #[test]
    fn payload_reads_from_configured_location() {
        let parser = ConfigurationParser::new(MetafieldLocation::new("tiers", "config"));
        let discount = DiscountInput {
            metafields: vec![Metafield {
                namespace: Some("tiers".to_string()),
                key: Some("config".to_string()),
                value: Some("{}".to_string()),
            }],
            ..DiscountInput::default()
        };

        assert_eq!(parser.payload(&discount), Some("{}"));
        assert_eq!(parser.location().key(), "config");
    }

    #[test]
    fn missing_error_names_location() {
        let parser = ConfigurationParser::default();

        let message = parser
            .try_parse(None)
            .err()
            .map(|error| error.to_string())
            .unwrap_or_default();

        assert_eq!(
            message,
            format!("no configuration stored at {DEFAULT_NAMESPACE}/{DEFAULT_KEY}")
        );
    }
}
