//! Function input
//!
//! The single document the calling platform hands over per evaluation: the cart snapshot, the
//! active discount classes, and the stored configuration payload.

use serde::Deserialize;

use crate::cart::Cart;

/// Input for one evaluation call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FunctionInput {
    /// Cart snapshot. Absent only when the caller broke its contract.
    #[serde(default)]
    pub cart: Option<Cart>,

    /// Discount being evaluated.
    #[serde(default)]
    pub discount: DiscountInput,
}

/// The discount node the configuration is stored on.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountInput {
    /// Discount classes active for this evaluation.
    #[serde(default)]
    pub discount_classes: Vec<DiscountClass>,

    /// Configuration metafield, already selected by the platform query.
    #[serde(default)]
    pub metafield: Option<Metafield>,

    /// Every metafield on the discount, for callers that do not pre-select one.
    #[serde(default)]
    pub metafields: Vec<Metafield>,
}

impl DiscountInput {
    /// Whether product-targeted candidates may be emitted.
    pub fn has_product_class(&self) -> bool {
        self.discount_classes.contains(&DiscountClass::Product)
    }
}

/// Capability flag gating which kinds of discount may be emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountClass {
    /// Product-targeted discounts.
    Product,

    /// Order subtotal discounts.
    Order,

    /// Shipping discounts.
    Shipping,

    /// A class this function does not know about.
    #[serde(other)]
    Unknown,
}

/// Stored metafield.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Metafield {
    /// Metafield namespace, when the platform reports it.
    #[serde(default)]
    pub namespace: Option<String>,

    /// Metafield key, when the platform reports it.
    #[serde(default)]
    pub key: Option<String>,

    /// Serialized value.
    #[serde(default)]
    pub value: Option<String>,
}

impl Metafield {
    /// Metafield holding the given value, without a location.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }
}
