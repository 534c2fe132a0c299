//! Configuration payload as persisted by the authoring extension.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::Deserialize;

use crate::tiers::{DiscountValue, ProductRef, Threshold, Tier};

/// Which payload shape a tier entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PayloadShape {
    /// `{ "tiers": [...] }`
    Current,

    /// A bare array of tiers, written before discount kinds existed.
    Legacy,
}

/// Threshold kind as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum ThresholdKind {
    #[serde(alias = "quantity")]
    Qty,

    Amount,
}

/// Discount kind as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum DiscountKind {
    #[serde(alias = "percent")]
    Percentage,

    #[serde(alias = "fixed", alias = "fixedAmount")]
    Flat,
}

/// Product entry: a bare id or an `{ id, title }` object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(crate) enum ProductEntry {
    Id(String),
    Object {
        id: String,
        #[serde(default)]
        title: Option<String>,
    },
}

impl From<ProductEntry> for ProductRef {
    fn from(entry: ProductEntry) -> Self {
        match entry {
            ProductEntry::Id(id) | ProductEntry::Object { id, title: None } => {
                ProductRef::from_id(id)
            }
            ProductEntry::Object {
                id,
                title: Some(title),
            } => ProductRef::new(id, title),
        }
    }
}

/// One stored tier. Every field is optional; UI-only fields are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct TierPayload {
    #[serde(alias = "thresholdType")]
    treshold_type: Option<ThresholdKind>,
    quantity: Option<Decimal>,
    amount: Option<Decimal>,
    discount_type: Option<DiscountKind>,
    percentage: Option<Decimal>,
    flat_price: Option<Decimal>,
    #[serde(alias = "message")]
    discount_message: Option<String>,
    products: Option<Vec<ProductEntry>>,
    product_ids: Option<Vec<ProductEntry>>,
}

impl TierPayload {
    /// Apply defaults and map the stored fields onto a [`Tier`].
    pub(crate) fn into_tier(self, shape: PayloadShape) -> Tier {
        let has_effect = self.has_effect();

        let threshold = match self.treshold_type.unwrap_or(ThresholdKind::Qty) {
            ThresholdKind::Qty => Threshold::Quantity(quantity_threshold(self.quantity)),
            ThresholdKind::Amount => Threshold::Amount(non_negative(self.amount)),
        };

        let (discount_kind, products) = match shape {
            PayloadShape::Current => (
                self.discount_type.unwrap_or(DiscountKind::Percentage),
                self.products,
            ),
            PayloadShape::Legacy => (DiscountKind::Percentage, self.products.or(self.product_ids)),
        };

        let discount = match discount_kind {
            DiscountKind::Percentage => DiscountValue::Percentage(self.percentage.unwrap_or_default()),
            DiscountKind::Flat => DiscountValue::FixedAmount(self.flat_price.unwrap_or_default()),
        };

        Tier::new(
            threshold,
            products
                .unwrap_or_default()
                .into_iter()
                .map(ProductRef::from),
            discount,
            self.discount_message,
        )
        .with_effect(has_effect)
    }

    /// Any of the stored quantity, percentage or flat price being non-zero, whichever kinds are
    /// selected.
    fn has_effect(&self) -> bool {
        [self.quantity, self.percentage, self.flat_price]
            .into_iter()
            .flatten()
            .any(|value| !value.is_zero())
    }
}

/// Fractional quantities round up: reaching 2.5 units means holding 3.
fn quantity_threshold(quantity: Option<Decimal>) -> u64 {
    non_negative(quantity).ceil().to_u64().unwrap_or(u64::MAX)
}

fn non_negative(value: Option<Decimal>) -> Decimal {
    value.unwrap_or_default().max(Decimal::ZERO)
}
