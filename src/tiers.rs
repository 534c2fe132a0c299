//! Tiers
//!
//! A tier is one authored discount rule: a [`Threshold`] measured over the cart lines it targets,
//! the set of products it targets, and the [`DiscountValue`] it grants to each of those lines once
//! the threshold is met. Tiers are immutable once parsed.

use std::fmt;

use rust_decimal::Decimal;
use rustc_hash::FxHashSet;

/// Message attached to candidates when a tier has none of its own.
pub const FALLBACK_MESSAGE: &str = "Tier discount applied";

/// Minimum aggregate a tier's targeted lines must reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    /// Total units across targeted lines.
    Quantity(u64),

    /// Total subtotal across targeted lines.
    Amount(Decimal),
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::Quantity(quantity) => write!(f, "{quantity} units"),
            Threshold::Amount(amount) => write!(f, "{amount} spend"),
        }
    }
}

/// Discount granted to each targeted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountValue {
    /// Percentage off, on a 0-100 scale.
    Percentage(Decimal),

    /// Fixed amount off.
    FixedAmount(Decimal),
}

impl DiscountValue {
    /// The raw value, whichever kind it is.
    pub fn value(&self) -> Decimal {
        match self {
            DiscountValue::Percentage(value) | DiscountValue::FixedAmount(value) => *value,
        }
    }

    /// Whether the discount would take nothing off.
    pub fn is_zero(&self) -> bool {
        self.value().is_zero()
    }
}

/// Product targeted by a tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRef {
    id: String,
    title: String,
}

impl ProductRef {
    /// Create a product reference.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// Create a product reference from a bare id, deriving a display title from its last path
    /// segment (`gid://shopify/Product/42` becomes `Product 42`).
    pub fn from_id(id: impl Into<String>) -> Self {
        let id = id.into();
        let tail = id.rsplit_once('/').map_or(id.as_str(), |(_, tail)| tail);
        let title = format!("Product {tail}");

        Self { id, title }
    }

    /// Product id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// A single discount tier.
#[derive(Debug, Clone, PartialEq)]
pub struct Tier {
    threshold: Threshold,
    products: Vec<ProductRef>,
    target_ids: FxHashSet<String>,
    discount: DiscountValue,
    message: Option<String>,
    has_effect: bool,
}

impl Tier {
    /// Create a new tier. Duplicate product ids keep their first entry.
    ///
    /// The tier has an effect when its quantity threshold or its discount value is non-zero; use
    /// [`Tier::with_effect`] when the authored fields say otherwise.
    pub fn new(
        threshold: Threshold,
        products: impl IntoIterator<Item = ProductRef>,
        discount: DiscountValue,
        message: Option<String>,
    ) -> Self {
        let mut target_ids = FxHashSet::default();

        let products = products
            .into_iter()
            .filter(|product| target_ids.insert(product.id.clone()))
            .collect();

        let has_effect = matches!(threshold, Threshold::Quantity(quantity) if quantity > 0)
            || !discount.is_zero();

        Self {
            threshold,
            products,
            target_ids,
            discount,
            message,
            has_effect,
        }
    }

    /// Override whether the tier would have any effect once met.
    ///
    /// Authored tiers carry values for every discount kind; any of them being non-zero makes the
    /// tier count, even when the selected kind is zero.
    #[must_use]
    pub fn with_effect(mut self, has_effect: bool) -> Self {
        self.has_effect = has_effect;
        self
    }

    /// Return the threshold.
    pub fn threshold(&self) -> &Threshold {
        &self.threshold
    }

    /// Return the targeted products.
    pub fn products(&self) -> &[ProductRef] {
        &self.products
    }

    /// Whether the tier targets the given product.
    pub fn targets(&self, product_id: &str) -> bool {
        self.target_ids.contains(product_id)
    }

    /// Whether the tier targets no products at all.
    pub fn has_no_targets(&self) -> bool {
        self.target_ids.is_empty()
    }

    /// Return the discount.
    pub fn discount(&self) -> &DiscountValue {
        &self.discount
    }

    /// Message for candidates produced by this tier, falling back to [`FALLBACK_MESSAGE`].
    pub fn message(&self) -> &str {
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => message,
            _ => FALLBACK_MESSAGE,
        }
    }

    /// A tier is live when it targets at least one product and would have an effect once met.
    pub fn is_live(&self) -> bool {
        !self.has_no_targets() && self.has_effect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products(ids: &[&str]) -> Vec<ProductRef> {
        ids.iter().map(|id| ProductRef::from_id(*id)).collect()
    }

    #[test]
    fn from_id_derives_title_from_last_segment() {
        let product = ProductRef::from_id("gid://shopify/Product/42");

        assert_eq!(product.id(), "gid://shopify/Product/42");
        assert_eq!(product.title(), "Product 42");
        assert_eq!(ProductRef::from_id("plain").title(), "Product plain");
    }

    #[test]
    fn duplicate_products_are_collapsed() {
        let tier = Tier::new(
            Threshold::Quantity(1),
            products(&["a", "b", "a"]),
            DiscountValue::Percentage(Decimal::TEN),
            None,
        );

        assert_eq!(tier.products().len(), 2);
        assert!(tier.targets("a"));
        assert!(tier.targets("b"));
        assert!(!tier.targets("c"));
    }

    #[test]
    fn message_falls_back_when_absent_or_empty() {
        let discount = DiscountValue::Percentage(Decimal::TEN);

        let absent = Tier::new(Threshold::Quantity(1), products(&["a"]), discount, None);
        let empty = Tier::new(
            Threshold::Quantity(1),
            products(&["a"]),
            discount,
            Some(String::new()),
        );
        let custom = Tier::new(
            Threshold::Quantity(1),
            products(&["a"]),
            discount,
            Some("Buy more, save more".to_string()),
        );

        assert_eq!(absent.message(), FALLBACK_MESSAGE);
        assert_eq!(empty.message(), FALLBACK_MESSAGE);
        assert_eq!(custom.message(), "Buy more, save more");
    }

    #[test]
    fn tier_without_targets_is_never_live() {
        let tier = Tier::new(
            Threshold::Quantity(5),
            Vec::new(),
            DiscountValue::Percentage(Decimal::TEN),
            None,
        );

        assert!(!tier.is_live());
    }

    #[test]
    fn liveness_needs_a_quantity_or_a_value() {
        let zero = DiscountValue::Percentage(Decimal::ZERO);

        let inert = Tier::new(Threshold::Quantity(0), products(&["a"]), zero, None);
        let by_quantity = Tier::new(Threshold::Quantity(2), products(&["a"]), zero, None);
        let by_amount_only = Tier::new(Threshold::Amount(Decimal::TEN), products(&["a"]), zero, None);
        let by_fixed = Tier::new(
            Threshold::Amount(Decimal::TEN),
            products(&["a"]),
            DiscountValue::FixedAmount(Decimal::ONE),
            None,
        );

        assert!(!inert.is_live());
        assert!(by_quantity.is_live());
        assert!(!by_amount_only.is_live());
        assert!(by_fixed.is_live());
    }

    #[test]
    fn authored_effect_overrides_typed_values() {
        let zero = DiscountValue::Percentage(Decimal::ZERO);

        let unused_flat_price =
            Tier::new(Threshold::Amount(Decimal::TEN), products(&["a"]), zero, None)
                .with_effect(true);
        let untargeted =
            Tier::new(Threshold::Quantity(0), Vec::new(), zero, None).with_effect(true);

        assert!(unused_flat_price.is_live());
        assert!(!untargeted.is_live());
    }

    #[test]
    fn threshold_display_names_the_measure() {
        assert_eq!(Threshold::Quantity(3).to_string(), "3 units");
        assert_eq!(Threshold::Amount(Decimal::new(3000, 2)).to_string(), "30.00 spend");
    }
}
