//! Cart
//!
//! Cart snapshot as delivered by the calling platform. Only product variant lines can be targeted
//! by a tier; every other merchandise kind is carried through but never matched.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Cart being evaluated.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Cart {
    #[serde(default)]
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create a cart from its lines.
    #[must_use]
    pub fn new(lines: impl Into<Vec<CartLine>>) -> Self {
        Self {
            lines: lines.into(),
        }
    }

    /// Lines in cart order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A single cart line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    id: String,
    quantity: u64,
    #[serde(default)]
    cost: LineCost,
    merchandise: Merchandise,
}

impl CartLine {
    /// Create a cart line.
    pub fn new(
        id: impl Into<String>,
        quantity: u64,
        subtotal: Decimal,
        merchandise: Merchandise,
    ) -> Self {
        Self {
            id: id.into(),
            quantity,
            cost: LineCost {
                subtotal_amount: Amount { amount: subtotal },
            },
            merchandise,
        }
    }

    /// Opaque line identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of units on the line.
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Pre-discount line subtotal.
    pub fn subtotal(&self) -> Decimal {
        self.cost.subtotal_amount.amount
    }

    /// What the line is selling.
    pub fn merchandise(&self) -> &Merchandise {
        &self.merchandise
    }

    /// Owning product id, for product variant lines only.
    pub fn product_id(&self) -> Option<&str> {
        match &self.merchandise {
            Merchandise::ProductVariant(variant) => Some(variant.product.id.as_str()),
            Merchandise::Other => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LineCost {
    #[serde(default)]
    subtotal_amount: Amount,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
struct Amount {
    #[serde(default)]
    amount: Decimal,
}

/// Merchandise kind of a cart line, keyed on the platform's `__typename`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "__typename")]
pub enum Merchandise {
    /// A variant of a catalogue product.
    ProductVariant(ProductVariant),

    /// Anything else (custom products, gift cards, ...).
    #[serde(other)]
    Other,
}

impl Merchandise {
    /// Build product variant merchandise.
    pub fn variant(id: impl Into<String>, product_id: impl Into<String>) -> Self {
        Merchandise::ProductVariant(ProductVariant {
            id: Some(id.into()),
            product: ProductHandle {
                id: product_id.into(),
            },
        })
    }
}

/// Product variant merchandise.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductVariant {
    #[serde(default)]
    id: Option<String>,
    product: ProductHandle,
}

impl ProductVariant {
    /// Variant id, when the platform supplied one.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Owning product id.
    pub fn product_id(&self) -> &str {
        &self.product.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct ProductHandle {
    id: String,
}
