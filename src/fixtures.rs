//! Fixtures
//!
//! Builders for platform-shaped input documents, used by tests and examples.

use serde_json::{Value, json};

use crate::input::FunctionInput;

/// Product variant cart line whose variant id is derived from the line id.
pub fn variant_line(id: &str, product_id: &str, quantity: u64, subtotal: &str) -> Value {
    json!({
        "id": id,
        "quantity": quantity,
        "cost": { "subtotalAmount": { "amount": subtotal } },
        "merchandise": {
            "__typename": "ProductVariant",
            "id": format!("{id}/variant"),
            "product": { "id": product_id }
        }
    })
}

/// Custom (non-variant) cart line.
pub fn custom_line(id: &str, quantity: u64, subtotal: &str) -> Value {
    json!({
        "id": id,
        "quantity": quantity,
        "cost": { "subtotalAmount": { "amount": subtotal } },
        "merchandise": { "__typename": "CustomProduct", "title": "Custom" }
    })
}

/// Quantity-threshold percentage tier in the authoring UI's stored shape.
pub fn quantity_tier(quantity: u64, percentage: &str, products: &[&str], message: &str) -> Value {
    json!({
        "tresholdType": "qty",
        "quantity": quantity,
        "amount": 0,
        "discountType": "percentage",
        "percentage": percentage,
        "flatPrice": 0,
        "discountMessage": message,
        "products": products
            .iter()
            .map(|id| json!({ "id": id, "title": format!("Title {id}") }))
            .collect::<Vec<_>>()
    })
}

/// Amount-threshold fixed-amount tier in the authoring UI's stored shape.
pub fn amount_tier(amount: &str, flat_price: &str, products: &[&str], message: &str) -> Value {
    json!({
        "tresholdType": "amount",
        "quantity": 0,
        "amount": amount,
        "discountType": "flat",
        "percentage": 0,
        "flatPrice": flat_price,
        "discountMessage": message,
        "products": products
    })
}

/// Current-shape configuration payload, serialized as the metafield stores it.
pub fn configuration(tiers: impl IntoIterator<Item = Value>) -> String {
    json!({ "tiers": tiers.into_iter().collect::<Vec<_>>() }).to_string()
}

/// Build a function input from lines, a raw payload and discount classes.
///
/// # Errors
///
/// Returns an error if the assembled document does not match the input shape.
pub fn input(
    lines: impl IntoIterator<Item = Value>,
    payload: Option<&str>,
    discount_classes: &[&str],
) -> Result<FunctionInput, serde_json::Error> {
    let metafield = payload.map(|value| json!({ "value": value }));

    serde_json::from_value(json!({
        "cart": { "lines": lines.into_iter().collect::<Vec<_>>() },
        "discount": {
            "discountClasses": discount_classes,
            "metafield": metafield
        }
    }))
}
