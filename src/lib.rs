//! Tiered Discount
//!
//! Tiered product discount function: given a cart snapshot and a merchant-authored tier
//! configuration, decides which tiers apply and emits the discount operations the platform should
//! apply to the order.

pub mod cart;
pub mod configuration;
pub mod discounts;
pub mod fixtures;
pub mod function;
pub mod gate;
pub mod input;
pub mod observer;
pub mod operations;
pub mod prelude;
pub mod thresholds;
pub mod tiers;
