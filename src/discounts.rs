//! Discounts
//!
//! Turns a met tier and its eligible lines into discount candidates: one per line, each targeting
//! a single unit of that line. Values pass through exactly as configured.

use rust_decimal::Decimal;
use serde::Serialize;
use smallvec::{SmallVec, smallvec};

use crate::{
    cart::CartLine,
    tiers::{DiscountValue, Tier},
};

/// One proposed discount application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscountCandidate {
    message: String,
    targets: SmallVec<[CandidateTarget; 1]>,
    value: CandidateValue,
}

impl DiscountCandidate {
    /// Candidate discounting one unit of a cart line.
    pub fn for_line(
        line_id: impl Into<String>,
        value: CandidateValue,
        message: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            targets: smallvec![CandidateTarget::CartLine(CartLineTarget {
                id: line_id.into(),
                quantity: Some(1),
            })],
            value,
        }
    }

    /// Return the message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Return the targets.
    pub fn targets(&self) -> &[CandidateTarget] {
        &self.targets
    }

    /// Return the value.
    pub fn value(&self) -> &CandidateValue {
        &self.value
    }
}

/// What a candidate applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CandidateTarget {
    /// A cart line.
    CartLine(CartLineTarget),
}

/// Cart line target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineTarget {
    /// Cart line id
    pub id: String,

    /// Units of the line to discount; the whole line when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,
}

/// Candidate value in the platform's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CandidateValue {
    /// `{ "percentage": { "value": ... } }`
    Percentage {
        /// Percentage on a 0-100 scale
        value: Decimal,
    },

    /// `{ "fixedAmount": { "amount": ... } }`
    FixedAmount {
        /// Amount off
        amount: Decimal,
    },
}

impl From<DiscountValue> for CandidateValue {
    fn from(discount: DiscountValue) -> Self {
        match discount {
            DiscountValue::Percentage(value) => CandidateValue::Percentage { value },
            DiscountValue::FixedAmount(amount) => CandidateValue::FixedAmount { amount },
        }
    }
}

/// One candidate per eligible line, in line order.
pub fn compose(tier: &Tier, eligible: &[&CartLine]) -> Vec<DiscountCandidate> {
    let value = CandidateValue::from(*tier.discount());

    eligible
        .iter()
        .map(|line| DiscountCandidate::for_line(line.id(), value, tier.message()))
        .collect()
}
