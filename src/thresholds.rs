//! Thresholds
//!
//! Decides, per tier, which cart lines are eligible and whether their aggregate meets the tier's
//! threshold. Amounts are summed in exact decimal arithmetic.

use std::fmt;

use rust_decimal::Decimal;
use smallvec::SmallVec;

use crate::{
    cart::CartLine,
    tiers::{Threshold, Tier},
};

/// Eligible lines of a single tier, in cart order.
pub type EligibleLines<'c> = SmallVec<[&'c CartLine; 8]>;

/// Aggregate measured over a tier's eligible lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement {
    /// Total units.
    Quantity(u64),

    /// Total subtotal.
    Amount(Decimal),
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::Quantity(quantity) => write!(f, "{quantity} units"),
            Measurement::Amount(amount) => write!(f, "{amount} spend"),
        }
    }
}

/// Why a tier contributed no candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierSkip {
    /// The tier targets no products.
    NoTargets,

    /// The tier would have no effect even if met.
    NotLive,

    /// No cart line carries a targeted product.
    NoEligibleLines,

    /// Eligible lines exist but fall short of the threshold.
    ThresholdNotMet {
        /// Aggregate over the eligible lines
        measured: Measurement,
        /// Threshold required
        required: Threshold,
    },
}

impl fmt::Display for TierSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierSkip::NoTargets => write!(f, "no targeted products"),
            TierSkip::NotLive => write!(f, "tier has no effect"),
            TierSkip::NoEligibleLines => write!(f, "no eligible cart lines"),
            TierSkip::ThresholdNotMet { measured, required } => {
                write!(f, "measured {measured}, required {required}")
            }
        }
    }
}

/// Outcome of evaluating one tier against the cart.
#[derive(Debug, Clone, PartialEq)]
pub enum TierEvaluation<'c> {
    /// Threshold met; every eligible line receives the tier's discount.
    Met(EligibleLines<'c>),

    /// The tier contributes nothing.
    Skipped(TierSkip),
}

/// Lines that are product variants of a product the tier targets.
pub fn eligible_lines<'c>(tier: &Tier, lines: &'c [CartLine]) -> EligibleLines<'c> {
    lines
        .iter()
        .filter(|line| line.product_id().is_some_and(|product| tier.targets(product)))
        .collect()
}

/// Aggregate the eligible lines in the unit the threshold is expressed in.
pub fn measure(threshold: &Threshold, lines: &[&CartLine]) -> Measurement {
    match threshold {
        Threshold::Quantity(_) => Measurement::Quantity(
            lines
                .iter()
                .fold(0u64, |total, line| total.saturating_add(line.quantity())),
        ),
        Threshold::Amount(_) => Measurement::Amount(
            lines
                .iter()
                .fold(Decimal::ZERO, |total, line| total.saturating_add(line.subtotal())),
        ),
    }
}

/// Inclusive threshold check.
pub fn threshold_met(threshold: &Threshold, measured: Measurement) -> bool {
    match (threshold, measured) {
        (Threshold::Quantity(required), Measurement::Quantity(total)) => total >= *required,
        (Threshold::Amount(required), Measurement::Amount(total)) => total >= *required,
        _ => false,
    }
}

/// Evaluate a tier against the cart lines.
pub fn evaluate<'c>(tier: &Tier, lines: &'c [CartLine]) -> TierEvaluation<'c> {
    if tier.has_no_targets() {
        return TierEvaluation::Skipped(TierSkip::NoTargets);
    }

    if !tier.is_live() {
        return TierEvaluation::Skipped(TierSkip::NotLive);
    }

    let eligible = eligible_lines(tier, lines);

    if eligible.is_empty() {
        return TierEvaluation::Skipped(TierSkip::NoEligibleLines);
    }

    let measured = measure(tier.threshold(), &eligible);

    if threshold_met(tier.threshold(), measured) {
        TierEvaluation::Met(eligible)
    } else {
        TierEvaluation::Skipped(TierSkip::ThresholdNotMet {
            measured,
            required: *tier.threshold(),
        })
    }
}
