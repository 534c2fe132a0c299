//! Evaluation Observer

use std::fmt;

use tracing::{debug, info, warn};

use crate::{configuration::ConfigurationError, thresholds::TierSkip};

/// Why an evaluation produced no discount despite a usable configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoEligibility {
    /// The cart has no lines.
    EmptyCart,

    /// The request does not allow product discounts.
    MissingProductClass,

    /// Every tier was skipped.
    NoThresholdMet,
}

impl fmt::Display for NoEligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoEligibility::EmptyCart => write!(f, "cart has no lines"),
            NoEligibility::MissingProductClass => write!(f, "product discount class not active"),
            NoEligibility::NoThresholdMet => write!(f, "no tier threshold met"),
        }
    }
}

/// Observer trait for recording which branch an evaluation took.
///
/// Callbacks are passive: the evaluation never reads anything back from the observer, so an
/// observer cannot change the result.
pub trait EvaluationObserver {
    /// Called when the configuration could not be used; the result will be empty.
    fn on_configuration_malformed(&mut self, error: &ConfigurationError);

    /// Called when the evaluation resolves to an empty result for an eligibility reason.
    fn on_no_eligibility(&mut self, reason: NoEligibility);

    /// Called for each tier that contributes no candidates.
    ///
    /// # Parameters
    ///
    /// - `tier_idx`: Position of the tier in the configuration
    /// - `reason`: Why the tier was skipped
    fn on_tier_skipped(&mut self, tier_idx: usize, reason: &TierSkip);

    /// Called for each tier whose threshold was met.
    ///
    /// # Parameters
    ///
    /// - `tier_idx`: Position of the tier in the configuration
    /// - `candidates`: Number of candidates the tier produced
    fn on_tier_met(&mut self, _tier_idx: usize, _candidates: usize) {}

    /// Called once a non-empty result has been assembled.
    fn on_result(&mut self, _candidates: usize) {}
}

/// No-op observer for unobserved evaluations.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl EvaluationObserver for NoopObserver {
    fn on_configuration_malformed(&mut self, _: &ConfigurationError) {}

    fn on_no_eligibility(&mut self, _: NoEligibility) {}

    fn on_tier_skipped(&mut self, _: usize, _: &TierSkip) {}
}

/// Observer that emits structured `tracing` events.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl EvaluationObserver for TracingObserver {
    fn on_configuration_malformed(&mut self, error: &ConfigurationError) {
        warn!(%error, "configuration unusable, no discount applied");
    }

    fn on_no_eligibility(&mut self, reason: NoEligibility) {
        debug!(%reason, "no discount applied");
    }

    fn on_tier_skipped(&mut self, tier_idx: usize, reason: &TierSkip) {
        debug!(tier = tier_idx, %reason, "tier skipped");
    }

    fn on_tier_met(&mut self, tier_idx: usize, candidates: usize) {
        debug!(tier = tier_idx, candidates, "tier threshold met");
    }

    fn on_result(&mut self, candidates: usize) {
        info!(candidates, "discount candidates emitted");
    }
}
