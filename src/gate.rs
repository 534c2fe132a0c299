//! Eligibility Gate
//!
//! Preconditions checked before any tier is evaluated. Every failed precondition resolves to an
//! empty result except a structurally absent cart, which is the caller's contract violation.

use thiserror::Error;

use crate::{
    cart::Cart,
    configuration::{ConfigurationError, ConfigurationParser},
    input::DiscountInput,
    observer::{EvaluationObserver, NoEligibility},
    tiers::Tier,
};

/// Errors surfaced to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvaluationError {
    /// The request carried no cart object.
    #[error("request has no cart")]
    MissingCart,
}

/// Result of the precondition check.
#[derive(Debug, Clone, PartialEq)]
pub enum GateOutcome {
    /// Evaluate the parsed tiers; at least one is live.
    Proceed(Vec<Tier>),

    /// Resolve to an empty result.
    ShortCircuit,
}

/// Checks evaluation preconditions, parsing the configuration along the way.
#[derive(Debug, Clone, Copy)]
pub struct EligibilityGate<'p> {
    parser: &'p ConfigurationParser,
}

impl<'p> EligibilityGate<'p> {
    /// Create a gate that parses configuration with the given parser.
    pub fn new(parser: &'p ConfigurationParser) -> Self {
        Self { parser }
    }

    /// Check the preconditions in order: cart present, cart non-empty, configuration usable, a
    /// live tier exists, product discount class active.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::MissingCart`] if `cart` is `None`.
    pub fn check<O: EvaluationObserver>(
        &self,
        cart: Option<&Cart>,
        discount: &DiscountInput,
        observer: &mut O,
    ) -> Result<GateOutcome, EvaluationError> {
        let cart = cart.ok_or(EvaluationError::MissingCart)?;

        if cart.is_empty() {
            observer.on_no_eligibility(NoEligibility::EmptyCart);

            return Ok(GateOutcome::ShortCircuit);
        }

        let tiers = match self.parser.try_parse(self.parser.payload(discount)) {
            Ok(tiers) => tiers,
            Err(error) => {
                observer.on_configuration_malformed(&error);

                return Ok(GateOutcome::ShortCircuit);
            }
        };

        if !tiers.iter().any(Tier::is_live) {
            observer.on_configuration_malformed(&ConfigurationError::NoLiveTiers);

            return Ok(GateOutcome::ShortCircuit);
        }

        if !discount.has_product_class() {
            observer.on_no_eligibility(NoEligibility::MissingProductClass);

            return Ok(GateOutcome::ShortCircuit);
        }

        Ok(GateOutcome::Proceed(tiers))
    }
}
