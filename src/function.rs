//! Discount Function
//!
//! The evaluation pipeline: eligibility gate, then per tier threshold evaluation, then candidate
//! composition. Each call is a pure function of its input.

use tracing::debug_span;

use crate::{
    configuration::ConfigurationParser,
    discounts::compose,
    gate::{EligibilityGate, EvaluationError, GateOutcome},
    input::FunctionInput,
    observer::{EvaluationObserver, NoEligibility, TracingObserver},
    operations::FunctionResult,
    thresholds::{TierEvaluation, evaluate},
};

/// Tiered product discount function.
#[derive(Debug, Clone, Default)]
pub struct DiscountFunction {
    parser: ConfigurationParser,
}

impl DiscountFunction {
    /// Create a function reading configuration with the given parser.
    pub fn new(parser: ConfigurationParser) -> Self {
        Self { parser }
    }

    /// Return the configuration parser.
    pub fn parser(&self) -> &ConfigurationParser {
        &self.parser
    }

    /// Evaluate the input, reporting decisions as `tracing` events.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::MissingCart`] if the input has no cart.
    pub fn run(&self, input: &FunctionInput) -> Result<FunctionResult, EvaluationError> {
        self.run_with_observer(input, &mut TracingObserver)
    }

    /// Evaluate the input, reporting decisions to `observer`.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::MissingCart`] if the input has no cart.
    pub fn run_with_observer<O: EvaluationObserver>(
        &self,
        input: &FunctionInput,
        observer: &mut O,
    ) -> Result<FunctionResult, EvaluationError> {
        let span = debug_span!(
            "cart_lines_discounts_generate_run",
            lines = input.cart.as_ref().map_or(0, |cart| cart.len())
        );
        let _entered = span.enter();

        let gate = EligibilityGate::new(&self.parser);

        let GateOutcome::Proceed(tiers) =
            gate.check(input.cart.as_ref(), &input.discount, observer)?
        else {
            return Ok(FunctionResult::empty());
        };

        let lines = input.cart.as_ref().map_or(&[][..], |cart| cart.lines());
        let mut candidates = Vec::new();

        for (tier_idx, tier) in tiers.iter().enumerate() {
            match evaluate(tier, lines) {
                TierEvaluation::Met(eligible) => {
                    let composed = compose(tier, &eligible);

                    observer.on_tier_met(tier_idx, composed.len());
                    candidates.extend(composed);
                }
                TierEvaluation::Skipped(reason) => observer.on_tier_skipped(tier_idx, &reason),
            }
        }

        if candidates.is_empty() {
            observer.on_no_eligibility(NoEligibility::NoThresholdMet);

            return Ok(FunctionResult::empty());
        }

        observer.on_result(candidates.len());

        Ok(FunctionResult::from_candidates(candidates))
    }
}

/// Evaluate the input with the default configuration location.
///
/// # Errors
///
/// Returns [`EvaluationError::MissingCart`] if the input has no cart.
pub fn run(input: &FunctionInput) -> Result<FunctionResult, EvaluationError> {
    DiscountFunction::default().run(input)
}
