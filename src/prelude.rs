//! Tiered Discount prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartLine, Merchandise},
    configuration::{ConfigurationError, ConfigurationParser, MetafieldLocation},
    discounts::{CandidateTarget, CandidateValue, CartLineTarget, DiscountCandidate},
    function::{DiscountFunction, run},
    gate::{EligibilityGate, EvaluationError, GateOutcome},
    input::{DiscountClass, DiscountInput, FunctionInput, Metafield},
    observer::{EvaluationObserver, NoEligibility, NoopObserver, TracingObserver},
    operations::{CartOperation, FunctionResult, ProductDiscountsAdd, SelectionStrategy},
    thresholds::{Measurement, TierEvaluation, TierSkip},
    tiers::{DiscountValue, FALLBACK_MESSAGE, ProductRef, Threshold, Tier},
};
