//! Operations
//!
//! The function's output document.

use serde::Serialize;

use crate::discounts::DiscountCandidate;

/// How the platform reconciles overlapping candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionStrategy {
    /// Apply every candidate; candidates are additive, not alternatives.
    All,
}

/// Adds product discount candidates to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDiscountsAdd {
    candidates: Vec<DiscountCandidate>,
    selection_strategy: SelectionStrategy,
}

impl ProductDiscountsAdd {
    /// Return the candidates.
    pub fn candidates(&self) -> &[DiscountCandidate] {
        &self.candidates
    }

    /// Return the selection strategy.
    pub fn selection_strategy(&self) -> SelectionStrategy {
        self.selection_strategy
    }
}

/// A single cart operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CartOperation {
    /// Add product discounts.
    ProductDiscountsAdd(ProductDiscountsAdd),
}

/// Result of one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FunctionResult {
    operations: Vec<CartOperation>,
}

impl FunctionResult {
    /// Result with no operations.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap candidates in a single apply-all batch; no candidates means no operations.
    #[must_use]
    pub fn from_candidates(candidates: Vec<DiscountCandidate>) -> Self {
        if candidates.is_empty() {
            return Self::empty();
        }

        Self {
            operations: vec![CartOperation::ProductDiscountsAdd(ProductDiscountsAdd {
                candidates,
                selection_strategy: SelectionStrategy::All,
            })],
        }
    }

    /// Return the operations.
    pub fn operations(&self) -> &[CartOperation] {
        &self.operations
    }

    /// Check if there are no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Every candidate across all operations, in order.
    pub fn candidates(&self) -> impl Iterator<Item = &DiscountCandidate> {
        self.operations
            .iter()
            .flat_map(|CartOperation::ProductDiscountsAdd(add)| add.candidates.iter())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;
    use testresult::TestResult;

    use crate::discounts::CandidateValue;

    use super::*;

    #[test]
    fn no_candidates_is_empty() -> TestResult {
        let result = FunctionResult::from_candidates(Vec::new());

        assert!(result.is_empty());
        assert_eq!(serde_json::to_value(&result)?, json!({ "operations": [] }));

        Ok(())
    }

    #[test]
    fn candidates_are_wrapped_in_one_apply_all_batch() -> TestResult {
        let candidate = DiscountCandidate::for_line(
            "line-1",
            CandidateValue::Percentage {
                value: Decimal::from(20),
            },
            "20% off",
        );

        let result = FunctionResult::from_candidates(vec![candidate.clone(), candidate]);

        let [CartOperation::ProductDiscountsAdd(add)] = result.operations() else {
            panic!("expected a single operation, got {:?}", result.operations());
        };

        assert_eq!(add.selection_strategy(), SelectionStrategy::All);
        assert_eq!(add.candidates().len(), 2);
        assert_eq!(result.candidates().count(), 2);

        assert_eq!(
            serde_json::to_value(&result)?,
            json!({
                "operations": [{
                    "productDiscountsAdd": {
                        "candidates": [
                            {
                                "message": "20% off",
                                "targets": [{ "cartLine": { "id": "line-1", "quantity": 1 } }],
                                "value": { "percentage": { "value": "20" } }
                            },
                            {
                                "message": "20% off",
                                "targets": [{ "cartLine": { "id": "line-1", "quantity": 1 } }],
                                "value": { "percentage": { "value": "20" } }
                            }
                        ],
                        "selectionStrategy": "ALL"
                    }
                }]
            })
        );

        Ok(())
    }
}
