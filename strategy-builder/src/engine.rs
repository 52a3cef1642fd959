//! The working draft of a strategy and the yield computation over it.

use log::{debug, warn};
use strategy::model::allocation::{Allocation, AllocationSet};
use strategy::{Catalog, PoolId, Strategy, YieldSummary};

/// Parses user-entered amount text.
///
/// Returns `None` for anything that is not a finite, strictly positive decimal.
pub fn parse_amount(text: &str) -> Option<f64> {
    match text.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Some(amount),
        _ => None,
    }
}

/// Computes total value and value-weighted yield from scratch.
///
/// Pools missing from the catalog count towards the total with a rate of 0.
pub fn recompute(allocations: &[Allocation], catalog: &Catalog) -> YieldSummary {
    let total_value: f64 = allocations.iter().map(Allocation::get_amount).sum();
    if total_value <= 0.0 {
        return YieldSummary::default();
    }

    let weighted: f64 = allocations
        .iter()
        .map(|a| a.get_amount() * catalog.rate_of(a.get_pool_id()))
        .sum();

    YieldSummary {
        total_value,
        weighted_yield: weighted / total_value,
    }
}

/// Holds the strategy currently being edited.
#[derive(Debug, Clone, Default)]
pub struct AllocationEngine {
    name: String,
    allocations: AllocationSet,
    summary: YieldSummary,
}

impl AllocationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Applies an amount edit for a pool and refreshes the summary.
    ///
    /// Text that does not parse to a positive amount clears the pool's allocation.
    /// An amount that would push the total past the `f64` range is ignored.
    pub fn set_allocation(&mut self, pool_id: PoolId, amount_text: &str, catalog: &Catalog) {
        let amount = parse_amount(amount_text).unwrap_or(0.0);
        if amount == 0.0 {
            debug!("Clearing allocation for {} (input {:?})", pool_id, amount_text);
        }

        let mut allocations = self.allocations.clone();
        allocations.update(pool_id, amount);
        let summary = recompute(allocations.as_slice(), catalog);
        if !summary.total_value.is_finite() {
            warn!("Ignoring allocation {:?}: total value overflows", amount_text);
            return;
        }

        self.allocations = allocations;
        self.summary = summary;
    }

    /// Whether the draft has a name and at least one allocation.
    pub fn can_commit(&self) -> bool {
        !self.name.is_empty() && !self.allocations.is_empty()
    }

    /// Takes the draft as a saved strategy and resets to an empty draft.
    ///
    /// Returns `None`, leaving the draft untouched, when it cannot be committed.
    pub fn take_snapshot(&mut self) -> Option<Strategy> {
        if !self.can_commit() {
            return None;
        }
        let draft = std::mem::take(self);
        Some(Strategy::new(
            draft.name,
            draft.allocations.into_vec(),
            draft.summary,
        ))
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_allocations(&self) -> &AllocationSet {
        &self.allocations
    }

    pub fn get_allocation(&self, pool_id: &PoolId) -> Option<&Allocation> {
        self.allocations.get(pool_id)
    }

    pub fn get_summary(&self) -> YieldSummary {
        self.summary
    }
}
