//! Saved strategies and the figures derived from an allocation.

use crate::model::allocation::Allocation;
use serde::{Deserialize, Serialize};

/// Total value and value-weighted yield of a set of allocations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldSummary {
    pub total_value: f64,
    /// Σ(amount × rate) / Σ(amount), or 0 when nothing is allocated.
    pub weighted_yield: f64,
}

/// A named snapshot of allocations. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    name: String,
    allocations: Vec<Allocation>,
    total_value: f64,
    weighted_yield: f64,
}

impl Strategy {
    pub fn new(
        name: impl Into<String>,
        allocations: Vec<Allocation>,
        summary: YieldSummary,
    ) -> Self {
        Self {
            name: name.into(),
            allocations,
            total_value: summary.total_value,
            weighted_yield: summary.weighted_yield,
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    pub fn get_total_value(&self) -> f64 {
        self.total_value
    }

    pub fn get_weighted_yield(&self) -> f64 {
        self.weighted_yield
    }

    pub fn get_summary(&self) -> YieldSummary {
        YieldSummary {
            total_value: self.total_value,
            weighted_yield: self.weighted_yield,
        }
    }
}
