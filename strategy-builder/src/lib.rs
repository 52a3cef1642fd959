use log::{debug, info, warn};

use strategy::{Catalog, PoolId, Strategy, YieldSummary};

use crate::engine::AllocationEngine;
use crate::store::StrategyStore;

pub mod config;
pub mod engine;
pub mod error;
pub mod persistence;
pub mod session;
pub mod store;
pub mod view;

/// One selectable pool as presented to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolRow {
    pub pool_id: PoolId,
    /// Asset pair label, e.g. "LUNA / UST".
    pub label: String,
    /// First APR of the pool (0 when none is listed).
    pub rate: f64,
    /// Amount currently allocated in the draft.
    pub amount: Option<f64>,
}

/// One allocation line of a saved strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyRow {
    pub label: String,
    pub amount: f64,
}

pub struct StrategyBuilder {
    // Inputs
    catalog: Catalog,
    selected: Vec<PoolId>,

    // Session state
    draft: AllocationEngine,
    store: StrategyStore,
}

impl StrategyBuilder {
    /// Creates a builder over `catalog`. An empty selection selects every pool.
    pub fn new(catalog: Catalog, selected: Vec<PoolId>) -> Self {
        let selected = if selected.is_empty() {
            catalog
                .get_pools()
                .iter()
                .map(|p| p.get_pool_id().clone())
                .collect()
        } else {
            selected
        };

        for pool_id in &selected {
            if catalog.get_pool(pool_id).is_none() {
                warn!("Selected pool {} is not in the catalog, skipping", pool_id);
            }
        }
        info!(
            "Strategy builder ready: {} pools in catalog, {} selected",
            catalog.get_pools().len(),
            selected.len()
        );

        Self {
            catalog,
            selected,
            draft: AllocationEngine::new(),
            store: StrategyStore::new(),
        }
    }

    fn is_selectable(&self, pool_id: &PoolId) -> bool {
        self.selected.contains(pool_id) && self.catalog.get_pool(pool_id).is_some()
    }

    /// Rows for the selected pools that exist in the catalog, in selection order.
    pub fn pool_rows(&self) -> Vec<PoolRow> {
        self.selected
            .iter()
            .filter_map(|pool_id| self.catalog.get_pool(pool_id))
            .map(|pool| PoolRow {
                pool_id: pool.get_pool_id().clone(),
                label: self.catalog.pair_label(pool),
                rate: pool.get_rate(),
                amount: self
                    .draft
                    .get_allocation(pool.get_pool_id())
                    .map(|a| a.get_amount()),
            })
            .collect()
    }

    /// Edits the draft allocation of a selected pool. Other pools are ignored.
    pub fn set_allocation(&mut self, pool_id: impl Into<PoolId>, amount_text: &str) {
        let pool_id = pool_id.into();
        if !self.is_selectable(&pool_id) {
            debug!("Ignoring allocation for unselected pool {}", pool_id);
            return;
        }
        self.draft.set_allocation(pool_id, amount_text, &self.catalog);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.set_name(name);
    }

    pub fn can_commit(&self) -> bool {
        self.draft.can_commit()
    }

    /// Saves the draft and starts a new one.
    ///
    /// Does nothing and returns `None` unless the draft is named and non-empty.
    pub fn commit(&mut self) -> Option<&Strategy> {
        match self.draft.take_snapshot() {
            Some(strategy) => Some(self.store.append(strategy)),
            None => {
                debug!("Commit ignored: draft needs a name and at least one allocation");
                None
            }
        }
    }

    /// Allocation lines of a saved strategy whose pools are in the catalog.
    pub fn strategy_rows(&self, strategy: &Strategy) -> Vec<StrategyRow> {
        strategy
            .get_allocations()
            .iter()
            .filter_map(|allocation| {
                self.catalog
                    .get_pool(allocation.get_pool_id())
                    .map(|pool| StrategyRow {
                        label: self.catalog.pair_label(pool),
                        amount: allocation.get_amount(),
                    })
            })
            .collect()
    }

    pub fn get_draft(&self) -> &AllocationEngine {
        &self.draft
    }

    pub fn get_summary(&self) -> YieldSummary {
        self.draft.get_summary()
    }

    pub fn get_store(&self) -> &StrategyStore {
        &self.store
    }

    pub fn get_catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn get_selected(&self) -> &[PoolId] {
        &self.selected
    }
}
