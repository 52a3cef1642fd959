use log::info;
use strategy::Strategy;

/// Session-scoped list of saved strategies.
///
/// Append-only: entries are identified by position and never change once stored.
#[derive(Debug, Default)]
pub struct StrategyStore {
    strategies: Vec<Strategy>,
}

impl StrategyStore {
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Appends a strategy and returns a reference to the stored entry.
    pub fn append(&mut self, strategy: Strategy) -> &Strategy {
        info!(
            "Saved strategy #{} '{}' ({} allocations)",
            self.strategies.len() + 1,
            strategy.get_name(),
            strategy.get_allocations().len()
        );
        self.strategies.push(strategy);
        &self.strategies[self.strategies.len() - 1]
    }

    pub fn get(&self, index: usize) -> Option<&Strategy> {
        self.strategies.get(index)
    }

    pub fn last(&self) -> Option<&Strategy> {
        self.strategies.last()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Strategy> {
        self.strategies.iter()
    }
}
