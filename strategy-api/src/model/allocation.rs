use crate::model::ids::PoolId;
use serde::{Deserialize, Serialize};

/// A USD amount assigned to a pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pool_id: PoolId,
    amount: f64,
}

impl Allocation {
    pub fn new(pool_id: impl Into<PoolId>, amount: f64) -> Self {
        Self {
            pool_id: pool_id.into(),
            amount,
        }
    }

    pub fn get_pool_id(&self) -> &PoolId {
        &self.pool_id
    }

    pub fn get_amount(&self) -> f64 {
        self.amount
    }
}

/// Ordered set of allocations with at most one entry per pool.
///
/// Entries keep the order in which they were last written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllocationSet {
    entries: Vec<Allocation>,
}

impl AllocationSet {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets the amount for a pool. A non-positive amount removes the entry;
    /// otherwise the entry is replaced and moved to the end.
    pub fn update(&mut self, pool_id: PoolId, amount: f64) {
        self.entries.retain(|a| a.pool_id != pool_id);
        if amount > 0.0 {
            self.entries.push(Allocation::new(pool_id, amount));
        }
    }

    pub fn get(&self, pool_id: &PoolId) -> Option<&Allocation> {
        self.entries.iter().find(|a| &a.pool_id == pool_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Allocation> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Allocation] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<Allocation> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a AllocationSet {
    type Item = &'a Allocation;
    type IntoIter = std::slice::Iter<'a, Allocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
