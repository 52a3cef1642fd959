pub mod model;

pub use model::allocation::{Allocation, AllocationSet};
pub use model::asset::{Asset, AssetInfo};
pub use model::catalog::{Catalog, CatalogError};
pub use model::ids::PoolId;
pub use model::pool::{Pool, PoolAsset};
pub use model::strategy::{Strategy, YieldSummary};

