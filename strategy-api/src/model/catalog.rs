//! In-memory catalog of the pools and assets a strategy can use.
//!
//! The catalog is supplied by the caller and read-only afterwards. Lists are
//! small, so lookups are linear scans in listing order.

use crate::model::asset::{Asset, AssetInfo};
use crate::model::ids::PoolId;
use crate::model::pool::Pool;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Symbol shown for an asset reference that matches nothing in the catalog.
pub const UNKNOWN_SYMBOL: &str = "Unknown";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pools: Vec<Pool>,
    #[serde(default)]
    assets: Vec<Asset>,
}

impl Catalog {
    pub fn new(pools: Vec<Pool>, assets: Vec<Asset>) -> Self {
        Self { pools, assets }
    }

    /// Parses a catalog from its JSON form (`{"pools": [...], "assets": [...]}`).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn get_pool(&self, pool_id: &PoolId) -> Option<&Pool> {
        self.pools.iter().find(|p| p.get_pool_id() == pool_id)
    }

    pub fn get_pools(&self) -> &[Pool] {
        &self.pools
    }

    pub fn get_assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Rate of a pool, 0 for pools the catalog does not know.
    pub fn rate_of(&self, pool_id: &PoolId) -> f64 {
        self.get_pool(pool_id).map(Pool::get_rate).unwrap_or(0.0)
    }

    /// Resolves the display symbol of an asset reference.
    ///
    /// Tokens match on address first, then on asset id. Native coins match on denom.
    pub fn asset_symbol(&self, info: &AssetInfo) -> &str {
        let found = match info {
            AssetInfo::Token { contract_addr } => self
                .assets
                .iter()
                .find(|a| a.get_address() == Some(contract_addr.as_str()))
                .or_else(|| self.assets.iter().find(|a| a.get_id() == contract_addr)),
            AssetInfo::NativeToken { denom } => self
                .assets
                .iter()
                .find(|a| a.get_denom() == Some(denom.as_str())),
        };
        found.map(Asset::get_symbol).unwrap_or(UNKNOWN_SYMBOL)
    }

    /// Asset symbols of a pool joined as a pair label, e.g. "LUNA / UST".
    pub fn pair_label(&self, pool: &Pool) -> String {
        pool.get_pool_assets()
            .iter()
            .map(|asset| self.asset_symbol(&asset.info))
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::pool::PoolAsset;

    fn create_catalog() -> Catalog {
        let assets = vec![
            Asset::new("luna", "LUNA").with_denom("uluna"),
            Asset::new("astro", "ASTRO").with_address("terra1astro"),
            Asset::new("terra1mars", "MARS"),
        ];
        let pools = vec![Pool::new(
            "luna-astro",
            vec![
                PoolAsset::new(AssetInfo::native("uluna")),
                PoolAsset::new(AssetInfo::token("terra1astro")),
            ],
            vec![0.15],
        )];
        Catalog::new(pools, assets)
    }

    #[test]
    fn test_token_symbol_resolution() {
        let catalog = create_catalog();
        assert_eq!(catalog.asset_symbol(&AssetInfo::token("terra1astro")), "ASTRO");
        // Falls back to matching the asset id
        assert_eq!(catalog.asset_symbol(&AssetInfo::token("terra1mars")), "MARS");
        assert_eq!(catalog.asset_symbol(&AssetInfo::token("terra1none")), UNKNOWN_SYMBOL);
    }

    #[test]
    fn test_native_symbol_resolution() {
        let catalog = create_catalog();
        assert_eq!(catalog.asset_symbol(&AssetInfo::native("uluna")), "LUNA");
        // Native coins never fall back to the id
        assert_eq!(catalog.asset_symbol(&AssetInfo::native("luna")), UNKNOWN_SYMBOL);
    }

    #[test]
    fn test_pair_label() {
        let catalog = create_catalog();
        let pool = catalog.get_pool(&PoolId::new("luna-astro")).unwrap();
        assert_eq!(catalog.pair_label(pool), "LUNA / ASTRO");
    }

    #[test]
    fn test_rate_of_unknown_pool() {
        let catalog = create_catalog();
        assert_eq!(catalog.rate_of(&PoolId::new("luna-astro")), 0.15);
        assert_eq!(catalog.rate_of(&PoolId::new("missing")), 0.0);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "pools": [{"poolId": "A", "poolAssets": [], "percentageAPRs": [0.1]}],
            "assets": [{"id": "x", "symbol": "X"}]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.get_pools().len(), 1);
        assert_eq!(catalog.get_assets().len(), 1);

        assert!(Catalog::from_json("{\"pools\": 3}").is_err());
    }
}
