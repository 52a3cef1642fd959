//! Liquidity pool definitions.

use crate::model::asset::AssetInfo;
use crate::model::ids::PoolId;
use serde::{Deserialize, Serialize};

/// One asset slot of a pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolAsset {
    pub info: AssetInfo,
}

impl PoolAsset {
    pub fn new(info: AssetInfo) -> Self {
        Self { info }
    }
}

/// A liquidity pool offering a yield on deposited value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    pool_id: PoolId,

    /// Assets held by the pool, in listing order.
    #[serde(default)]
    pool_assets: Vec<PoolAsset>,

    /// Annual percentage rates as fractions (0.10 = 10%).
    /// Only the first entry is used for yield calculations.
    #[serde(default, rename = "percentageAPRs")]
    percentage_aprs: Vec<f64>,
}

impl Pool {
    pub fn new(
        pool_id: impl Into<PoolId>,
        pool_assets: Vec<PoolAsset>,
        percentage_aprs: Vec<f64>,
    ) -> Self {
        Self {
            pool_id: pool_id.into(),
            pool_assets,
            percentage_aprs,
        }
    }

    pub fn get_pool_id(&self) -> &PoolId {
        &self.pool_id
    }

    pub fn get_pool_assets(&self) -> &[PoolAsset] {
        &self.pool_assets
    }

    /// The rate used for yield calculations: the first APR, or 0 when none is listed.
    pub fn get_rate(&self) -> f64 {
        self.percentage_aprs.first().copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_uses_first_apr() {
        let pool = Pool::new("A", vec![], vec![0.12, 0.50]);
        assert_eq!(pool.get_rate(), 0.12);

        let empty = Pool::new("B", vec![], vec![]);
        assert_eq!(empty.get_rate(), 0.0);
    }

    #[test]
    fn test_pool_deserialization() {
        let json = r#"{
            "poolId": "pool-1",
            "poolAssets": [
                {"info": {"native_token": {"denom": "uluna"}}},
                {"info": {"token": {"contract_addr": "terra1xyz"}}}
            ],
            "percentageAPRs": [0.08]
        }"#;
        let pool: Pool = serde_json::from_str(json).unwrap();
        assert_eq!(pool.get_pool_id().as_str(), "pool-1");
        assert_eq!(pool.get_pool_assets().len(), 2);
        assert_eq!(pool.get_pool_assets()[0].info, AssetInfo::native("uluna"));
        assert_eq!(pool.get_rate(), 0.08);
    }
}
