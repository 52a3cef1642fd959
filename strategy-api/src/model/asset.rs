//! Asset definitions and the references pools hold to them.

use serde::{Deserialize, Serialize};

/// How a pool refers to one of its assets.
///
/// Serialized in the externally tagged form used by pool listings, e.g.
/// `{"token": {"contract_addr": "terra1..."}}` or `{"native_token": {"denom": "uluna"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetInfo {
    /// A contract-issued token, identified by its contract address.
    Token { contract_addr: String },
    /// A chain-native coin, identified by its denom.
    NativeToken { denom: String },
}

impl AssetInfo {
    pub fn token(contract_addr: impl Into<String>) -> Self {
        Self::Token {
            contract_addr: contract_addr.into(),
        }
    }

    pub fn native(denom: impl Into<String>) -> Self {
        Self::NativeToken {
            denom: denom.into(),
        }
    }
}

/// A known asset with its display symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    id: String,

    /// Contract address, for contract-issued tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,

    /// Native denom, for chain-native coins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    denom: Option<String>,

    /// Human-readable ticker (e.g. "LUNA").
    symbol: String,
}

impl Asset {
    pub fn new(id: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            address: None,
            denom: None,
            symbol: symbol.into(),
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_denom(mut self, denom: impl Into<String>) -> Self {
        self.denom = Some(denom.into());
        self
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn get_address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn get_denom(&self) -> Option<&str> {
        self.denom.as_deref()
    }

    pub fn get_symbol(&self) -> &str {
        &self.symbol
    }
}
