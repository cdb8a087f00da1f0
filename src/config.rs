use crate::abi::AccountVersion;
use crate::addresses::GENESIS_ADDRESS;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Mainnet.
pub const DEFAULT_CHAIN_ID: u64 = 1;

/// Configuration of a [`DsaClient`](crate::DsaClient).
///
/// Every field is optional in serialized form; a missing `instance` leaves the
/// client unconfigured (genesis address) until [`set_instance`] is called.
///
/// [`set_instance`]: crate::DsaClient::set_instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DsaConfig {
    /// Address of the DSA account instance.
    pub instance: Address,
    /// Account version of `instance`, selects the account ABI.
    pub version: AccountVersion,
    /// Origin tag passed with every cast.
    pub origin: String,
    /// Sender used for gas estimates. Falls back to the node's first account.
    pub from: Option<Address>,
    pub chain_id: u64,
}

impl Default for DsaConfig {
    fn default() -> Self {
        Self {
            instance: GENESIS_ADDRESS,
            version: AccountVersion::default(),
            origin: GENESIS_ADDRESS.to_string(),
            from: None,
            chain_id: DEFAULT_CHAIN_ID,
        }
    }
}

impl DsaConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read DSA config {}: {e}", path.display()))?;
        Ok(Self::from_json(&contents)?)
    }

    pub fn is_configured(&self) -> bool {
        !crate::addresses::is_genesis(&self.instance)
    }
}
