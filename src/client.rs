//! A [`Dsa`] facade backed by an alloy provider.

use crate::abi::{get_interface, AccountContract, AccountVersion, CoreContract};
use crate::config::DsaConfig;
use crate::dsa::{Dsa, EstimateGasRequest};
use crate::spells::{EncodedSpells, Spells};
use alloy::network::Ethereum;
use alloy::providers::Provider;
use alloy::rpc::types::request::{TransactionInput, TransactionRequest};
use alloy::transports::Transport;
use alloy_json_abi::Function;
use alloy_primitives::Address;
use std::marker::PhantomData;
use tracing::debug;

/// DSA client: the configured account instance plus a JSON-RPC provider.
#[derive(Debug, Clone)]
pub struct DsaClient<P, T> {
    provider: P,
    config: DsaConfig,
    _transport: PhantomData<fn() -> T>,
}

impl<P, T> DsaClient<P, T>
where
    P: Provider<T, Ethereum>,
    T: Transport + Clone,
{
    pub fn new(provider: P, config: DsaConfig) -> Self {
        Self {
            provider,
            config,
            _transport: PhantomData,
        }
    }

    pub fn config(&self) -> &DsaConfig {
        &self.config
    }

    /// Point the client at a DSA account instance.
    pub fn set_instance(&mut self, instance: Address, version: AccountVersion) {
        debug!(%instance, %version, "dsa instance set");
        self.config.instance = instance;
        self.config.version = version;
    }

    pub fn set_origin(&mut self, origin: impl Into<String>) {
        self.config.origin = origin.into();
    }

    pub fn set_from(&mut self, from: Option<Address>) {
        self.config.from = from;
    }
}

impl<P, T> Dsa for DsaClient<P, T>
where
    P: Provider<T, Ethereum>,
    T: Transport + Clone,
{
    fn instance_address(&self) -> Address {
        self.config.instance
    }

    fn origin(&self) -> &str {
        &self.config.origin
    }

    fn encode_spells(&self, spells: &Spells) -> anyhow::Result<EncodedSpells> {
        Ok(spells.encode())
    }

    async fn get_address(&self) -> anyhow::Result<Address> {
        if let Some(from) = self.config.from {
            return Ok(from);
        }
        let accounts = self.provider.get_accounts().await?;
        debug!(count = accounts.len(), "eth_accounts");
        accounts
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("no account available to send the cast from"))
    }

    fn get_interface(&self, contract: CoreContract, method: &str) -> Option<Function> {
        get_interface(&contract.abi(self.config.version), method)
    }

    async fn estimate_gas(&self, request: EstimateGasRequest) -> anyhow::Result<u64> {
        let input = request.args.encode(&request.abi)?;
        let tx = TransactionRequest {
            chain_id: Some(self.config.chain_id),
            ..Default::default()
        }
        .from(request.from)
        .to(request.to)
        .value(request.value)
        .input(TransactionInput::new(input));

        debug!(to = %request.to, from = %request.from, chain_id = self.config.chain_id, "eth_estimateGas");
        let gas = self.provider.estimate_gas(&tx).await?;
        Ok(gas)
    }

    fn contract(&self, contract: CoreContract, address: Address) -> AccountContract {
        AccountContract::new(contract.abi(self.config.version), address)
    }
}
