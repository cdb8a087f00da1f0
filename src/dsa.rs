//! The DSA facade: everything [`CastHelpers`](crate::CastHelpers) needs from the
//! surrounding SDK, and nothing more.

use crate::abi::{AccountContract, CastArgs, CoreContract};
use crate::spells::{EncodedSpells, Spells};
use alloy_json_abi::Function;
use alloy_primitives::{Address, U256};
use std::future::Future;

/// Arguments for a cast gas estimate, as handed to [`Dsa::estimate_gas`].
#[derive(Debug, Clone)]
pub struct EstimateGasRequest {
    /// Descriptor of the account's `cast` method.
    pub abi: Function,
    pub to: Address,
    pub from: Address,
    pub value: U256,
    pub args: CastArgs,
}

/// Narrow view of a DSA instance.
///
/// Implemented by [`DsaClient`](crate::DsaClient) on top of an alloy provider,
/// and by mocks in tests.
pub trait Dsa: Send + Sync {
    /// Address of the configured account instance. The genesis address means
    /// no instance has been configured.
    fn instance_address(&self) -> Address;

    /// Origin tag sent along with every cast.
    fn origin(&self) -> &str;

    /// Split spells into index-aligned targets and payloads.
    fn encode_spells(&self, spells: &Spells) -> anyhow::Result<EncodedSpells>;

    /// Resolve the active signing address.
    fn get_address(&self) -> impl Future<Output = anyhow::Result<Address>> + Send;

    /// Descriptor of `method` on `contract`, if the ABI has one.
    fn get_interface(&self, contract: CoreContract, method: &str) -> Option<Function>;

    /// Estimate the gas a cast would use. Performs a network round trip.
    fn estimate_gas(
        &self,
        request: EstimateGasRequest,
    ) -> impl Future<Output = anyhow::Result<u64>> + Send;

    /// Bind the ABI of `contract` to `address` for local encoding.
    fn contract(&self, contract: CoreContract, address: Address) -> AccountContract;
}
