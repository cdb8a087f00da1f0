//! Gas estimation and call data encoding for account casts.

use crate::abi::{CastArgs, CoreContract, CAST_METHOD};
use crate::addresses::is_genesis;
use crate::dsa::{Dsa, EstimateGasRequest};
use crate::error::CastError;
use crate::spells::Spells;
use alloy_primitives::{Address, Bytes, U256};
use tracing::debug;

/// Parameters for [`CastHelpers::estimate_gas`].
#[derive(Debug, Clone, Default)]
pub struct EstimateGasParams {
    pub spells: Spells,
    /// Sender. Defaults to the facade's active address.
    pub from: Option<Address>,
    /// Account to cast on. Defaults to the configured instance.
    pub to: Option<Address>,
    /// Wei sent with the cast. Defaults to zero.
    pub value: Option<U256>,
}

impl EstimateGasParams {
    pub fn new(spells: Spells) -> Self {
        Self {
            spells,
            ..Default::default()
        }
    }

    pub fn from(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }

    pub fn to(mut self, to: Address) -> Self {
        self.to = Some(to);
        self
    }

    pub fn value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }
}

/// Parameters for [`CastHelpers::encode_abi`]. Unset fields fall back to the
/// facade's instance address and origin.
#[derive(Debug, Clone, Default)]
pub struct EncodeAbiParams {
    pub spells: Spells,
    pub to: Option<Address>,
    pub origin: Option<String>,
}

/// Input of [`CastHelpers::encode_abi`]: bare spells, or spells with overrides.
#[derive(Debug, Clone)]
pub enum EncodeAbiInput {
    Spells(Spells),
    Params(EncodeAbiParams),
}

impl EncodeAbiInput {
    /// Wrap bare spells into params with no overrides.
    pub fn into_params(self) -> EncodeAbiParams {
        match self {
            EncodeAbiInput::Spells(spells) => EncodeAbiParams {
                spells,
                ..Default::default()
            },
            EncodeAbiInput::Params(params) => params,
        }
    }
}

impl From<Spells> for EncodeAbiInput {
    fn from(spells: Spells) -> Self {
        EncodeAbiInput::Spells(spells)
    }
}

impl From<EncodeAbiParams> for EncodeAbiInput {
    fn from(params: EncodeAbiParams) -> Self {
        EncodeAbiInput::Params(params)
    }
}

/// Cast helpers bound to a DSA facade.
#[derive(Debug)]
pub struct CastHelpers<'a, D> {
    dsa: &'a D,
}

impl<D> Clone for CastHelpers<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for CastHelpers<'_, D> {}

impl<'a, D: Dsa> CastHelpers<'a, D> {
    pub fn new(dsa: &'a D) -> Self {
        Self { dsa }
    }

    /// Estimate the gas used by casting `params.spells` on the account.
    ///
    /// Fails with [`CastError::InstanceNotConfigured`] before touching the
    /// facade if the account resolves to the genesis address, and with
    /// [`CastError::AbiNotDefined`] if the facade has no `cast` descriptor.
    /// The estimate is returned exactly as the facade reports it.
    pub async fn estimate_gas(&self, params: EstimateGasParams) -> Result<u64, CastError> {
        let to = params.to.unwrap_or_else(|| self.dsa.instance_address());
        if is_genesis(&to) {
            return Err(CastError::InstanceNotConfigured);
        }

        let encoded = self.dsa.encode_spells(&params.spells)?;
        let args = CastArgs::new(encoded, self.dsa.origin());

        let from = match params.from {
            Some(from) => from,
            None => self.dsa.get_address().await?,
        };
        let value = params.value.unwrap_or(U256::ZERO);

        let abi = self
            .dsa
            .get_interface(CoreContract::Account, CAST_METHOD)
            .ok_or_else(|| CastError::AbiNotDefined {
                method: CAST_METHOD.to_string(),
            })?;

        debug!(%to, %from, %value, spells = args.spells.len(), "estimating cast gas");
        let gas = self
            .dsa
            .estimate_gas(EstimateGasRequest {
                abi,
                to,
                from,
                value,
                args,
            })
            .await?;
        debug!(gas, "cast gas estimated");
        Ok(gas)
    }

    /// Encode the `cast` call data for a transaction or call to the account.
    ///
    /// Accepts bare [`Spells`] or [`EncodeAbiParams`]; overrides in the params
    /// win over the facade's instance address and origin. Encoding is local,
    /// the function is async only to mirror [`estimate_gas`](Self::estimate_gas).
    pub async fn encode_abi(&self, input: impl Into<EncodeAbiInput>) -> Result<Bytes, CastError> {
        let params = input.into().into_params();
        let to = params.to.unwrap_or_else(|| self.dsa.instance_address());
        let origin = params
            .origin
            .unwrap_or_else(|| self.dsa.origin().to_string());

        if is_genesis(&to) {
            return Err(CastError::InstanceNotConfigured);
        }

        let contract = self.dsa.contract(CoreContract::Account, to);
        let encoded = self.dsa.encode_spells(&params.spells)?;
        let call_data = contract.encode_call(CAST_METHOD, &CastArgs::new(encoded, origin))?;
        debug!(%to, len = call_data.len(), "encoded cast call data");
        Ok(call_data)
    }

    /// [`encode_abi`](Self::encode_abi) as a `0x`-prefixed hex string.
    pub async fn encode_abi_hex(&self, input: impl Into<EncodeAbiInput>) -> Result<String, CastError> {
        Ok(self.encode_abi(input).await?.to_string())
    }
}
