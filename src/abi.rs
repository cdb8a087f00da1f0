//! DSA account contract ABIs and `cast` argument encoding.
//!
//! The account contract exposes a single batching entry point:
//!
//! - v1: `cast(address[] _targets, bytes[] _datas, address _origin)`
//! - v2: `cast(string[] _targetNames, bytes[] _datas, address _origin)`
//!
//! Cast arguments are carried as strings and bytes and coerced to whatever the
//! method's parameter types are, so the same [`CastArgs`] encodes against
//! either version.

use crate::error::CastError;
use crate::spells::EncodedSpells;
use alloy_dyn_abi::{DynSolType, DynSolValue, JsonAbiExt, Specifier};
use alloy_json_abi::{Function, JsonAbi, Param};
use alloy_primitives::{Address, Bytes};
use alloy_sol_macro::sol;
use serde::{Deserialize, Serialize};
use std::fmt;

sol! {
    #[sol(abi)]
    interface InstaAccount {
        function cast(address[] calldata _targets, bytes[] calldata _datas, address _origin) external payable;
    }

    #[sol(abi)]
    interface InstaAccountV2 {
        function cast(string[] calldata _targetNames, bytes[] calldata _datas, address _origin) external payable returns (bytes32);
    }
}

/// Name of the account method that executes a batch of spells.
pub const CAST_METHOD: &str = "cast";

/// DSA account implementation version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AccountVersion {
    V1,
    #[default]
    V2,
}

impl TryFrom<u8> for AccountVersion {
    type Error = String;

    fn try_from(version: u8) -> Result<Self, Self::Error> {
        match version {
            1 => Ok(AccountVersion::V1),
            2 => Ok(AccountVersion::V2),
            other => Err(format!("unsupported DSA account version: {other}")),
        }
    }
}

impl From<AccountVersion> for u8 {
    fn from(version: AccountVersion) -> Self {
        match version {
            AccountVersion::V1 => 1,
            AccountVersion::V2 => 2,
        }
    }
}

impl fmt::Display for AccountVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", u8::from(*self))
    }
}

/// Core DSA contracts whose ABI the facade knows how to look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreContract {
    /// The account contract a cast is sent to.
    Account,
}

impl CoreContract {
    pub fn abi(&self, version: AccountVersion) -> JsonAbi {
        match self {
            CoreContract::Account => account_abi(version),
        }
    }
}

/// The full ABI of the account contract for `version`.
pub fn account_abi(version: AccountVersion) -> JsonAbi {
    match version {
        AccountVersion::V1 => InstaAccount::abi::contract(),
        AccountVersion::V2 => InstaAccountV2::abi::contract(),
    }
}

/// Look up the descriptor of `method` in `abi`. Overloads resolve to the first entry.
pub fn get_interface(abi: &JsonAbi, method: &str) -> Option<Function> {
    abi.function(method)
        .and_then(|overloads| overloads.first())
        .cloned()
}

/// The `[targets, spells, origin]` argument list of the account's `cast` method.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CastArgs {
    pub targets: Vec<String>,
    pub spells: Vec<Bytes>,
    pub origin: String,
}

impl CastArgs {
    pub fn new(encoded: EncodedSpells, origin: impl Into<String>) -> Self {
        Self {
            targets: encoded.targets,
            spells: encoded.spells,
            origin: origin.into(),
        }
    }

    /// Coerce the arguments into ABI values typed after `function`'s inputs.
    pub fn to_values(&self, function: &Function) -> Result<Vec<DynSolValue>, CastError> {
        let [targets_param, spells_param, origin_param] = function.inputs.as_slice() else {
            return Err(CastError::UnexpectedSignature(format!(
                "`{}` takes {} arguments, expected (targets, datas, origin)",
                function.signature(),
                function.inputs.len()
            )));
        };

        let target_ty = array_item(targets_param)?;
        let targets = self
            .targets
            .iter()
            .map(|target| target_ty.coerce_str(target))
            .collect::<Result<Vec<_>, _>>()?;

        let spell_ty = array_item(spells_param)?;
        let spells = self
            .spells
            .iter()
            .map(|data| match &spell_ty {
                DynSolType::Bytes => Ok(DynSolValue::Bytes(data.to_vec())),
                other => other.coerce_str(&data.to_string()),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let origin = origin_param.resolve()?.coerce_str(&self.origin)?;

        Ok(vec![
            DynSolValue::Array(targets),
            DynSolValue::Array(spells),
            origin,
        ])
    }

    /// Selector-prefixed call data for `function` applied to these arguments.
    pub fn encode(&self, function: &Function) -> Result<Bytes, CastError> {
        let values = self.to_values(function)?;
        Ok(function.abi_encode_input(&values)?.into())
    }
}

fn array_item(param: &Param) -> Result<DynSolType, CastError> {
    match param.resolve()? {
        DynSolType::Array(item) => Ok(*item),
        other => Err(CastError::UnexpectedSignature(format!(
            "parameter `{}` is `{other}`, expected a dynamic array",
            param.name
        ))),
    }
}

/// Local binding of an account ABI to a deployed account address.
///
/// Encoding is a pure data transformation; nothing here touches the network.
#[derive(Debug, Clone)]
pub struct AccountContract {
    abi: JsonAbi,
    address: Address,
}

impl AccountContract {
    pub fn new(abi: JsonAbi, address: Address) -> Self {
        Self { abi, address }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// ABI-encode a call to `method` with `args`.
    pub fn encode_call(&self, method: &str, args: &CastArgs) -> Result<Bytes, CastError> {
        let function = get_interface(&self.abi, method).ok_or_else(|| CastError::AbiNotDefined {
            method: method.to_string(),
        })?;
        args.encode(&function)
    }
}
