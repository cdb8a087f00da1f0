use alloy_dyn_abi::{DynSolValue, JsonAbiExt};
use alloy_json_abi::{Function, JsonAbi};
use alloy_primitives::{address, Address, Bytes, U256};
use dsa_cast::abi::get_interface;
use dsa_cast::{
    AccountContract, CastError, CastHelpers, CoreContract, Dsa, EncodeAbiParams, EncodedSpells,
    EstimateGasParams, EstimateGasRequest, Spell, Spells, GENESIS_ADDRESS,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

const TARGET: Address = address!("aAaAaAaaAaAaAaaAaAAAAAAAAaaaAaAaAaaAaaAa");
const ACCOUNT: Address = address!("bBbBBBBbbBBBbbbBbbBbbbbBBbBbbbbBbBbbBBbB");
const SENDER: Address = address!("cCCCcCCCcCCCCCCCcCcccCCCCcCcCCcCCcCcCCcC");

/// Account ABI whose origin is a free-form tag.
fn tagged_account_abi() -> JsonAbi {
    JsonAbi::parse(["function cast(address[] _targets, bytes[] _datas, string _origin) payable"])
        .unwrap()
}

struct Facade {
    instance: Address,
    cast_defined: bool,
    delegated_calls: AtomicUsize,
    estimated: Mutex<Vec<EstimateGasRequest>>,
}

impl Facade {
    fn new(instance: Address) -> Self {
        Self {
            instance,
            cast_defined: true,
            delegated_calls: AtomicUsize::new(0),
            estimated: Mutex::new(Vec::new()),
        }
    }

    fn delegated_calls(&self) -> usize {
        self.delegated_calls.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.delegated_calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl Dsa for Facade {
    fn instance_address(&self) -> Address {
        self.instance
    }

    fn origin(&self) -> &str {
        "dsa-sdk"
    }

    fn encode_spells(&self, spells: &Spells) -> anyhow::Result<EncodedSpells> {
        self.bump();
        Ok(spells.encode())
    }

    async fn get_address(&self) -> anyhow::Result<Address> {
        self.bump();
        Ok(SENDER)
    }

    fn get_interface(&self, _contract: CoreContract, method: &str) -> Option<Function> {
        self.bump();
        if self.cast_defined {
            get_interface(&tagged_account_abi(), method)
        } else {
            None
        }
    }

    async fn estimate_gas(&self, request: EstimateGasRequest) -> anyhow::Result<u64> {
        self.bump();
        self.estimated.lock().unwrap().push(request);
        Ok(21_000)
    }

    fn contract(&self, _contract: CoreContract, address: Address) -> AccountContract {
        self.bump();
        AccountContract::new(tagged_account_abi(), address)
    }
}

fn one_spell() -> Spells {
    Spells::from(vec![Spell::new(TARGET.to_string(), vec![0x01])])
}

#[tokio::test]
async fn encodes_cast_against_default_account() {
    let dsa = Facade::new(ACCOUNT);
    let encoded = CastHelpers::new(&dsa).encode_abi(one_spell()).await.unwrap();

    let cast = get_interface(&tagged_account_abi(), "cast").unwrap();
    let expected = cast
        .abi_encode_input(&[
            DynSolValue::Array(vec![DynSolValue::Address(TARGET)]),
            DynSolValue::Array(vec![DynSolValue::Bytes(vec![0x01])]),
            DynSolValue::String("dsa-sdk".to_string()),
        ])
        .unwrap();
    assert_eq!(encoded, Bytes::from(expected));
}

#[tokio::test]
async fn unconfigured_account_fails_before_gas_estimation() {
    let dsa = Facade::new(GENESIS_ADDRESS);
    let err = CastHelpers::new(&dsa)
        .estimate_gas(EstimateGasParams {
            spells: one_spell(),
            from: Some(SENDER),
            to: None,
            value: Some(U256::ZERO),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, CastError::InstanceNotConfigured));
    assert_eq!(dsa.delegated_calls(), 0);
    assert!(dsa.estimated.lock().unwrap().is_empty());
}

#[tokio::test]
async fn missing_cast_descriptor_fails_before_gas_estimation() {
    let mut dsa = Facade::new(ACCOUNT);
    dsa.cast_defined = false;
    let err = CastHelpers::new(&dsa)
        .estimate_gas(EstimateGasParams::new(one_spell()))
        .await
        .unwrap_err();

    assert!(matches!(err, CastError::AbiNotDefined { .. }));
    assert!(dsa.estimated.lock().unwrap().is_empty());
}

#[tokio::test]
async fn bare_spells_behave_like_params_without_overrides() {
    let dsa = Facade::new(ACCOUNT);
    let helpers = CastHelpers::new(&dsa);

    let bare = helpers.encode_abi_hex(one_spell()).await.unwrap();
    let wrapped = helpers
        .encode_abi_hex(EncodeAbiParams {
            spells: one_spell(),
            to: None,
            origin: None,
        })
        .await
        .unwrap();
    assert_eq!(bare, wrapped);
}

#[tokio::test]
async fn estimate_fills_sender_and_zero_value() {
    let dsa = Facade::new(ACCOUNT);
    let gas = CastHelpers::new(&dsa)
        .estimate_gas(EstimateGasParams::new(one_spell()))
        .await
        .unwrap();
    assert_eq!(gas, 21_000);

    let estimated = dsa.estimated.lock().unwrap();
    let request = &estimated[0];
    assert_eq!(request.from, SENDER);
    assert_eq!(request.value, U256::ZERO);
    assert_eq!(request.to, ACCOUNT);
    assert_eq!(request.args.origin, "dsa-sdk");
    assert_eq!(request.args.targets.len(), request.args.spells.len());
}
