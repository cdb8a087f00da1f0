//! Cast helpers for DSA smart accounts.
//!
//! A DSA account executes a batch of pre-encoded operations ("spells") through a
//! single `cast` call. This crate builds that call: it estimates gas for a cast
//! and encodes the `cast` call data, delegating everything chain-specific to a
//! [`Dsa`] facade.
//!
//! ```no_run
//! use dsa_cast::{CastHelpers, Dsa, Spell, Spells};
//!
//! # async fn demo<D: Dsa>(dsa: &D) -> Result<(), dsa_cast::CastError> {
//! let mut spells = Spells::new();
//! spells.add(Spell::new("BASIC-A", vec![0x01]));
//!
//! let helpers = CastHelpers::new(dsa);
//! let call_data = helpers.encode_abi(spells).await?;
//! println!("cast call data: {call_data}");
//! # Ok(())
//! # }
//! ```

pub mod abi;
pub mod addresses;
pub mod cast;
pub mod client;
pub mod config;
pub mod dsa;
pub mod error;
#[cfg(feature = "logging")]
pub mod logging;
pub mod spells;

pub use abi::{AccountContract, AccountVersion, CastArgs, CoreContract};
pub use addresses::GENESIS_ADDRESS;
pub use cast::{CastHelpers, EncodeAbiInput, EncodeAbiParams, EstimateGasParams};
pub use client::DsaClient;
pub use config::DsaConfig;
pub use dsa::{Dsa, EstimateGasRequest};
pub use error::CastError;
pub use spells::{EncodedSpells, Spell, Spells};
