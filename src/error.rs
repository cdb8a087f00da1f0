use thiserror::Error;

/// Errors that can occur while estimating or encoding a cast.
#[derive(Debug, Error)]
pub enum CastError {
    #[error("please configure the DSA instance by calling `set_instance(dsa_id)`. More details: https://docs.instadapp.io/setup")]
    InstanceNotConfigured,

    #[error("abi is not defined for account method `{method}`")]
    AbiNotDefined { method: String },

    #[error("unexpected account method signature: {0}")]
    UnexpectedSignature(String),

    #[error("abi error: {0}")]
    Abi(#[from] alloy_dyn_abi::Error),

    /// A failure surfaced by the DSA facade, passed through untouched.
    #[error(transparent)]
    Dsa(#[from] anyhow::Error),
}
