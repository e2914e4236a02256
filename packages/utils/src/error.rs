use std::path::PathBuf;

use alloy_primitives::{Address, TxHash};
use alloy_rpc_types_eth::TransactionReceipt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvmClientError {
    #[error("HD index must be zero when using a private key (use mnemonic instead)")]
    DerivationWithPrivateKey,

    #[error("Unable to create signer: {0:#}")]
    Signer(anyhow::Error),

    #[error("Address is not a contract: {0}")]
    NotContract(Address),

    #[error("Could not get contract code at {0}: {1:#}")]
    FailedGetCode(Address, anyhow::Error),

    #[error("Send Transaction Error: {0:#}")]
    SendTransaction(anyhow::Error),

    #[error("No Transaction Receipt: {0:#}")]
    TransactionWithoutReceipt(anyhow::Error),

    #[error("Transaction reverted: {0:#?}")]
    TransactionWithReceipt(Box<TransactionReceipt>),

    #[error("Transaction {0} did not create a contract")]
    NoContractAddress(TxHash),

    #[error("Unable to parse endpoint: {0}")]
    ParseEndpoint(String),

    #[error("Unable to create web socket provider: {0:#}")]
    WebSocketProvider(anyhow::Error),

    #[error("Unable to reach chain: {0:#}")]
    ChainId(anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("No artifact for {name}, looked in: {searched:?}")]
    NotFound { name: String, searched: Vec<PathBuf> },

    #[error("Unable to read artifact {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Artifact for {0} has no creation bytecode (abstract contract or interface?)")]
    EmptyBytecode(String),

    #[error("Constructor of {name} takes {expected} argument(s), but {actual} were supplied")]
    ConstructorArity {
        name: String,
        expected: usize,
        actual: usize,
    },
}
