use launchpad_types::ContractName;
use thiserror::Error;
use utils::error::{ArtifactError, EvmClientError};

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("Missing {0} in .env")]
    MissingAddress(&'static str),

    #[error("Invalid {name} in .env: {value:?} is not an address")]
    InvalidAddress { name: &'static str, value: String },

    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error("Unable to connect: {0:#}")]
    Client(anyhow::Error),

    #[error("{contract} deployment failed")]
    Deploy {
        contract: ContractName,
        source: EvmClientError,
    },
}
