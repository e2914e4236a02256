use anyhow::Result;
use launchpad_form::{HttpSubmitter, SimulatedSubmitter, TokenSubmitter};
use utils::{artifact::ArtifactStore, evm_client::EvmSigningClient};

use crate::{config::Config, error::ProvisionError};

pub struct CliContext {
    pub config: Config,
}

impl CliContext {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn artifacts(&self) -> ArtifactStore {
        ArtifactStore::new(&self.config.artifacts)
    }

    /// Connects to the configured chain as the operator
    pub async fn signing_client(&self) -> Result<EvmSigningClient, ProvisionError> {
        let client_config = self
            .config
            .signing_client_config()
            .map_err(ProvisionError::Client)?;

        EvmSigningClient::new(client_config)
            .await
            .map_err(|e| ProvisionError::Client(e.into()))
    }

    pub fn submitter(&self, simulate: bool) -> Result<Box<dyn TokenSubmitter>> {
        if simulate {
            return Ok(Box::new(SimulatedSubmitter::default()));
        }

        let mut submitter = HttpSubmitter::new(&self.config.server_url()?)?;
        if let Some(token) = self.config.bearer_token.clone() {
            submitter = submitter.with_bearer_token(token);
        }

        Ok(Box::new(submitter))
    }
}
