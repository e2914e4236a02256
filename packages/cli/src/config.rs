use anyhow::{Context, Result};
use launchpad_types::Credential;
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};
use utils::{
    config::ConfigExt,
    evm_client::{EvmEndpoint, EvmSigningClientConfig},
};

/// The fully parsed and validated config struct we use in the application
/// this is built up from the ConfigBuilder which can load from multiple sources (in order of preference):
///
/// 1. cli args
/// 2. environment variables
/// 3. config file
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// The log-level to use, in the format of [tracing directives](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html#directives).
    /// Default is `["info"]`
    pub log_level: Vec<String>,

    /// The directory relative output paths are resolved against
    /// Default is `.`
    pub data: PathBuf,

    /// The rpc endpoint of the chain to provision on
    /// Default is `http://127.0.0.1:8545`
    pub evm_endpoint: String,

    /// Mnemonic or private key of the operator (usually leave this as None in config file and cli args, rather override in env)
    pub credential: Option<Credential>,

    /// The hd index of the mnemonic to sign with
    pub hd_index: Option<u32>,

    /// How often to poll for receipts, the provider default when unset
    pub poll_interval_ms: Option<u64>,

    /// Where compiled contract artifacts live
    /// Default is `artifacts/contracts`, the output of `hardhat compile`
    pub artifacts: PathBuf,

    /// The launchpad server that receives token submissions
    /// Default is `http://localhost:3000`
    pub server_endpoint: String,

    /// Bearer token for the server, if it requires one
    pub bearer_token: Option<Credential>,
}

impl ConfigExt for Config {
    fn with_data_dir(&mut self, f: fn(&mut PathBuf)) {
        f(&mut self.data);
        f(&mut self.artifacts);
    }

    fn log_levels(&self) -> impl Iterator<Item = &str> {
        self.log_level.iter().map(|s| s.as_str())
    }
}

/// Default values for the config struct
/// these are only used to fill in holes after all the parsing and loading is done
impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: vec!["info".to_string()],
            data: PathBuf::from("."),
            evm_endpoint: "http://127.0.0.1:8545".to_string(),
            credential: None,
            hd_index: None,
            poll_interval_ms: None,
            artifacts: PathBuf::from("artifacts").join("contracts"),
            server_endpoint: "http://localhost:3000".to_string(),
            bearer_token: None,
        }
    }
}

impl Config {
    pub fn signing_client_config(&self) -> Result<EvmSigningClientConfig> {
        let endpoint: EvmEndpoint = self.evm_endpoint.parse()?;
        let credential = self
            .credential
            .clone()
            .context("no credential configured, set LAUNCHPAD_CLI_CREDENTIAL")?;

        let mut config = EvmSigningClientConfig::new(endpoint, credential);
        if let Some(hd_index) = self.hd_index {
            config = config.with_hd_index(hd_index);
        }
        if let Some(poll_interval_ms) = self.poll_interval_ms {
            config = config.with_poll_interval(Duration::from_millis(poll_interval_ms));
        }

        Ok(config)
    }

    pub fn server_url(&self) -> Result<reqwest::Url> {
        reqwest::Url::parse(&self.server_endpoint)
            .with_context(|| format!("invalid server endpoint: {}", self.server_endpoint))
    }

    /// Relative paths land in the data directory
    pub fn resolve_output(&self, path: &std::path::Path) -> PathBuf {
        let path = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).to_string());
        if path.is_absolute() {
            path
        } else {
            self.data.join(path)
        }
    }
}
