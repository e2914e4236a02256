pub mod deploy;
pub mod signing;

use alloy_network::EthereumWallet;
use alloy_primitives::Address;
use alloy_provider::{DynProvider, Provider, ProviderBuilder, WsConnect};
use alloy_signer_local::PrivateKeySigner;
use launchpad_types::Credential;
use signing::make_signer;
use std::{str::FromStr, sync::Arc, time::Duration};

use crate::error::EvmClientError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvmEndpoint {
    WebSocket(reqwest::Url),
    Http(reqwest::Url),
}

impl FromStr for EvmEndpoint {
    type Err = EvmClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let url =
            reqwest::Url::parse(s).map_err(|e| EvmClientError::ParseEndpoint(e.to_string()))?;
        match url.scheme() {
            "ws" | "wss" => Ok(EvmEndpoint::WebSocket(url)),
            "http" | "https" => Ok(EvmEndpoint::Http(url)),
            scheme => Err(EvmClientError::ParseEndpoint(format!(
                "could not determine endpoint from scheme {scheme} (full url: {s})"
            ))),
        }
    }
}

impl std::fmt::Display for EvmEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvmEndpoint::WebSocket(url) => write!(f, "{}", url),
            EvmEndpoint::Http(url) => write!(f, "{}", url),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EvmSigningClientConfig {
    pub endpoint: EvmEndpoint,
    pub credential: Credential,
    pub hd_index: Option<u32>,
    /// The interval at which to poll the provider for receipts
    /// if unset, will use the default of the provider (which may differ across networks)
    pub poll_interval: Option<Duration>,
}

impl EvmSigningClientConfig {
    pub fn new(endpoint: EvmEndpoint, credential: Credential) -> Self {
        Self {
            endpoint,
            credential,
            hd_index: None,
            poll_interval: None,
        }
    }

    pub fn with_hd_index(mut self, hd_index: u32) -> Self {
        self.hd_index = Some(hd_index);
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = Some(poll_interval);
        self
    }
}

/// A provider that signs and sends transactions as a single operator account
#[derive(Clone)]
pub struct EvmSigningClient {
    pub config: EvmSigningClientConfig,
    pub provider: DynProvider,
    pub signer: Arc<PrivateKeySigner>,
    pub chain_id: u64,
}

impl EvmSigningClient {
    pub async fn new(config: EvmSigningClientConfig) -> Result<Self, EvmClientError> {
        let signer = make_signer(&config.credential, config.hd_index)?;

        let wallet: EthereumWallet = signer.clone().into();

        // recommended fillers: gas, blob gas, nonce and chain id
        let builder = ProviderBuilder::new().wallet(wallet);

        let provider = match &config.endpoint {
            EvmEndpoint::WebSocket(url) => {
                let ws = WsConnect::new(url.clone());
                DynProvider::new(
                    builder
                        .connect_ws(ws)
                        .await
                        .map_err(|e| EvmClientError::WebSocketProvider(e.into()))?,
                )
            }
            EvmEndpoint::Http(url) => DynProvider::new(builder.connect_http(url.clone())),
        };

        if let Some(poll_interval) = config.poll_interval {
            provider.client().set_poll_interval(poll_interval);
        }

        let chain_id = provider
            .get_chain_id()
            .await
            .map_err(|e| EvmClientError::ChainId(e.into()))?;

        tracing::debug!(
            "Connected to chain {} at {} as {}",
            chain_id,
            config.endpoint,
            signer.address()
        );

        Ok(Self {
            config,
            provider,
            signer: Arc::new(signer),
            chain_id,
        })
    }

    pub fn address(&self) -> Address {
        self.signer.address()
    }
}

impl std::fmt::Debug for EvmSigningClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvmSigningClient")
            .field("endpoint", &self.config.endpoint)
            .field("chain_id", &self.chain_id)
            .field("address", &self.address())
            .finish()
    }
}
