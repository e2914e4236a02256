use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Read-only settings handed to the browser UI
///
/// Built once when the server starts and shared from there, never mutated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct FrontendConfig {
    #[schema(value_type = String)]
    pub token_factory_address: Address,
    #[schema(value_type = String)]
    pub price_feed_address: Address,
    pub initial_supply: u64,
    /// Hex encoded, as expected by `wallet_switchEthereumChain`
    pub chain_id: String,
    pub network_name: String,
    pub rpc_url: String,
    pub explorer_url: String,
    /// In the chain's native token, kept as a decimal string
    pub creation_fee: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            token_factory_address: address!("0xcCf0Dd41772745776ea6b492f6A17F9E9745eB94"),
            price_feed_address: address!("0x11B714817cBC92D402383cFd3f1037B122dcf69A"),
            initial_supply: 1_000_000_000,
            chain_id: "0x138D4".to_string(),
            network_name: "Berachain bArtio".to_string(),
            rpc_url: "https://bartio.rpc.berachain.com/".to_string(),
            explorer_url: "https://bartio.beratrail.io/".to_string(),
            creation_fee: "0.002".to_string(),
        }
    }
}

impl FrontendConfig {
    /// The config as the `CONFIG` object the browser scripts read
    pub fn browser_object(&self) -> serde_json::Value {
        serde_json::json!({
            "TOKEN_FACTORY_ADDRESS": self.token_factory_address.to_checksum(None),
            "PRICE_FEED_ADDRESS": self.price_feed_address.to_checksum(None),
            "INITIAL_SUPPLY": self.initial_supply,
            "CHAIN_ID": self.chain_id,
            "NETWORK_NAME": self.network_name,
            "RPC_URL": self.rpc_url,
            "EXPLORER_URL": self.explorer_url,
            "CREATION_FEE": self.creation_fee,
        })
    }

    /// A script defining a frozen global `CONFIG`
    pub fn to_browser_script(&self) -> String {
        format!(
            "const CONFIG = Object.freeze({});\n",
            serde_json::to_string_pretty(&self.browser_object()).unwrap_or_else(|_| "{}".into())
        )
    }

    /// The chain id as a number, if `chain_id` is well-formed hex
    pub fn chain_id_number(&self) -> Option<u64> {
        let hex = self
            .chain_id
            .strip_prefix("0x")
            .or_else(|| self.chain_id.strip_prefix("0X"))?;
        u64::from_str_radix(hex, 16).ok()
    }
}
