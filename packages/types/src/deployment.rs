use alloy_primitives::Address;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The contracts stood up by a provisioning run, in deployment order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ContractName {
    BexLiquidityManager,
    TokenFactory,
}

impl ContractName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractName::BexLiquidityManager => "BexLiquidityManager",
            ContractName::TokenFactory => "TokenFactory",
        }
    }
}

impl std::fmt::Display for ContractName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of a successful provisioning run
///
/// Only ever logged, unless the operator explicitly asks for it to be written out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    #[schema(value_type = String)]
    pub token_factory_address: Address,
    #[schema(value_type = String)]
    pub bex_liquidity_manager_address: Address,
    #[schema(value_type = String)]
    pub bex_dex_address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub price_feed_address: Option<Address>,
    #[schema(value_type = String)]
    pub fee_collector_address: Address,
    #[schema(value_type = String)]
    pub liquidity_collector_address: Address,
    #[schema(value_type = String)]
    pub deployed_by: Address,
    #[schema(value_type = String)]
    pub timestamp: DateTime<Utc>,
}

impl DeploymentRecord {
    /// Key-value pairs in the order they are shown to the operator
    pub fn summary_entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![
            ("tokenFactoryAddress", self.token_factory_address.to_string()),
            (
                "bexLiquidityManagerAddress",
                self.bex_liquidity_manager_address.to_string(),
            ),
            ("bexDexAddress", self.bex_dex_address.to_string()),
        ];

        if let Some(price_feed) = self.price_feed_address {
            entries.push(("priceFeedAddress", price_feed.to_string()));
        }

        entries.extend([
            ("feeCollectorAddress", self.fee_collector_address.to_string()),
            (
                "liquidityCollectorAddress",
                self.liquidity_collector_address.to_string(),
            ),
            ("deployedBy", self.deployed_by.to_string()),
            (
                "timestamp",
                self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            ),
        ]);

        entries
    }
}

impl std::fmt::Display for DeploymentRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Deployment Info: {{")?;
        for (key, value) in self.summary_entries() {
            writeln!(f, "  {key}: '{value}',")?;
        }
        write!(f, "}}")
    }
}
