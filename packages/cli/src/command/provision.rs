use std::path::{Path, PathBuf};

use alloy_primitives::Address;
use alloy_sol_types::{sol, SolConstructor};
use anyhow::{Context, Result};
use chrono::Utc;
use launchpad_types::{ContractName, DeploymentRecord};
use utils::{
    artifact::{ArtifactStore, ContractArtifact},
    evm_client::deploy::ContractDeployer,
};

use crate::{args::ProvisionArgs, context::CliContext, error::ProvisionError};

sol! {
    contract BexLiquidityManager {
        constructor(address bexDex);
    }

    contract TokenFactory {
        constructor(address feeCollector, address liquidityManager, address liquidityCollector);
    }
}

pub const BEX_DEX_ADDRESS: &str = "BEX_DEX_ADDRESS";
pub const FEE_COLLECTOR_ADDRESS: &str = "FEE_COLLECTOR_ADDRESS";
pub const LIQUIDITY_COLLECTOR_ADDRESS: &str = "LIQUIDITY_COLLECTOR_ADDRESS";
pub const PRICE_FEED_ADDRESS: &str = "PRICE_FEED_ADDRESS";

/// Inputs of a provisioning run, checked and parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionAddresses {
    pub bex_dex: Address,
    pub fee_collector: Address,
    pub liquidity_collector: Address,
    pub price_feed: Option<Address>,
}

impl ProvisionArgs {
    /// Blank values count as missing.
    ///
    /// Presence of all three required addresses is checked, in order, before any is parsed.
    pub fn resolve(&self) -> Result<ProvisionAddresses, ProvisionError> {
        let bex_dex = require(BEX_DEX_ADDRESS, &self.bex_dex_address)?;
        let fee_collector = require(FEE_COLLECTOR_ADDRESS, &self.fee_collector_address)?;
        let liquidity_collector =
            require(LIQUIDITY_COLLECTOR_ADDRESS, &self.liquidity_collector_address)?;

        let bex_dex = parse_address(BEX_DEX_ADDRESS, bex_dex)?;
        let fee_collector = parse_address(FEE_COLLECTOR_ADDRESS, fee_collector)?;
        let liquidity_collector = parse_address(LIQUIDITY_COLLECTOR_ADDRESS, liquidity_collector)?;

        let price_feed = non_blank(&self.price_feed_address)
            .map(|value| parse_address(PRICE_FEED_ADDRESS, value))
            .transpose()?;

        Ok(ProvisionAddresses {
            bex_dex,
            fee_collector,
            liquidity_collector,
            price_feed,
        })
    }
}

fn require<'a>(name: &'static str, arg: &'a Option<String>) -> Result<&'a str, ProvisionError> {
    non_blank(arg).ok_or(ProvisionError::MissingAddress(name))
}

fn non_blank(arg: &Option<String>) -> Option<&str> {
    arg.as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn parse_address(name: &'static str, value: &str) -> Result<Address, ProvisionError> {
    value
        .parse::<Address>()
        .map_err(|_| ProvisionError::InvalidAddress {
            name,
            value: value.to_string(),
        })
}

/// Everything a run needs, gathered before the chain is contacted
#[derive(Debug, Clone)]
pub struct ProvisionPlan {
    pub addresses: ProvisionAddresses,
    pub bex_liquidity_manager: ContractArtifact,
    pub token_factory: ContractArtifact,
}

impl ProvisionPlan {
    pub fn prepare(args: &ProvisionArgs, store: &ArtifactStore) -> Result<Self, ProvisionError> {
        let addresses = args.resolve()?;

        let bex_liquidity_manager = store.load(ContractName::BexLiquidityManager.as_str())?;
        bex_liquidity_manager.check_constructor_arity(1)?;

        let token_factory = store.load(ContractName::TokenFactory.as_str())?;
        token_factory.check_constructor_arity(3)?;

        Ok(Self {
            addresses,
            bex_liquidity_manager,
            token_factory,
        })
    }
}

/// Deploys BexLiquidityManager, then TokenFactory wired to it
///
/// Stops at the first failure, nothing is retried or rolled back.
pub async fn provision(
    deployer: &dyn ContractDeployer,
    plan: &ProvisionPlan,
) -> Result<DeploymentRecord, ProvisionError> {
    let ProvisionAddresses {
        bex_dex,
        fee_collector,
        liquidity_collector,
        price_feed,
    } = plan.addresses.clone();

    let operator = deployer.operator();
    tracing::info!("Deploying contracts with account: {}", operator);

    let bex_liquidity_manager = deploy(
        deployer,
        ContractName::BexLiquidityManager,
        &plan.bex_liquidity_manager,
        BexLiquidityManager::constructorCall { bexDex: bex_dex }.abi_encode(),
    )
    .await?;

    let token_factory = deploy(
        deployer,
        ContractName::TokenFactory,
        &plan.token_factory,
        TokenFactory::constructorCall {
            feeCollector: fee_collector,
            liquidityManager: bex_liquidity_manager,
            liquidityCollector: liquidity_collector,
        }
        .abi_encode(),
    )
    .await?;

    Ok(DeploymentRecord {
        token_factory_address: token_factory,
        bex_liquidity_manager_address: bex_liquidity_manager,
        bex_dex_address: bex_dex,
        price_feed_address: price_feed,
        fee_collector_address: fee_collector,
        liquidity_collector_address: liquidity_collector,
        deployed_by: operator,
        timestamp: Utc::now(),
    })
}

async fn deploy(
    deployer: &dyn ContractDeployer,
    contract: ContractName,
    artifact: &ContractArtifact,
    constructor_args: Vec<u8>,
) -> Result<Address, ProvisionError> {
    tracing::info!("Deploying {}...", contract);

    let address = deployer
        .deploy_contract(contract.as_str(), artifact.creation_code(&constructor_args))
        .await
        .map_err(|source| ProvisionError::Deploy { contract, source })?;

    tracing::info!("{} deployed at: {}", contract, address);

    Ok(address)
}

pub struct Provision {
    pub record: DeploymentRecord,
    pub saved_to: Option<PathBuf>,
}

impl std::fmt::Display for Provision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.record)?;
        if let Some(path) = &self.saved_to {
            write!(f, "\n\nSaved to {}", path.display())?;
        }
        Ok(())
    }
}

impl Provision {
    pub async fn run(
        ctx: &CliContext,
        addresses: ProvisionArgs,
        output: Option<PathBuf>,
    ) -> Result<Self> {
        let plan = ProvisionPlan::prepare(&addresses, &ctx.artifacts())?;

        let client = ctx.signing_client().await?;

        let record = provision(&client, &plan).await?;

        Ok(Self::finish(
            record,
            output.map(|output| ctx.config.resolve_output(&output)),
        ))
    }

    /// Both contracts exist once a record does, so failing to save it only warns
    pub fn finish(record: DeploymentRecord, output: Option<PathBuf>) -> Self {
        let saved_to = output.and_then(|path| match save_record(&record, &path) {
            Ok(()) => Some(path),
            Err(err) => {
                tracing::warn!(
                    "Could not save deployment record to {}: {:#}",
                    path.display(),
                    err
                );
                None
            }
        });

        Self { record, saved_to }
    }
}

fn save_record(record: &DeploymentRecord, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, serde_json::to_string_pretty(record)?)
        .with_context(|| format!("writing {}", path.display()))?;

    Ok(())
}
