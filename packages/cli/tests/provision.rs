use std::{path::Path, sync::Mutex};

use alloy_primitives::{address, Address, Bytes};
use async_trait::async_trait;
use clap::Parser;
use launchpad_cli::{
    args::{Command, ProvisionArgs},
    command::provision::{
        provision, Provision, ProvisionPlan, BEX_DEX_ADDRESS, FEE_COLLECTOR_ADDRESS,
        LIQUIDITY_COLLECTOR_ADDRESS, PRICE_FEED_ADDRESS,
    },
    error::ProvisionError,
};
use launchpad_types::{ContractName, DeploymentRecord};
use utils::{
    artifact::ArtifactStore,
    error::{ArtifactError, EvmClientError},
    evm_client::deploy::ContractDeployer,
};

const OPERATOR: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
const BEX_DEX: Address = address!("0x1111111111111111111111111111111111111111");
const FEE_COLLECTOR: Address = address!("0x2222222222222222222222222222222222222222");
const LIQUIDITY_COLLECTOR: Address = address!("0x3333333333333333333333333333333333333333");

/// Hands out sequential addresses and remembers every deployment it was asked for
struct MockDeployer {
    calls: Mutex<Vec<(String, Bytes)>>,
    fail_on: Option<ContractName>,
}

impl MockDeployer {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: None,
        }
    }

    fn failing_on(contract: ContractName) -> Self {
        Self {
            fail_on: Some(contract),
            ..Self::new()
        }
    }

    fn names(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }
}

#[async_trait]
impl ContractDeployer for MockDeployer {
    fn operator(&self) -> Address {
        OPERATOR
    }

    async fn deploy_contract(
        &self,
        name: &str,
        creation_code: Bytes,
    ) -> Result<Address, EvmClientError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push((name.to_string(), creation_code));

        if self.fail_on.map(|contract| contract.as_str()) == Some(name) {
            return Err(EvmClientError::TransactionWithoutReceipt(anyhow::anyhow!(
                "receipt timed out"
            )));
        }

        Ok(Address::with_last_byte(0xa0 + calls.len() as u8))
    }
}

fn write_artifact(dir: &Path, name: &str, inputs: &[&str], bytecode: &str) {
    let inputs = inputs
        .iter()
        .map(|input| serde_json::json!({ "name": input, "type": "address", "internalType": "address" }))
        .collect::<Vec<_>>();

    let artifact = serde_json::json!({
        "_format": "hh-sol-artifact-1",
        "contractName": name,
        "abi": [{ "type": "constructor", "stateMutability": "nonpayable", "inputs": inputs }],
        "bytecode": bytecode,
        "deployedBytecode": "0x00"
    });

    let contract_dir = dir.join(format!("{name}.sol"));
    std::fs::create_dir_all(&contract_dir).unwrap();
    std::fs::write(
        contract_dir.join(format!("{name}.json")),
        artifact.to_string(),
    )
    .unwrap();
}

fn artifacts() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_artifact(dir.path(), "BexLiquidityManager", &["_bexDex"], "0x60016002");
    write_artifact(
        dir.path(),
        "TokenFactory",
        &["_feeCollector", "_liquidityManager", "_liquidityCollector"],
        "0x60036004",
    );
    dir
}

fn full_args() -> ProvisionArgs {
    ProvisionArgs {
        bex_dex_address: Some(BEX_DEX.to_string()),
        fee_collector_address: Some(FEE_COLLECTOR.to_string()),
        liquidity_collector_address: Some(LIQUIDITY_COLLECTOR.to_string()),
        price_feed_address: None,
    }
}

fn abi_words(addresses: &[Address]) -> Vec<u8> {
    addresses
        .iter()
        .flat_map(|address| {
            let mut word = vec![0u8; 12];
            word.extend_from_slice(address.as_slice());
            word
        })
        .collect()
}

#[test]
fn missing_addresses_are_reported_in_order() {
    let store = ArtifactStore::new("/nonexistent");

    let err = ProvisionPlan::prepare(&ProvisionArgs::default(), &store).unwrap_err();
    assert!(matches!(err, ProvisionError::MissingAddress(BEX_DEX_ADDRESS)));
    assert_eq!(err.to_string(), "Missing BEX_DEX_ADDRESS in .env");

    let args = ProvisionArgs {
        bex_dex_address: Some(BEX_DEX.to_string()),
        // blank counts as missing
        fee_collector_address: Some("  ".to_string()),
        ..Default::default()
    };
    let err = ProvisionPlan::prepare(&args, &store).unwrap_err();
    assert!(matches!(err, ProvisionError::MissingAddress(FEE_COLLECTOR_ADDRESS)));

    let args = ProvisionArgs {
        liquidity_collector_address: None,
        ..full_args()
    };
    let err = ProvisionPlan::prepare(&args, &store).unwrap_err();
    assert!(matches!(
        err,
        ProvisionError::MissingAddress(LIQUIDITY_COLLECTOR_ADDRESS)
    ));

    // presence is checked for all three before anything is parsed
    let args = ProvisionArgs {
        bex_dex_address: Some("not-an-address".to_string()),
        liquidity_collector_address: None,
        ..full_args()
    };
    let err = ProvisionPlan::prepare(&args, &store).unwrap_err();
    assert!(matches!(
        err,
        ProvisionError::MissingAddress(LIQUIDITY_COLLECTOR_ADDRESS)
    ));
}

#[test]
fn malformed_address_is_a_configuration_error() {
    let store = ArtifactStore::new("/nonexistent");
    let args = ProvisionArgs {
        fee_collector_address: Some("0x1234".to_string()),
        ..full_args()
    };

    match ProvisionPlan::prepare(&args, &store).unwrap_err() {
        ProvisionError::InvalidAddress { name, value } => {
            assert_eq!(name, FEE_COLLECTOR_ADDRESS);
            assert_eq!(value, "0x1234");
        }
        other => panic!("expected invalid address, got {other:?}"),
    }
}

#[test]
fn environment_fills_in_missing_flags() {
    let other = address!("0x4444444444444444444444444444444444444444");

    let command = temp_env::with_vars(
        [
            (BEX_DEX_ADDRESS, Some(BEX_DEX.to_string())),
            (FEE_COLLECTOR_ADDRESS, Some(FEE_COLLECTOR.to_string())),
            (
                LIQUIDITY_COLLECTOR_ADDRESS,
                Some(LIQUIDITY_COLLECTOR.to_string()),
            ),
            (PRICE_FEED_ADDRESS, None),
        ],
        || {
            Command::try_parse_from([
                "launchpad-cli".to_string(),
                "provision".to_string(),
                "--fee-collector-address".to_string(),
                other.to_string(),
            ])
            .unwrap()
        },
    );

    let Command::Provision { addresses, .. } = command else {
        panic!("expected provision");
    };

    let addresses = addresses.resolve().unwrap();
    assert_eq!(addresses.bex_dex, BEX_DEX);
    // flags win over the environment
    assert_eq!(addresses.fee_collector, other);
    assert_eq!(addresses.liquidity_collector, LIQUIDITY_COLLECTOR);
    assert_eq!(addresses.price_feed, None);
}

#[test]
fn artifacts_are_checked_before_deploying() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path());

    assert!(matches!(
        ProvisionPlan::prepare(&full_args(), &store).unwrap_err(),
        ProvisionError::Artifact(ArtifactError::NotFound { .. })
    ));

    write_artifact(dir.path(), "BexLiquidityManager", &["_bexDex"], "0x6001");
    write_artifact(dir.path(), "TokenFactory", &["_feeCollector"], "0x6002");

    match ProvisionPlan::prepare(&full_args(), &store).unwrap_err() {
        ProvisionError::Artifact(ArtifactError::ConstructorArity {
            name,
            expected,
            actual,
        }) => {
            assert_eq!(name, "TokenFactory");
            assert_eq!(expected, 1);
            assert_eq!(actual, 3);
        }
        other => panic!("expected arity mismatch, got {other:?}"),
    }
}

fn plan(dir: &tempfile::TempDir) -> ProvisionPlan {
    ProvisionPlan::prepare(&full_args(), &ArtifactStore::new(dir.path())).unwrap()
}

#[tokio::test]
async fn deploys_liquidity_manager_then_factory() {
    let dir = artifacts();
    let deployer = MockDeployer::new();

    let record = provision(&deployer, &plan(&dir)).await.unwrap();

    assert_eq!(deployer.names(), vec!["BexLiquidityManager", "TokenFactory"]);

    let liquidity_manager = Address::with_last_byte(0xa1);
    let token_factory = Address::with_last_byte(0xa2);

    let calls = deployer.calls.lock().unwrap();
    let mut expected = vec![0x60, 0x01, 0x60, 0x02];
    expected.extend(abi_words(&[BEX_DEX]));
    assert_eq!(calls[0].1.to_vec(), expected);

    // the factory is wired to the liquidity manager from the first step
    let mut expected = vec![0x60, 0x03, 0x60, 0x04];
    expected.extend(abi_words(&[FEE_COLLECTOR, liquidity_manager, LIQUIDITY_COLLECTOR]));
    assert_eq!(calls[1].1.to_vec(), expected);

    assert_eq!(record.bex_liquidity_manager_address, liquidity_manager);
    assert_eq!(record.token_factory_address, token_factory);
    assert_eq!(record.bex_dex_address, BEX_DEX);
    assert_eq!(record.fee_collector_address, FEE_COLLECTOR);
    assert_eq!(record.liquidity_collector_address, LIQUIDITY_COLLECTOR);
    assert_eq!(record.price_feed_address, None);
    assert_eq!(record.deployed_by, OPERATOR);

    let summary = record.to_string();
    assert!(summary.starts_with("Deployment Info: {"));
    for key in [
        "tokenFactoryAddress",
        "bexLiquidityManagerAddress",
        "bexDexAddress",
        "feeCollectorAddress",
        "liquidityCollectorAddress",
        "deployedBy",
        "timestamp",
    ] {
        assert!(summary.contains(key), "summary is missing {key}: {summary}");
    }
    assert!(!summary.contains("priceFeedAddress"));
}

#[tokio::test]
async fn failed_first_step_skips_second() {
    let dir = artifacts();
    let deployer = MockDeployer::failing_on(ContractName::BexLiquidityManager);

    let err = provision(&deployer, &plan(&dir)).await.unwrap_err();

    assert!(matches!(
        err,
        ProvisionError::Deploy {
            contract: ContractName::BexLiquidityManager,
            source: EvmClientError::TransactionWithoutReceipt(_),
        }
    ));
    assert_eq!(deployer.names(), vec!["BexLiquidityManager"]);

    // the cause survives into the operator-facing report
    let report = format!("{:?}", anyhow::Error::from(err));
    assert!(report.contains("BexLiquidityManager deployment failed"));
    assert!(report.contains("receipt timed out"));
}

#[tokio::test]
async fn failed_second_step_reports_factory() {
    let dir = artifacts();
    let deployer = MockDeployer::failing_on(ContractName::TokenFactory);

    let err = provision(&deployer, &plan(&dir)).await.unwrap_err();

    assert!(matches!(
        err,
        ProvisionError::Deploy {
            contract: ContractName::TokenFactory,
            ..
        }
    ));
    assert_eq!(deployer.names(), vec!["BexLiquidityManager", "TokenFactory"]);
}

#[test]
fn price_feed_is_recorded_when_present() {
    let price_feed = address!("0x11B714817cBC92D402383cFd3f1037B122dcf69A");
    let args = ProvisionArgs {
        price_feed_address: Some(price_feed.to_string()),
        ..full_args()
    };

    assert_eq!(args.resolve().unwrap().price_feed, Some(price_feed));
}

#[tokio::test]
async fn record_is_saved_when_output_is_given() {
    let dir = artifacts();
    let record = provision(&MockDeployer::new(), &plan(&dir)).await.unwrap();
    let out = tempfile::tempdir().unwrap();
    let path = out.path().join("deployments").join("bartio.json");

    let result = Provision::finish(record.clone(), Some(path.clone()));

    assert_eq!(result.saved_to.as_deref(), Some(path.as_path()));
    let saved: DeploymentRecord =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved, record);
    assert!(result.to_string().ends_with(&format!("Saved to {}", path.display())));
}

#[tokio::test]
async fn unwritable_output_still_reports_the_deployment() {
    let dir = artifacts();
    let record = provision(&MockDeployer::new(), &plan(&dir)).await.unwrap();

    // a regular file where the output directory should be
    let out = tempfile::tempdir().unwrap();
    let blocker = out.path().join("taken");
    std::fs::write(&blocker, "").unwrap();

    let result = Provision::finish(record.clone(), Some(blocker.join("deployment.json")));

    assert_eq!(result.saved_to, None);
    assert_eq!(result.record, record);
    let summary = result.to_string();
    assert!(summary.contains(&record.token_factory_address.to_string()));
    assert!(!summary.contains("Saved to"));
}
