use clap::{Args, Parser};
use launchpad_types::Credential;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use utils::{config::CliEnvExt, serde::deserialize_vec_string};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub enum Command {
    /// Deploy BexLiquidityManager and then TokenFactory
    Provision {
        #[clap(flatten)]
        addresses: ProvisionArgs,

        /// Also write the deployment record as json to this path
        #[clap(long)]
        output: Option<PathBuf>,

        #[clap(flatten)]
        args: CliArgs,
    },

    /// Fill in the token creation form and submit it
    CreateToken {
        #[clap(long)]
        name: String,

        /// At most 5 characters
        #[clap(long)]
        ticker: String,

        #[clap(long)]
        description: String,

        #[clap(long)]
        twitter: Option<String>,

        #[clap(long)]
        telegram: Option<String>,

        /// An existing website, leave out to create one later
        #[clap(long)]
        website: Option<String>,

        /// Path to the logo image
        #[clap(long)]
        logo: Option<PathBuf>,

        /// Don't contact the server, just simulate the submission locally
        #[clap(long, default_value_t = false)]
        simulate: bool,

        #[clap(flatten)]
        args: CliArgs,
    },
}

impl Command {
    pub fn args(&self) -> CliArgs {
        let args = match self {
            Self::Provision { args, .. } => args,
            Self::CreateToken { args, .. } => args,
        };

        args.clone()
    }
}

/// The three required inputs of a provisioning run, plus the optional price feed
///
/// Each one falls back to the environment variable of the same name when the flag is not given.
#[derive(Debug, Clone, Default, Args)]
pub struct ProvisionArgs {
    /// Address of the BEX dex
    #[clap(long, env = "BEX_DEX_ADDRESS")]
    pub bex_dex_address: Option<String>,

    /// Address collecting token creation fees
    #[clap(long, env = "FEE_COLLECTOR_ADDRESS")]
    pub fee_collector_address: Option<String>,

    /// Address collecting liquidity
    #[clap(long, env = "LIQUIDITY_COLLECTOR_ADDRESS")]
    pub liquidity_collector_address: Option<String>,

    /// Price feed, only recorded
    #[clap(long, env = "PRICE_FEED_ADDRESS")]
    pub price_feed_address: Option<String>,
}

/// This struct is used for both args and environment variables
/// the basic idea is that every env var can be overriden by a cli arg
/// and these override the config file
/// env vars follow the pattern of LAUNCHPAD_CLI_{UPPERCASE_ARG_NAME}
#[derive(Clone, Debug, Args, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CliArgs {
    /// The home directory of the application, where the launchpad.toml configuration file is stored
    /// if not provided, a series of default directories will be tried
    #[clap(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<PathBuf>,

    /// The path to an optional dotenv file to try and load
    /// if not set, will be the current working directory's .env
    #[clap(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dotenv: Option<PathBuf>,

    /// The directory relative output paths are resolved against
    #[clap(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PathBuf>,

    /// Log level in the format of comma-separated tracing directives.
    #[clap(long, value_delimiter = ',')]
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "deserialize_vec_string"
    )]
    pub log_level: Vec<String>,

    /// The rpc endpoint of the chain to provision on (http(s) or ws(s))
    #[clap(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evm_endpoint: Option<String>,

    /// Mnemonic or private key (usually leave this as None and override in env)
    #[clap(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential: Option<Credential>,

    /// hd index of the mnemonic to sign with
    #[clap(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hd_index: Option<u32>,

    /// How often to poll for receipts, in milliseconds
    #[clap(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll_interval_ms: Option<u64>,

    /// The directory holding compiled contract artifacts
    #[clap(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<PathBuf>,

    /// The launchpad server that receives token submissions
    #[clap(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_endpoint: Option<String>,

    /// Bearer token for the server, if it requires one
    #[clap(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<Credential>,
}

impl CliEnvExt for CliArgs {
    const ENV_VAR_PREFIX: &'static str = "LAUNCHPAD_CLI";
    const TOML_IDENTIFIER: &'static str = "cli";

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn dotenv_path(&self) -> Option<PathBuf> {
        self.dotenv.clone()
    }
}
