use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use launchpad_cli::{
    args::Command,
    command::{
        create_token::{CreateToken, CreateTokenArgs},
        provision::Provision,
    },
    config::Config,
    context::CliContext,
};
use utils::config::{ConfigBuilder, ConfigExt};

#[tokio::main]
async fn main() {
    let command = Command::parse();

    let config: Config = match ConfigBuilder::new(command.args()).build() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid configuration: {err:?}");
            std::process::exit(1);
        }
    };

    // the dotenv files are loaded by now, parse again so the address flags see their env vars
    let command = Command::parse();

    let filters = match config.tracing_env_filter() {
        Ok(filters) => filters,
        Err(err) => {
            eprintln!("Invalid log level: {err:?}");
            std::process::exit(1);
        }
    };

    // setup tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false),
        )
        .with(filters)
        .init();

    let ctx = CliContext::new(config);

    match command {
        Command::Provision {
            addresses, output, ..
        } => match Provision::run(&ctx, addresses, output).await {
            Ok(result) => println!("{result}"),
            Err(err) => {
                eprintln!("Deployment failed: {err:?}");
                std::process::exit(1);
            }
        },
        Command::CreateToken {
            name,
            ticker,
            description,
            twitter,
            telegram,
            website,
            logo,
            simulate,
            ..
        } => {
            let args = CreateTokenArgs {
                name,
                ticker,
                description,
                twitter,
                telegram,
                website,
                logo,
            };

            match CreateToken::run(&ctx, args, simulate).await {
                Ok(result) => println!("{result}"),
                Err(err) => {
                    eprintln!("{}", launchpad_form::FAILURE_MESSAGE);
                    eprintln!("{err:?}");
                    std::process::exit(1);
                }
            }
        }
    }
}
