use launchpad_server::{args::CliArgs, config::Config};
use launchpad_types::FrontendConfig;
use utils::config::{ConfigBuilder, ConfigExt};

const ENV_VARS: [&str; 4] = [
    "LAUNCHPAD_SERVER_PORT",
    "LAUNCHPAD_SERVER_HOST",
    "LAUNCHPAD_SERVER_LOG_LEVEL",
    "LAUNCHPAD_SERVER_BEARER_TOKEN",
];

fn args(home: &tempfile::TempDir) -> CliArgs {
    CliArgs {
        home: Some(home.path().to_path_buf()),
        dotenv: Some(home.path().join(".env")),
        ..Default::default()
    }
}

fn write_config(home: &tempfile::TempDir, frontend: &FrontendConfig) {
    let mut server = toml::Table::new();
    server.insert("port".into(), 8080.into());
    server.insert("static_dir".into(), "~/launchpad-ui".into());
    server.insert(
        "frontend".into(),
        toml::Value::try_from(frontend).unwrap(),
    );

    let mut global = toml::Table::new();
    global.insert("log_level".into(), toml::Value::Array(vec!["warn".into()]));
    global.insert("port".into(), 9000.into());

    let mut file = toml::Table::new();
    file.insert("default".into(), global.into());
    file.insert("server".into(), server.into());

    std::fs::write(
        home.path().join(Config::FILENAME),
        toml::to_string(&file).unwrap(),
    )
    .unwrap();
}

#[test]
fn config_defaults() {
    let home = tempfile::tempdir().unwrap();

    let config: Config = temp_env::with_vars_unset(ENV_VARS, || {
        ConfigBuilder::new(args(&home)).build().unwrap()
    });

    assert_eq!(config.port, 3000);
    assert_eq!(config.host, "localhost");
    assert_eq!(config.log_level, ["info"]);
    assert_eq!(config.submit_delay_ms, 2000);
    assert!(config.bearer_token.is_none());
    assert_eq!(config.frontend, FrontendConfig::default());
}

#[test]
fn config_file_server_section() {
    let home = tempfile::tempdir().unwrap();
    let frontend = FrontendConfig {
        network_name: "Berachain Mainnet".to_string(),
        chain_id: "0x138DE".to_string(),
        ..Default::default()
    };
    write_config(&home, &frontend);

    let config: Config = temp_env::with_vars_unset(ENV_VARS, || {
        ConfigBuilder::new(args(&home)).build().unwrap()
    });

    // section beats [default]
    assert_eq!(config.port, 8080);
    assert_eq!(config.log_level, ["warn"]);
    assert_eq!(config.frontend, frontend);
    assert_eq!(config.frontend.chain_id_number(), Some(80094));
    assert!(!config.static_dir.to_string_lossy().starts_with('~'));
}

#[test]
fn config_env_and_cli_override_file() {
    let home = tempfile::tempdir().unwrap();
    write_config(&home, &FrontendConfig::default());

    temp_env::with_vars(
        [
            ("LAUNCHPAD_SERVER_PORT", Some("7000")),
            ("LAUNCHPAD_SERVER_HOST", Some("0.0.0.0")),
            ("LAUNCHPAD_SERVER_LOG_LEVEL", None),
            ("LAUNCHPAD_SERVER_BEARER_TOKEN", Some("hunter2")),
        ],
        || {
            let config: Config = ConfigBuilder::new(args(&home)).build().unwrap();
            assert_eq!(config.port, 7000);
            assert_eq!(config.host, "0.0.0.0");
            assert_eq!(config.bearer_token.as_deref(), Some("hunter2"));

            let mut cli_args = args(&home);
            cli_args.port = Some(7100);
            let config: Config = ConfigBuilder::new(cli_args).build().unwrap();
            assert_eq!(config.port, 7100);
        },
    );
}
