use anyhow::{bail, Context, Result};
use figment::{providers::Format, Figment};
use serde::{de::DeserializeOwned, Serialize};
use std::{marker::PhantomData, path::PathBuf};

/// The directory name used for every fallback config location, e.g. `~/.launchpad/launchpad.toml`
pub const CONFIG_DIRNAME: &str = "launchpad";

/// The builder we use to build Config
#[derive(Debug)]
pub struct ConfigBuilder<CONFIG, ARG> {
    pub cli_env_args: ARG,
    _config: PhantomData<CONFIG>,
}

pub trait CliEnvExt: Serialize + DeserializeOwned + Default + std::fmt::Debug {
    // e.g. "LAUNCHPAD_CLI"
    const ENV_VAR_PREFIX: &'static str;

    // The section identifier in the TOML file, e.g. "cli", "server"
    const TOML_IDENTIFIER: &'static str;

    // whether to print debug messages during config loading
    const PRINT_DEBUG_MSGS: bool = false;

    // an optional argument to specify the home directory
    // if not supplied, config will try a series of fallbacks
    fn home_dir(&self) -> Option<PathBuf>;

    // an optional path to a dotenv file
    // if not supplied, the current working directory's .env is tried
    fn dotenv_path(&self) -> Option<PathBuf>;

    fn merge_cli_env_args(&self) -> Result<Self> {
        let env_prefix = format!("{}_", Self::ENV_VAR_PREFIX);

        let _self = Figment::new()
            .merge(figment::providers::Env::prefixed(&env_prefix))
            .merge(figment::providers::Serialized::defaults(self))
            .extract()?;

        Ok(_self)
    }
}

pub trait ConfigExt: Serialize + DeserializeOwned + Default + std::fmt::Debug {
    const FILENAME: &'static str = "launchpad.toml";

    // the data directory, which is the root of any files written out
    fn with_data_dir(&mut self, f: fn(&mut PathBuf));

    fn log_levels(&self) -> impl Iterator<Item = &str>;

    fn tracing_env_filter(&self) -> Result<tracing_subscriber::EnvFilter> {
        let mut filter = tracing_subscriber::EnvFilter::from_default_env();
        for directive in self.log_levels() {
            match directive.parse() {
                Ok(directive) => filter = filter.add_directive(directive),
                Err(err) => bail!("{}: {}", err, directive),
            }
        }

        Ok(filter)
    }
}

impl<CONFIG: ConfigExt, ARG: CliEnvExt> ConfigBuilder<CONFIG, ARG> {
    pub fn new(cli_env_args: ARG) -> Self {
        Self {
            cli_env_args,
            _config: PhantomData,
        }
    }

    pub fn build(self) -> Result<CONFIG> {
        // dotenv goes first, since it may set the env vars read below
        let mut dotenv_paths = Vec::new();

        if let Some(dotenv_path) = self.cli_env_args.dotenv_path() {
            dotenv_paths.push(dotenv_path);
        }

        if let Ok(dotenv_path) = std::env::var("LAUNCHPAD_DOTENV") {
            dotenv_paths.push(PathBuf::from(dotenv_path));
        }

        dotenv_paths.push(std::env::current_dir()?.join(".env"));

        for dotenv_path in dotenv_paths {
            if ARG::PRINT_DEBUG_MSGS {
                eprintln!("Loading env vars from {}", dotenv_path.display());
            }
            if dotenv_path.exists() {
                if let Err(e) = dotenvy::from_path(dotenv_path) {
                    bail!("Error loading dotenv file: {}", e);
                }
            }
        }

        let cli_env_args = self.cli_env_args.merge_cli_env_args()?;

        let filepath = ConfigFilePath::new(CONFIG::FILENAME, cli_env_args.home_dir()).into_path();

        if ARG::PRINT_DEBUG_MSGS {
            match &filepath {
                Some(filepath) => eprintln!("Loading config from {}", filepath.display()),
                None => eprintln!("No {} found, using defaults", CONFIG::FILENAME),
            }
        }

        let mut figment =
            Figment::new().merge(figment::providers::Serialized::defaults(CONFIG::default()));

        if let Some(filepath) = &filepath {
            figment = figment
                // the [default] section first
                .merge(Figment::from(
                    figment::providers::Toml::file(filepath).nested(),
                ))
                // then the section for this binary, overriding globals where needed
                .merge(
                    Figment::from(figment::providers::Toml::file(filepath).nested())
                        .select(ARG::TOML_IDENTIFIER),
                );
        }

        // cli/env args always win
        let figment = figment.merge(figment::providers::Serialized::defaults(cli_env_args));

        let mut config: CONFIG = figment.extract().context(format!(
            "Error extracting config (filename: {}, path: {:?})",
            CONFIG::FILENAME,
            filepath
        ))?;

        config.with_data_dir(|data_dir| {
            *data_dir = shellexpand::tilde(&data_dir.to_string_lossy())
                .to_string()
                .into();
        });

        Ok(config)
    }
}

// a helper to try a series of fallback paths, looking for a config file
#[derive(Clone, Debug)]
pub struct ConfigFilePath {
    // the filename to look for in each directory, e.g. "launchpad.toml"
    pub filename: String,
    // the optional directory set via direct args or env
    pub arg_env_dir: Option<PathBuf>,
}

impl ConfigFilePath {
    pub fn new(filename: impl ToString, arg_env_dir: Option<PathBuf>) -> Self {
        Self {
            filename: filename.to_string(),
            arg_env_dir,
        }
    }

    pub fn into_path(self) -> Option<PathBuf> {
        self.into_possible().into_iter().find(|path| path.exists())
    }

    // tries a series of fallbacks, in order of preference
    pub fn into_possible(self) -> Vec<PathBuf> {
        let Self {
            filename,
            arg_env_dir,
        } = self;

        let mut dirs = Vec::new();

        // explicit, e.g. `--home /foo` or LAUNCHPAD_CLI_HOME="/foo"
        if let Some(dir) = arg_env_dir {
            dirs.push(dir);
        }

        if let Ok(dir) = std::env::var("LAUNCHPAD_HOME") {
            dirs.push(dir.into());
        }

        if let Ok(dir) = std::env::current_dir() {
            dirs.push(dir);
        }

        // ~/.launchpad/launchpad.toml
        if let Some(dir) = dirs::home_dir().map(|dir| dir.join(format!(".{CONFIG_DIRNAME}"))) {
            dirs.push(dir);
        }

        // e.g. ~/.config/launchpad on Linux, ~/Library/Application Support/launchpad on macOS
        if let Some(dir) = dirs::config_dir().map(|dir| dir.join(CONFIG_DIRNAME)) {
            dirs.push(dir);
        }

        if let Some(dir) = std::env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .map(|dir| dir.join(CONFIG_DIRNAME))
        {
            dirs.push(dir);
        }

        dirs.push(PathBuf::from("/etc").join(CONFIG_DIRNAME));

        let mut all_files: Vec<PathBuf> = dirs.into_iter().map(|dir| dir.join(&filename)).collect();

        all_files.dedup();

        all_files
    }
}
