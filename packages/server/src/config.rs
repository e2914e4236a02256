use launchpad_types::{Credential, FrontendConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use utils::config::ConfigExt;

/// The fully parsed and validated config struct we use in the application
/// this is built up from the ConfigBuilder which can load from multiple sources (in order of preference):
///
/// 1. cli args
/// 2. environment variables
/// 3. config file
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// The port to bind the server to.
    /// Default is `3000`
    pub port: u32,
    /// The log-level to use, in the format of [tracing directives](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html#directives).
    /// Default is `["info"]`
    pub log_level: Vec<String>,
    /// The host to bind the server to
    /// Default is `localhost`
    pub host: String,
    /// The directory of static files making up the web ui, `index.html` is served at `/`
    /// Default is `frontend`
    pub static_dir: PathBuf,
    /// The allowed cors origins
    /// Default is empty
    pub cors_allowed_origins: Vec<String>,
    /// Protects the token submission endpoint when set
    pub bearer_token: Option<Credential>,
    /// How long a simulated token submission takes
    /// Default is `2000`
    pub submit_delay_ms: u64,
    /// What the web ui is told about the chain and the factory, see `[server.frontend]`
    pub frontend: FrontendConfig,
}

/// Default values for the config struct
/// these are only used to fill in holes after all the parsing and loading is done
impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            log_level: vec!["info".to_string()],
            host: "localhost".to_string(),
            static_dir: PathBuf::from("frontend"),
            cors_allowed_origins: Vec::new(),
            bearer_token: None,
            submit_delay_ms: 2000,
            frontend: FrontendConfig::default(),
        }
    }
}

impl ConfigExt for Config {
    fn with_data_dir(&mut self, f: fn(&mut PathBuf)) {
        f(&mut self.static_dir);
    }

    fn log_levels(&self) -> impl Iterator<Item = &str> {
        self.log_level.iter().map(|s| s.as_str())
    }
}
