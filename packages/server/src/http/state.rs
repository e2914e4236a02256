use std::{sync::Arc, time::Duration};

use launchpad_form::{SimulatedSubmitter, TokenSubmitter};

use crate::config::Config;

#[derive(Clone)]
pub struct HttpState {
    pub config: Arc<Config>,
    pub submitter: Arc<dyn TokenSubmitter>,
}

impl HttpState {
    /// Submissions are simulated with the configured delay
    pub fn new(config: Config) -> Self {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(config.submit_delay_ms));
        Self::new_with_submitter(config, Arc::new(submitter))
    }

    pub fn new_with_submitter(config: Config, submitter: Arc<dyn TokenSubmitter>) -> Self {
        Self {
            config: Arc::new(config),
            submitter,
        }
    }
}
