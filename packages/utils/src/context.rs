use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tokio::runtime::Runtime;
use tracing::instrument;

/// Owns the runtime and a kill switch shared by everything a binary spawns
#[derive(Clone)]
pub struct AppContext {
    pub rt: Arc<Runtime>,
    killed: Arc<AtomicBool>,
    kill_sender: tokio::sync::broadcast::Sender<()>,
    // keeps the channel open so a kill with no listeners yet is not an error
    _kill_receiver: Arc<tokio::sync::broadcast::Receiver<()>>,
}

impl AppContext {
    pub fn new() -> std::io::Result<Self> {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        Ok(Self::new_with_runtime(Arc::new(rt)))
    }

    pub fn new_with_runtime(rt: Arc<Runtime>) -> Self {
        let (kill_sender, kill_receiver) = tokio::sync::broadcast::channel(1);

        Self {
            rt,
            kill_sender,
            _kill_receiver: Arc::new(kill_receiver),
            killed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Resolves once `kill` is called, for graceful shutdown in async code
    #[instrument(skip(self), fields(subsys = "AppContext"))]
    pub fn get_kill_receiver(&self) -> tokio::sync::broadcast::Receiver<()> {
        self.kill_sender.subscribe()
    }

    /// Typically only called from main (on ctrl-c) or tests
    #[instrument(skip(self), fields(subsys = "AppContext"))]
    pub fn kill(&self) {
        if !self.killed.swap(true, Ordering::SeqCst) {
            // the context itself holds a receiver, so this cannot fail
            let _ = self.kill_sender.send(());
        }
    }

    pub fn killed(&self) -> bool {
        self.killed.load(Ordering::SeqCst)
    }
}
