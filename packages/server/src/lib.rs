pub mod args;
pub mod config;
pub mod http;

use utils::context::AppContext;

/// Entry point to start up the server
/// Called from main
pub fn run_server(ctx: AppContext, config: config::Config) -> anyhow::Result<()> {
    ctrlc::set_handler({
        let ctx = ctx.clone();
        move || {
            ctx.kill();
        }
    })?;

    // blocks until the kill switch fires
    http::server::start(ctx, config)
}
