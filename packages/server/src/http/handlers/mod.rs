mod config;
mod index;
mod not_found;
pub(crate) mod openapi;
mod tokens;

pub use config::{handle_config, handle_config_script};
pub use index::handle_index;
pub use not_found::handle_not_found;
pub use openapi::handle_openapi;
pub use tokens::handle_create_token;
