mod credential;
mod deployment;
mod frontend_config;
mod submission;

pub use credential::*;
pub use deployment::*;
pub use frontend_config::*;
pub use submission::*;
