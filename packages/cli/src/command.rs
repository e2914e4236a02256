pub mod create_token;
pub mod provision;
