pub mod check;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod provider;
pub mod routes;

pub use check::{run_check, CheckRequest, CheckResponse};
pub use config::Config;
