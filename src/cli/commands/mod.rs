//! CLI command implementations

pub mod config;
pub mod run;

pub use config::execute as config;
pub use run::execute as run;
