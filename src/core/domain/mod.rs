//! Domain types.

mod config_map;
mod env;

pub use config_map::ConfigMap;
pub use env::DotEnv;
