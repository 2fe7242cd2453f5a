mod env_version;
pub mod resource_table;

pub use env_version::{env_name, env_version};
