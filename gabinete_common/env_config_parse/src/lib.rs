pub mod env_parse;
pub mod utils;

pub use env_parse::{get_env_or_default, get_env_value};
pub use utils::*;
