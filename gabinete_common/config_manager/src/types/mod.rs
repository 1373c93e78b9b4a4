pub mod context;

pub use context::{ServerConfig, CONFIG};
