mod ai_delay_config;
mod config;

pub use ai_delay_config::AiDelayConfig;
pub use config::{ClientConfig, Storage};
