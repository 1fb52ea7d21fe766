mod config;
mod format_int;
mod parse_plaintext;
mod ticker;

pub use config::EngineConfig;
pub use format_int::NiceInt;
pub use parse_plaintext::parse_plaintext;
pub use ticker::Ticker;
