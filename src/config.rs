pub use self::parser::{BackupConfig, Config, LogFormat, LoggingConfig};
pub use self::validator::ConfigError;

mod parser;
mod validator;
