//! Placeholder layout of the manual backup directory.
//!
//! The directory holds one `<table>.json` file per exported table. This
//! module only establishes that shape; the files are filled with real rows
//! by export steps that run elsewhere.

pub use self::error::BackupError;
pub use self::initializer::BackupInitializer;

pub mod error;
pub mod initializer;
pub mod placeholder;
pub mod tables;
