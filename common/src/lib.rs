pub mod cli;
pub mod config;
pub mod error;
pub mod init_log;

pub use cli::*;
pub use config::*;
pub use error::*;
pub use init_log::*;
