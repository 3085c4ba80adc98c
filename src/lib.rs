pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use app::commands::run_cli;
#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::http::OpenNotifyClient;
pub use app::commands::{Command, CommandRunner};
pub use config::ClientSettings;
pub use utils::error::{IssError, Result};
