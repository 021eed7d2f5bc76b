pub mod cli;
pub mod clipboard;
pub mod load_config;
pub mod upload;

pub use cli::{run, Cli};
