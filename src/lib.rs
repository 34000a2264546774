pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod preload;
pub mod server;
pub mod source;
pub mod stats;
pub mod storage;
