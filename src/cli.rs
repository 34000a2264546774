use clap::Parser;
use serde::Serialize;

#[derive(Debug, Default, Parser, Serialize)]
pub struct Cli {
    /// Port the HTTP server listens on
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Directory holding the <season>/<week>.json files
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
    /// Skip warming the cache at startup
    #[arg(long)]
    #[serde(skip)]
    pub no_preload: bool,
}
