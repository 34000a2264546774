use crate::cli::Cli;
use clap::Parser;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::Deserialize;
use std::path::Path;
use tracing::Level;

const TRACE_LEVELS: [&'static str; 5] = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR"];
const LOCAL_SETTINGS_YAML_FILE: &str = ".env.local.yaml";

// All settings may be configured via environment variables. Example:
// PORT="8080" would set port to 8080. Command line flags take precedence
// over the environment, which takes precedence over the local yaml file.
#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    #[serde(default = "default_trace_level")]
    trace_level: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    // Upper bound of weeks scanned when serving a whole season
    #[serde(default = "default_season_weeks")]
    pub season_weeks: u32,
    #[serde(default = "default_cache_max_age_sec")]
    pub cache_max_age_sec: u64,
    // Whether to load every data file into the cache before serving
    #[serde(default = "default_preload")]
    pub preload: bool,
}

impl Settings {
    pub fn new() -> Result<Self, figment::Error> {
        Settings::from_cli(Cli::parse())
    }

    pub fn from_cli(cli: Cli) -> Result<Self, figment::Error> {
        let mut figment = Figment::new();
        if Path::new(LOCAL_SETTINGS_YAML_FILE).exists() {
            println!(
                "\n######################################\n\
                   ##   Found '.env.local.yaml' file,  ##\n\
                   ##   loading local configuration.   ##\n\
                   ######################################\n\
                "
            );
            figment = figment.merge(Yaml::file(LOCAL_SETTINGS_YAML_FILE));
        }
        figment = figment.merge(Env::raw()).merge(Serialized::defaults(&cli));
        if cli.no_preload {
            figment = figment.merge(Serialized::default("preload", false));
        }
        figment.extract()
    }

    pub fn get_trace_level(&self) -> Level {
        get_trace_level(&self.trace_level)
    }
}

fn get_trace_level(level_str: &str) -> Level {
    match level_str {
        level if level == TRACE_LEVELS[0] => Level::TRACE,
        level if level == TRACE_LEVELS[1] => Level::DEBUG,
        level if level == TRACE_LEVELS[2] => Level::INFO,
        level if level == TRACE_LEVELS[3] => Level::WARN,
        level if level == TRACE_LEVELS[4] => Level::ERROR,
        // Default trace level
        _ => Level::INFO,
    }
}

fn default_trace_level() -> String {
    "INFO".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_season_weeks() -> u32 {
    18
}

fn default_cache_max_age_sec() -> u64 {
    3600
}

fn default_preload() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_defaults() {
        let cli = Cli {
            port: Some(9090),
            data_dir: Some("/srv/stats".to_string()),
            no_preload: true,
        };
        let settings = Settings::from_cli(cli).unwrap();

        assert_eq!(settings.port, 9090);
        assert_eq!(settings.data_dir, "/srv/stats");
        assert!(!settings.preload);
    }

    #[test]
    fn unknown_trace_level_falls_back_to_info() {
        assert_eq!(get_trace_level("DEBUG"), Level::DEBUG);
        assert_eq!(get_trace_level("verbose"), Level::INFO);
    }
}
