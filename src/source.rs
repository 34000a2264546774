//! Where the game files live.
//!
//! Data is laid out in two levels, `<season>/<week>.json`, and a storage key
//! is that relative path. The loader and the preloader only see the
//! [`DataSource`] trait; [`FsSource`] serves it from a directory on disk.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{StatsError, StatsResult};

pub const DATA_FILE_EXTENSION: &str = "json";

// Season and week coming from a request must be plain words, so a key can
// never point outside the data directory.
static REGEX_PARTITION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+$").unwrap());

/// Storage key of one week of a season.
pub fn week_key(season: &str, week: &str) -> StatsResult<String> {
    match (
        REGEX_PARTITION.is_match(season),
        REGEX_PARTITION.is_match(week),
    ) {
        (true, true) => Ok(format!("{}/{}.{}", season, week, DATA_FILE_EXTENSION)),
        _ => Err(StatsError::NotFound(format!("{}/{}", season, week))),
    }
}

pub trait DataSource: Send + Sync {
    /// First level of the namespace, in ascending order.
    fn seasons(&self) -> StatsResult<Vec<String>>;
    /// Storage keys of every week file of a season, in ascending week order.
    fn weeks(&self, season: &str) -> StatsResult<Vec<String>>;
    /// Full content of the resource behind a key.
    fn read(&self, key: &str) -> StatsResult<Vec<u8>>;
}

#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

fn io_error(path: &Path, error: std::io::Error) -> StatsError {
    StatsError::Io(format!("{}: {}", path.display(), error))
}

// A resource that vanished between the existence check and the read is
// missing, not broken.
fn read_error(key: &str, path: &Path, error: std::io::Error) -> StatsError {
    match error.kind() {
        ErrorKind::NotFound => StatsError::NotFound(key.to_string()),
        _ => io_error(path, error),
    }
}

// Numeric names sort by value so week 10 comes after week 9. Other names
// come after every numeric one.
fn sort_partitions(names: &mut [String]) {
    names.sort_by_key(|name| {
        let stem = name.split('.').next().unwrap_or_default();
        let number = stem.parse::<u32>().ok();
        (number.is_none(), number, name.clone())
    });
}

impl DataSource for FsSource {
    fn seasons(&self) -> StatsResult<Vec<String>> {
        let entries = fs::read_dir(&self.root).map_err(|e| io_error(&self.root, e))?;

        let mut seasons = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect::<Vec<String>>();
        sort_partitions(&mut seasons);
        Ok(seasons)
    }

    fn weeks(&self, season: &str) -> StatsResult<Vec<String>> {
        let season_dir = self.root.join(season);
        let entries = fs::read_dir(&season_dir).map_err(|e| io_error(&season_dir, e))?;

        let mut weeks = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| !t.is_dir()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| {
                Path::new(name)
                    .extension()
                    .map_or(false, |ext| ext == DATA_FILE_EXTENSION)
            })
            .collect::<Vec<String>>();
        sort_partitions(&mut weeks);

        Ok(weeks
            .into_iter()
            .map(|file_name| format!("{}/{}", season, file_name))
            .collect())
    }

    fn read(&self, key: &str) -> StatsResult<Vec<u8>> {
        let path = self.root.join(key);
        fs::metadata(&path).map_err(|e| read_error(key, &path, e))?;
        fs::read(&path).map_err(|e| read_error(key, &path, e))
    }
}
