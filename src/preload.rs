use tracing::{debug, info, warn};

use crate::loader::Loader;

// Loads every data file the source knows about into the cache at startup.
// Best effort: nothing in here may stop the server from starting, so every
// failure is logged and skipped. Returns the number of files loaded.
pub fn preload(loader: &Loader) -> usize {
    let seasons = match loader.source().seasons() {
        Ok(seasons) => seasons,
        Err(e) => {
            warn!("Could not list data seasons, skipping preload. {e}");
            return 0;
        }
    };

    let mut count = 0;
    for season in seasons {
        let weeks = match loader.source().weeks(&season) {
            Ok(weeks) => weeks,
            Err(e) => {
                debug!("Skipping season {season}. {e}");
                continue;
            }
        };
        for key in weeks {
            match loader.load(&key) {
                Ok(_) => count += 1,
                Err(e) => warn!("Skipping {key} during preload. {e}"),
            }
        }
    }

    info!("Preloaded {count} data files into cache");
    count
}
