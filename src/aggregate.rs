use itertools::Itertools;
use tracing::warn;

use crate::error::StatsResult;
use crate::loader::Loader;
use crate::source::week_key;
use crate::stats::game::{GameRecord, RankedGame};

/// Rated games of one week, best offense first. Games with the same
/// offensive rating keep their order from the data file.
pub fn week_view(loader: &Loader, season: &str, week: &str) -> StatsResult<Vec<RankedGame>> {
    let key = week_key(season, week)?;
    let games = loader.load(&key)?;

    Ok(games
        .iter()
        .map(RankedGame::from)
        // sorted_by is a stable sort
        .sorted_by(|a, b| b.offensive_rating.total_cmp(&a.offensive_rating))
        .collect())
}

/// Raw games of a season, week 1 first. Weeks are expected to be
/// contiguous: the first missing week ends the season. A week that exists
/// but cannot be read or parsed is left out.
pub fn season_view(loader: &Loader, season: &str, max_weeks: u32) -> Vec<GameRecord> {
    let mut games = Vec::new();

    for week in 1..=max_weeks {
        let loaded = week_key(season, &week.to_string()).and_then(|key| loader.load(&key));
        match loaded {
            Ok(week_games) => games.extend(week_games.iter().cloned()),
            Err(e) if e.is_not_found() => break,
            Err(e) => warn!("Leaving week {week} out of season {season}. {e}"),
        }
    }
    games
}
