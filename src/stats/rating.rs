//! Scores derived from a single game. Pure functions of the record.
//!
//! The explosive and big-play rates are plays per play, so they sit in
//! [0, 1] for real games and practically never clear their thresholds.
//! The thresholds are kept as they are used upstream for rankings.

use crate::stats::game::GameRecord;

const EXPLOSIVE_RATE_THRESHOLD: f64 = 3.0;
const BIG_PLAY_RATE_THRESHOLD: f64 = 10.0;

// (threshold, points), highest tier first. Only the first matching tier counts.
const POINTS_TIERS: [(f64, f64); 3] = [(75.0, 3.0), (60.0, 2.0), (50.0, 1.0)];
const YARDS_TIERS: [(f64, f64); 2] = [(1000.0, 2.0), (800.0, 1.0)];
const QBR_TIERS: [(f64, f64); 2] = [(120.0, 1.0), (100.0, 0.5)];
// Yards per attempt tiers are inclusive.
const YARDS_PER_ATTEMPT_TIERS: [(f64, f64); 2] = [(6.0, 3.0), (5.0, 1.0)];

fn tier_above(value: f64, tiers: &[(f64, f64)]) -> f64 {
    tiers
        .iter()
        .find(|(threshold, _)| value > *threshold)
        .map_or(0.0, |(_, points)| *points)
}

fn tier_at_least(value: f64, tiers: &[(f64, f64)]) -> f64 {
    tiers
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map_or(0.0, |(_, points)| *points)
}

pub fn offensive_rating(game: &GameRecord) -> f64 {
    let offense = &game.offense;
    // No plays means no rates to compute and no meaningful stats.
    if offense.total_plays == 0.0 {
        return 0.0;
    }

    let mut rating = 0.0;

    let explosive_rate = offense.offensive_explosive_plays / offense.total_plays;
    if explosive_rate > EXPLOSIVE_RATE_THRESHOLD {
        rating += 1.0;
    }
    let big_play_rate = offense.offensive_big_plays / offense.total_plays;
    if big_play_rate > BIG_PLAY_RATE_THRESHOLD {
        rating += 1.0;
    }

    rating += tier_above(offense.total_points, &POINTS_TIERS);
    rating += tier_above(offense.total_yards, &YARDS_TIERS);
    rating += tier_at_least(offense.total_yards_per_attempt, &YARDS_PER_ATTEMPT_TIERS);
    rating += tier_above(offense.home_qbr, &QBR_TIERS);
    rating += tier_above(offense.away_qbr, &QBR_TIERS);

    rating
}

pub fn defensive_big_plays(game: &GameRecord) -> f64 {
    let defense = &game.defense;
    defense.defensive_tds * 3.0
        + defense.fumble_recs
        + defense.special_teams_td * 3.0
        + defense.interceptions
        + defense.blocked_kicks
        + defense.safeties
        + defense.goal_line_stands
}

pub fn sum_ratings(offensive_rating: f64, defensive_big_plays: f64, scenario_rating: f64) -> f64 {
    offensive_rating + defensive_big_plays + scenario_rating
}

/// Offense + defense + the scenario rating shipped with the record.
pub fn total_rating(game: &GameRecord) -> f64 {
    sum_ratings(
        offensive_rating(game),
        defensive_big_plays(game),
        game.scenario.scenario_rating,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_game() -> GameRecord {
        let mut game = GameRecord::default();
        game.offense.total_plays = 100.0;
        game.offense.total_points = 55.0;
        game.offense.total_yards = 850.0;
        game.offense.total_yards_per_attempt = 5.5;
        game.offense.home_qbr = 110.0;
        game.offense.away_qbr = 105.0;
        game.offense.offensive_explosive_plays = 10.0;
        game.offense.offensive_big_plays = 5.0;
        game.defense.defensive_tds = 1.0;
        game.defense.fumble_recs = 2.0;
        game.defense.interceptions = 3.0;
        game.defense.goal_line_stands = 1.0;
        game.scenario.scenario_rating = 8.5;
        game
    }

    #[test]
    fn offensive_rating_of_sample_game() {
        // points > 50, yards > 800, ypa >= 5, both QBRs > 100
        assert_eq!(offensive_rating(&sample_game()), 3.0);
    }

    #[test]
    fn zero_plays_yield_zero_rating() {
        let mut game = sample_game();
        game.offense.total_plays = 0.0;
        game.offense.total_points = 90.0;
        game.offense.total_yards = 1200.0;
        game.offense.home_qbr = 150.0;

        assert_eq!(offensive_rating(&game), 0.0);
    }

    #[test]
    fn only_the_highest_tier_counts() {
        let mut game = GameRecord::default();
        game.offense.total_plays = 1.0;

        game.offense.total_points = 76.0;
        assert_eq!(offensive_rating(&game), 3.0);
        game.offense.total_points = 75.0;
        assert_eq!(offensive_rating(&game), 2.0);
        game.offense.total_points = 50.0;
        assert_eq!(offensive_rating(&game), 0.0);

        game.offense.total_yards = 1000.5;
        assert_eq!(offensive_rating(&game), 2.0);
        game.offense.total_yards = 1000.0;
        assert_eq!(offensive_rating(&game), 1.0);
    }

    #[test]
    fn yards_per_attempt_tiers_are_inclusive() {
        let mut game = GameRecord::default();
        game.offense.total_plays = 1.0;

        game.offense.total_yards_per_attempt = 6.0;
        assert_eq!(offensive_rating(&game), 3.0);
        game.offense.total_yards_per_attempt = 5.0;
        assert_eq!(offensive_rating(&game), 1.0);
        game.offense.total_yards_per_attempt = 4.99;
        assert_eq!(offensive_rating(&game), 0.0);
    }

    #[test]
    fn qbr_bonus_applies_to_each_team() {
        let mut game = GameRecord::default();
        game.offense.total_plays = 1.0;
        game.offense.home_qbr = 121.0;
        game.offense.away_qbr = 101.0;

        assert_eq!(offensive_rating(&game), 1.5);
    }

    #[test]
    fn rate_bonuses_need_more_than_one_play_per_play() {
        let mut game = GameRecord::default();
        game.offense.total_plays = 2.0;
        game.offense.offensive_explosive_plays = 6.0;
        game.offense.offensive_big_plays = 20.0;
        assert_eq!(offensive_rating(&game), 0.0);

        game.offense.offensive_explosive_plays = 7.0;
        game.offense.offensive_big_plays = 21.0;
        assert_eq!(offensive_rating(&game), 2.0);
    }

    #[test]
    fn defensive_big_plays_weights_touchdowns() {
        let mut game = sample_game();
        // 1*3 + 2 + 3 + 1
        assert_eq!(defensive_big_plays(&game), 9.0);

        game.defense.special_teams_td = 1.0;
        game.defense.blocked_kicks = 1.0;
        game.defense.safeties = 1.0;
        // sacks and punts do not count
        game.defense.sacks = 4.0;
        game.defense.punts = 7.0;
        assert_eq!(defensive_big_plays(&game), 14.0);
    }

    #[test]
    fn total_rating_adds_scenario_rating_verbatim() {
        assert_eq!(total_rating(&sample_game()), 3.0 + 9.0 + 8.5);
    }

    #[test]
    fn ratings_are_deterministic() {
        let game = sample_game();
        assert_eq!(
            offensive_rating(&game).to_bits(),
            offensive_rating(&game.clone()).to_bits()
        );
        assert_eq!(
            defensive_big_plays(&game).to_bits(),
            defensive_big_plays(&game.clone()).to_bits()
        );
    }
}
