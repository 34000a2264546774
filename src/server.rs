//! HTTP surface of the game statistics.
//!
//! `GET /games/{season}/{week}` serves the rated games of a week and
//! `GET /games/{season}` the raw games of a whole season.

use serde::Serialize;
use tokio::task;
use tracing::{debug, error};
use warp::http::header::{
    HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

use crate::aggregate::{season_view, week_view};
use crate::config::Settings;
use crate::loader::Loader;

const NOT_FOUND_BODY: &str = "No data";
const INTERNAL_ERROR_BODY: &str = "Error reading data";

#[derive(Debug, Clone, Copy)]
pub struct RouteConfig {
    pub season_weeks: u32,
    pub cache_max_age_sec: u64,
}

impl From<&Settings> for RouteConfig {
    fn from(settings: &Settings) -> Self {
        RouteConfig {
            season_weeks: settings.season_weeks,
            cache_max_age_sec: settings.cache_max_age_sec,
        }
    }
}

pub fn create_routes(
    loader: Loader,
    config: RouteConfig,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let loader_filter = warp::any().map(move || loader.clone());
    let config_filter = warp::any().map(move || config);

    let week = warp::path!("games" / String / String)
        .and(warp::get())
        .and(loader_filter.clone())
        .and(config_filter.clone())
        .and_then(games_for_week);

    let season = warp::path!("games" / String)
        .and(warp::get())
        .and(loader_filter)
        .and(config_filter)
        .and_then(games_for_season);

    let api = week.or(season);

    // Any OPTIONS request is answered right away, preflight or not.
    let options = warp::options().map(|| StatusCode::NO_CONTENT);

    // Only compress for clients that asked for it.
    let compressed = accepts_gzip()
        .and(api.clone())
        .with(warp::compression::gzip());

    options
        .or(compressed)
        .or(api)
        .with(warp::reply::with::headers(cors_headers()))
        .with(warp::trace::request())
}

// Sent on every reply, whether or not the request carries an Origin.
fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers
}

fn accepts_gzip() -> impl Filter<Extract = (), Error = Rejection> + Clone {
    warp::header::optional::<String>("accept-encoding")
        .and_then(|encoding: Option<String>| async move {
            match encoding {
                Some(encoding) if encoding.contains("gzip") => Ok(()),
                _ => Err(warp::reject::not_found()),
            }
        })
        .untuple_one()
}

fn json_response<T: Serialize>(body: &T, cache_max_age_sec: u64) -> Response {
    warp::reply::with_header(
        warp::reply::json(body),
        "Cache-Control",
        format!("public, max-age={}", cache_max_age_sec),
    )
    .into_response()
}

fn not_found_response() -> Response {
    warp::reply::with_status(NOT_FOUND_BODY, StatusCode::NOT_FOUND).into_response()
}

fn internal_error_response() -> Response {
    warp::reply::with_status(INTERNAL_ERROR_BODY, StatusCode::INTERNAL_SERVER_ERROR)
        .into_response()
}

async fn games_for_week(
    season: String,
    week: String,
    loader: Loader,
    config: RouteConfig,
) -> Result<Response, Rejection> {
    // Loading reads files, keep it off the async workers.
    let view = task::spawn_blocking(move || {
        let games = week_view(&loader, &season, &week);
        (season, week, games)
    })
    .await;

    let response = match view {
        Ok((_, _, Ok(games))) => json_response(&games, config.cache_max_age_sec),
        Ok((season, week, Err(e))) if e.is_not_found() => {
            debug!("No data for season {season} week {week}");
            not_found_response()
        }
        Ok((season, week, Err(e))) => {
            error!("Could not serve season {season} week {week}. {e}");
            internal_error_response()
        }
        Err(e) => {
            error!("Week view task failed. {e}");
            internal_error_response()
        }
    };
    Ok(response)
}

async fn games_for_season(
    season: String,
    loader: Loader,
    config: RouteConfig,
) -> Result<Response, Rejection> {
    let view =
        task::spawn_blocking(move || season_view(&loader, &season, config.season_weeks)).await;

    let response = match view {
        Ok(games) => json_response(&games, config.cache_max_age_sec),
        Err(e) => {
            error!("Season view task failed. {e}");
            internal_error_response()
        }
    };
    Ok(response)
}
