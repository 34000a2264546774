use gamestats::config::Settings;
use gamestats::loader::Loader;
use gamestats::preload::preload;
use gamestats::server::{create_routes, RouteConfig};
use gamestats::source::FsSource;
use gamestats::storage::RecordStore;

use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = Settings::new()?;

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(settings.get_trace_level())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // The store lives as long as the process: nothing is ever evicted.
    let store = RecordStore::new();
    let source = Arc::new(FsSource::new(settings.data_dir.clone()));
    let loader = Loader::new(store.clone(), source);

    if settings.preload {
        info!("Preloading data files from '{}'.", settings.data_dir);
        let preloader = loader.clone();
        tokio::task::spawn_blocking(move || preload(&preloader)).await?;
    }

    let routes = create_routes(loader, RouteConfig::from(&settings));

    info!("Server listening on :{} ({} data files cached).", settings.port, store.len());
    warp::serve(routes).run(([0, 0, 0, 0], settings.port)).await;

    Ok(())
}
