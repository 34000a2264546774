use gamestats::aggregate::{season_view, week_view};
use gamestats::loader::Loader;
use gamestats::preload::preload;
use gamestats::source::FsSource;
use gamestats::storage::RecordStore;

use std::fs;
use std::path::Path;
use std::sync::Arc;

fn write_season(root: &Path, season: &str, weeks: &[u32]) {
    fs::create_dir_all(root.join(season)).unwrap();
    for week in weeks {
        let content = format!(
            r#"[
                {{"id": "{season}-{week}-a", "offense": {{"totalPlays": 100, "totalPoints": 40}}}},
                {{"id": "{season}-{week}-b", "offense": {{"totalPlays": 100, "totalPoints": 70}}}}
            ]"#
        );
        fs::write(root.join(season).join(format!("{week}.json")), content).unwrap();
    }
}

#[test]
fn preloaded_data_outlives_the_files() {
    let dir = tempfile::tempdir().unwrap();
    write_season(dir.path(), "2023", &[1, 2, 3]);
    write_season(dir.path(), "2024", &[1, 2, 4]);

    let store = RecordStore::new();
    let loader = Loader::new(store.clone(), Arc::new(FsSource::new(dir.path())));
    assert_eq!(preload(&loader), 6);
    assert_eq!(store.len(), 6);

    fs::remove_dir_all(dir.path().join("2023")).unwrap();
    fs::remove_dir_all(dir.path().join("2024")).unwrap();

    let ranked = week_view(&loader, "2023", "2").unwrap();
    let ids = ranked.iter().map(|g| g.id.as_str()).collect::<Vec<&str>>();
    assert_eq!(ids, vec!["2023-2-b", "2023-2-a"]);
    assert_eq!(ranked[0].offensive_rating, 2.0);

    // Week 3 of 2024 never existed, so week 4 is never reached.
    let season = season_view(&loader, "2024", 18);
    let ids = season.iter().map(|g| g.id.as_str()).collect::<Vec<&str>>();
    assert_eq!(ids, vec!["2024-1-a", "2024-1-b", "2024-2-a", "2024-2-b"]);
}

#[test]
fn clearing_the_store_forces_a_reload() {
    let dir = tempfile::tempdir().unwrap();
    write_season(dir.path(), "2024", &[1]);

    let store = RecordStore::new();
    let loader = Loader::new(store.clone(), Arc::new(FsSource::new(dir.path())));
    assert_eq!(week_view(&loader, "2024", "1").unwrap().len(), 2);

    fs::remove_file(dir.path().join("2024").join("1.json")).unwrap();
    assert_eq!(week_view(&loader, "2024", "1").unwrap().len(), 2);

    store.clear();
    assert!(week_view(&loader, "2024", "1").unwrap_err().is_not_found());
}
