#![allow(dead_code)]

use airbnb_dashboard::config::DataConfig;
use airbnb_dashboard::db::Database;
use airbnb_dashboard::loader::Dataset;
use chrono::NaiveDate;
use std::path::Path;

pub fn fixture_config() -> DataConfig {
    DataConfig::in_dir(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

pub fn fixture_dataset() -> Dataset {
    Dataset::load(&fixture_config()).expect("fixture CSVs load")
}

pub async fn fixture_db() -> Database {
    let db = Database::new(":memory:").unwrap();
    db.create_schema().await.unwrap();
    db.load_dataset(&fixture_dataset()).await.unwrap();
    db
}

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}
