use std::env;
use std::path::{Path, PathBuf};

pub const DATA_DIR_VAR: &str = "DASHBOARD_DATA_DIR";
pub const LISTINGS_VAR: &str = "DASHBOARD_LISTINGS_CSV";
pub const REVIEWS_VAR: &str = "DASHBOARD_REVIEWS_CSV";
pub const NEIGHBOURHOODS_VAR: &str = "DASHBOARD_NEIGHBOURHOODS_CSV";

const DEFAULT_DATA_DIR: &str = "./data";
const LISTINGS_FILE: &str = "DQLab_listings(22Sep2022).csv";
const REVIEWS_FILE: &str = "DQLab_reviews(22Sep2022).csv";
// sic, the published file name is misspelt
const NEIGHBOURHOODS_FILE: &str = "DQLab_nieghbourhood(22Sep2022).csv";

/// Locations of the three source tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataConfig {
    pub listings: PathBuf,
    pub reviews: PathBuf,
    pub neighbourhoods: PathBuf,
}

impl DataConfig {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        DataConfig {
            listings: dir.join(LISTINGS_FILE),
            reviews: dir.join(REVIEWS_FILE),
            neighbourhoods: dir.join(NEIGHBOURHOODS_FILE),
        }
    }

    /// Reads `DASHBOARD_DATA_DIR` and the per-file overrides.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let dir = lookup(DATA_DIR_VAR).unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
        let mut config = Self::in_dir(dir);
        if let Some(path) = lookup(LISTINGS_VAR) {
            config.listings = path.into();
        }
        if let Some(path) = lookup(REVIEWS_VAR) {
            config.reviews = path.into();
        }
        if let Some(path) = lookup(NEIGHBOURHOODS_VAR) {
            config.neighbourhoods = path.into();
        }
        config
    }
}
