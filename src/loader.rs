use crate::config::DataConfig;
use crate::error::DashboardError;
use crate::models::listing::Listing;
use crate::models::neighbourhood::Neighbourhood;
use crate::models::review::Review;
use leptos::logging::log;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// The three source tables, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub listings: Vec<Listing>,
    pub reviews: Vec<Review>,
    pub neighbourhoods: Vec<Neighbourhood>,
}

impl Dataset {
    pub fn load(config: &DataConfig) -> Result<Self, DashboardError> {
        let dataset = Dataset {
            listings: read_csv_file(&config.listings)?,
            reviews: read_csv_file(&config.reviews)?,
            neighbourhoods: read_csv_file(&config.neighbourhoods)?,
        };
        log!(
            "[LOADER] Loaded {} listings, {} reviews, {} neighbourhoods",
            dataset.listings.len(),
            dataset.reviews.len(),
            dataset.neighbourhoods.len()
        );
        Ok(dataset)
    }
}

fn read_csv_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DashboardError> {
    log!("[LOADER] Reading {}", path.display());
    let file = File::open(path).map_err(|source| DashboardError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv(file).map_err(|source| DashboardError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Deserializes every record by header name. Columns the record type does not
/// name, such as an exported index column, are ignored.
pub fn read_csv<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>, csv::Error> {
    csv::Reader::from_reader(reader).deserialize().collect()
}
