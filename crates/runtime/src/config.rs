//! Storage configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "RESERVATIONS_DATA_DIR";

/// Where the three collection documents live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub hotels_file: String,
    pub customers_file: String,
    pub reservations_file: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new("data")
    }
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            hotels_file: "hotels.json".to_owned(),
            customers_file: "customers.json".to_owned(),
            reservations_file: "reservations.json".to_owned(),
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `RESERVATIONS_DATA_DIR` - Directory holding the JSON documents (default: `data`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>(DATA_DIR_ENV) {
            config.data_dir = dir;
        }

        config
    }

    pub fn hotels_path(&self) -> PathBuf {
        self.data_dir.join(&self.hotels_file)
    }

    pub fn customers_path(&self) -> PathBuf {
        self.data_dir.join(&self.customers_file)
    }

    pub fn reservations_path(&self) -> PathBuf {
        self.data_dir.join(&self.reservations_file)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
