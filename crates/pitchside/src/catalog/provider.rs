//! Sources of catalog records.

use super::{CatalogError, Club, NationalTeam, Stadium};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Anything that can hand out the catalog's record lists.
pub trait CatalogProvider {
    /// All clubs.
    fn clubs(&self) -> Result<Vec<Club>, CatalogError>;

    /// All stadiums.
    fn stadiums(&self) -> Result<Vec<Stadium>, CatalogError>;

    /// All national teams.
    fn national_teams(&self) -> Result<Vec<NationalTeam>, CatalogError>;

    /// Club names only, in catalog order. Used to seed word puzzles.
    fn club_names(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self
            .clubs()?
            .into_iter()
            .map(|club| club.club_name().clone())
            .collect())
    }
}

/// Reads `clubs.json`, `stadiums.json` and `national_teams.json` from a directory.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    data_dir: PathBuf,
}

impl JsonCatalog {
    /// File holding the club list.
    pub const CLUBS_FILE: &'static str = "clubs.json";
    /// File holding the stadium list.
    pub const STADIUMS_FILE: &'static str = "stadiums.json";
    /// File holding the national team list.
    pub const NATIONAL_TEAMS_FILE: &'static str = "national_teams.json";

    /// Creates a catalog rooted at `data_dir`. Files are read on demand.
    #[instrument(skip(data_dir), fields(data_dir = %data_dir.as_ref().display()))]
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        info!("Creating JSON catalog");
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Directory the JSON files are read from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[instrument(skip(self))]
    pub(crate) fn load<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, CatalogError> {
        let path = self.data_dir.join(file);
        debug!(path = %path.display(), "Reading catalog file");
        let content = std::fs::read_to_string(&path).map_err(|e| {
            CatalogError::new(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        let records: Vec<T> = serde_json::from_str(&content).map_err(|e| {
            CatalogError::new(format!("Failed to parse '{}': {}", path.display(), e))
        })?;
        debug!(count = records.len(), "Catalog file loaded");
        Ok(records)
    }
}

impl CatalogProvider for JsonCatalog {
    fn clubs(&self) -> Result<Vec<Club>, CatalogError> {
        self.load(Self::CLUBS_FILE)
    }

    fn stadiums(&self) -> Result<Vec<Stadium>, CatalogError> {
        self.load(Self::STADIUMS_FILE)
    }

    fn national_teams(&self) -> Result<Vec<NationalTeam>, CatalogError> {
        self.load(Self::NATIONAL_TEAMS_FILE)
    }
}
