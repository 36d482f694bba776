//! Catalog records as stored in the JSON assets.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A football club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Club {
    /// Club name, e.g. "Racing Club".
    club_name: String,
    /// Location label, e.g. "Avellaneda, Argentina".
    city_country: String,
    /// Optional crest image path.
    #[serde(default)]
    #[new(default)]
    logo: Option<String>,
    /// Year the club was founded, when known.
    #[serde(default)]
    #[new(default)]
    founded: Option<u16>,
}

/// A stadium and its home team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
pub struct Stadium {
    /// Stadium name.
    stadium_name: String,
    /// Home team.
    team: String,
    /// Latitude in degrees.
    #[serde(default)]
    lat: Option<f64>,
    /// Longitude in degrees.
    #[serde(default)]
    lon: Option<f64>,
    /// Seated capacity, when known.
    #[serde(default)]
    #[new(default)]
    capacity: Option<u32>,
}

impl Stadium {
    /// Coordinates as `(lat, lon)`, if both are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.lat?, self.lon?))
    }
}

/// A national team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct NationalTeam {
    /// Country name.
    name: String,
    /// Confederation, e.g. "CONMEBOL".
    #[serde(default)]
    #[new(default)]
    confederation: Option<String>,
}
