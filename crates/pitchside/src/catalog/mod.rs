//! Catalog of clubs, stadiums, and national teams loaded from JSON assets.

mod error;
mod models;
mod provider;
mod search;

pub use error::CatalogError;
pub use models::{Club, NationalTeam, Stadium};
pub use provider::{CatalogProvider, JsonCatalog};
pub use search::{
    ClubFilter, HIGHLIGHTED_CLUBS, PAGE_SIZE, random_club, share_text, shuffle_clubs,
    sorted_national_teams,
};
