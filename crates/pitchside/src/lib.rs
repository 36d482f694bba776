//! Pitchside - a football club catalog with a word-search game.
//!
//! # Architecture
//!
//! - **Catalog**: clubs, stadiums and national teams read from JSON assets,
//!   with club search and listing helpers.
//! - **News**: headlines from BBC Sport and ESPN behind a provider trait.
//! - **Stadiums**: name suggestions and great-circle distances.
//! - **Quiz**: guess-the-club rounds with a running score.
//! - **TUI**: the word search played in the terminal, driven by
//!   [`pitchside_wordsearch`].
//! - **Config**: TOML settings shared by all of the above.
//!
//! # Example
//!
//! ```no_run
//! use pitchside::{CatalogProvider, JsonCatalog, PitchsideConfig};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = PitchsideConfig::load(None)?;
//! let catalog = JsonCatalog::new(config.data_dir());
//! let names = catalog.club_names()?;
//! pitchside::run_wordsearch(names, config, Some(7))?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod catalog;
mod config;
mod news;
mod quiz;
mod stadiums;
mod tui;

// Crate-level exports - Catalog
pub use catalog::{
    CatalogError, CatalogProvider, Club, ClubFilter, HIGHLIGHTED_CLUBS, JsonCatalog, NationalTeam,
    PAGE_SIZE, Stadium, random_club, share_text, shuffle_clubs, sorted_national_teams,
};

// Crate-level exports - Configuration
pub use config::{CONFIG_ENV, ConfigError, DEFAULT_CONFIG_FILE, PitchsideConfig};

// Crate-level exports - News
pub use news::{ARTICLE_LIMIT, Article, Feed, NewsProvider, NewsReader};

// Crate-level exports - Quiz
pub use quiz::{OPTION_COUNT, QuizError, QuizResult, QuizRound, QuizScore};

// Crate-level exports - Stadiums
pub use stadiums::{EARTH_RADIUS_KM, MIN_SUGGESTION_LEN, distance_km, find_exact, haversine_km, suggestions};

// Crate-level exports - Terminal UI
pub use tui::{
    CELEBRATION_FRAMES, CELL_WIDTH, Celebration, Screen, Spark, TUI_LOG_FILE, WordSearchApp,
    cell_at, hex_color, move_cursor, run_wordsearch, screen,
};
