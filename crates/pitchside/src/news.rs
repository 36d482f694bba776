//! Football news from a fixed set of feeds.
//!
//! Fetching and parsing the remote RSS belongs to a [`NewsProvider`].
//! [`JsonCatalog`] serves article snapshots stored under `news/` in the
//! data directory, one file per feed.

use crate::catalog::{CatalogError, JsonCatalog};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::{debug, info, instrument, warn};

/// Most articles shown for one feed.
pub const ARTICLE_LIMIT: usize = 15;

/// A news feed the reader can switch between.
///
/// Parses from either the display name or the short slug, ignoring case.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Feed {
    /// BBC Sport football headlines.
    #[default]
    #[strum(to_string = "BBC Sport", serialize = "bbc")]
    BbcSport,
    /// ESPN soccer news.
    #[strum(to_string = "ESPN", serialize = "espn")]
    Espn,
}

impl Feed {
    /// Display name, e.g. "BBC Sport".
    pub fn name(self) -> String {
        self.to_string()
    }

    /// RSS address the feed is published at.
    pub fn url(self) -> &'static str {
        match self {
            Feed::BbcSport => "https://feeds.bbci.co.uk/sport/football/rss.xml",
            Feed::Espn => "https://www.espn.com/espn/rss/soccer/news",
        }
    }

    /// Short name used on the command line and for snapshot files.
    pub fn slug(self) -> &'static str {
        match self {
            Feed::BbcSport => "bbc",
            Feed::Espn => "espn",
        }
    }
}

/// One item of a feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Article {
    /// Headline.
    title: String,
    /// Link to the full story.
    link: String,
    /// Teaser text, when the feed carries one.
    #[serde(default)]
    #[new(default)]
    description: Option<String>,
    /// Publication date as written by the feed.
    #[serde(default, rename = "pubDate")]
    #[new(default)]
    pub_date: Option<String>,
}

/// Anything that can hand out a feed's articles, newest first.
pub trait NewsProvider {
    /// Every article currently in `feed`.
    fn articles(&self, feed: Feed) -> Result<Vec<Article>, CatalogError>;
}

impl JsonCatalog {
    /// Directory under the data directory holding feed snapshots.
    pub const NEWS_DIR: &'static str = "news";

    /// Snapshot file for `feed`, relative to the data directory.
    pub fn news_file(feed: Feed) -> String {
        format!("{}/{}.json", Self::NEWS_DIR, feed.slug())
    }
}

impl NewsProvider for JsonCatalog {
    fn articles(&self, feed: Feed) -> Result<Vec<Article>, CatalogError> {
        self.load(&Self::news_file(feed))
    }
}

/// The selected feed and the articles on show for it.
#[derive(Debug, Clone, Default, Getters)]
pub struct NewsReader {
    /// Feed currently selected. Starts on the first feed.
    selected: Feed,
    /// Articles on show, at most [`ARTICLE_LIMIT`].
    articles: Vec<Article>,
}

impl NewsReader {
    /// Selects `feed` and replaces the articles with its first
    /// [`ARTICLE_LIMIT`] items.
    ///
    /// The selection changes and the old articles are cleared even when the
    /// provider fails.
    #[instrument(skip(self, provider))]
    pub fn load_feed<P: NewsProvider + ?Sized>(
        &mut self,
        provider: &P,
        feed: Feed,
    ) -> Result<&[Article], CatalogError> {
        self.selected = feed;
        self.articles.clear();

        let mut articles = provider.articles(feed).inspect_err(|e| {
            warn!(error = %e, "Feed unavailable");
        })?;
        debug!(available = articles.len(), "Feed loaded");
        articles.truncate(ARTICLE_LIMIT);
        self.articles = articles;

        info!(shown = self.articles.len(), "Showing articles");
        Ok(&self.articles)
    }
}
