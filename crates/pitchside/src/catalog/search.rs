//! Club search and listing helpers.

use super::{Club, NationalTeam};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Clubs listed first when no search term is entered.
pub const HIGHLIGHTED_CLUBS: [&str; 8] = [
    "Real Madrid",
    "Inter Milan",
    "Racing Club",
    "Barcelona",
    "Chelsea",
    "Paris Saint-Germain",
    "Liverpool",
    "Tottenham Hotspur",
];

/// Number of clubs shown per page.
pub const PAGE_SIZE: usize = 100;

/// Search term plus how many results are visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubFilter {
    term: String,
    visible: usize,
}

impl Default for ClubFilter {
    fn default() -> Self {
        Self {
            term: String::new(),
            visible: PAGE_SIZE,
        }
    }
}

impl ClubFilter {
    /// Creates a filter for `term` showing one page.
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    /// Current search term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Number of results shown.
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Replaces the search term.
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    /// Clears the search term.
    pub fn clear(&mut self) {
        self.term.clear();
    }

    /// Shows one more page of results.
    pub fn load_more(&mut self) {
        self.visible += PAGE_SIZE;
    }

    /// Sets the visible limit directly.
    pub fn with_visible(mut self, visible: usize) -> Self {
        self.visible = visible;
        self
    }

    /// Applies the filter.
    ///
    /// With no term, highlighted clubs come first (in catalog order) and the
    /// rest follow. With a term, clubs whose name or location contains it,
    /// ignoring case, are returned. Either way at most `visible` clubs.
    #[instrument(skip(self, clubs), fields(term = %self.term, clubs = clubs.len()))]
    pub fn apply<'a>(&self, clubs: &'a [Club]) -> Vec<&'a Club> {
        let term = self.term.trim().to_lowercase();

        let results: Vec<&Club> = if term.is_empty() {
            let (highlighted, rest): (Vec<&Club>, Vec<&Club>) =
                clubs.iter().partition(|club| is_highlighted(club));
            highlighted
                .into_iter()
                .chain(rest)
                .take(self.visible)
                .collect()
        } else {
            clubs
                .iter()
                .filter(|club| {
                    club.club_name().to_lowercase().contains(&term)
                        || club.city_country().to_lowercase().contains(&term)
                })
                .take(self.visible)
                .collect()
        };

        debug!(results = results.len(), "Club filter applied");
        results
    }
}

fn is_highlighted(club: &Club) -> bool {
    HIGHLIGHTED_CLUBS.contains(&club.club_name().as_str())
}

/// Shuffles the club list once, before it is first listed.
///
/// [`ClubFilter::apply`] keeps the order it is given, so highlighted clubs
/// still come first but in shuffled order, as do the rest.
#[instrument(skip_all, fields(clubs = clubs.len()))]
pub fn shuffle_clubs<R: Rng + ?Sized>(clubs: &mut [Club], rng: &mut R) {
    clubs.shuffle(rng);
    debug!("Club list shuffled");
}

/// Picks a random club, e.g. to use its name as a search term.
pub fn random_club<'a, R: Rng + ?Sized>(clubs: &'a [Club], rng: &mut R) -> Option<&'a Club> {
    clubs.choose(rng)
}

/// Short text for sharing a club.
pub fn share_text(club: &Club) -> String {
    format!(
        "Check out {} from {}! ⚽",
        club.club_name(),
        club.city_country()
    )
}

/// National teams ordered A to Z by name.
#[instrument(skip(teams), fields(teams = teams.len()))]
pub fn sorted_national_teams(mut teams: Vec<NationalTeam>) -> Vec<NationalTeam> {
    teams.sort_by(|a, b| a.name().to_lowercase().cmp(&b.name().to_lowercase()));
    teams
}

#[cfg(test)]
mod tests {
    use super::*;

    fn club(name: &str, place: &str) -> Club {
        Club::new(name.to_string(), place.to_string())
    }

    #[test]
    fn test_highlighted_first_when_no_term() {
        let clubs = vec![
            club("Ajax", "Amsterdam, Netherlands"),
            club("Chelsea", "London, England"),
            club("Porto", "Porto, Portugal"),
            club("Real Madrid", "Madrid, Spain"),
        ];
        let names: Vec<&str> = ClubFilter::default()
            .apply(&clubs)
            .iter()
            .map(|c| c.club_name().as_str())
            .collect();
        assert_eq!(names, vec!["Chelsea", "Real Madrid", "Ajax", "Porto"]);
    }

    #[test]
    fn test_load_more_extends_page() {
        let mut filter = ClubFilter::default();
        filter.load_more();
        assert_eq!(filter.visible(), 2 * PAGE_SIZE);
    }
}
