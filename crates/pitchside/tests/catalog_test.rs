//! Tests for the JSON catalog and club search.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use pitchside::{
    CatalogProvider, Club, ClubFilter, HIGHLIGHTED_CLUBS, JsonCatalog, NationalTeam, PAGE_SIZE,
    random_club, share_text, shuffle_clubs, sorted_national_teams,
};
use pitchside_wordsearch::{DEFAULT_MAX_WORD_LEN, DEFAULT_WORD_COUNT, sample_words};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Catalog shipped at the repository root.
fn bundled_data() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

fn write_catalog(dir: &TempDir) {
    fs::write(
        dir.path().join(JsonCatalog::CLUBS_FILE),
        r#"[
            { "club_name": "Racing Club", "city_country": "Avellaneda, Argentina", "founded": 1903 },
            { "club_name": "Peñarol", "city_country": "Montevideo, Uruguay" },
            { "club_name": "Celtic", "city_country": "Glasgow, Scotland", "logo": "celtic.png" }
        ]"#,
    )
    .expect("Write failed");
    fs::write(
        dir.path().join(JsonCatalog::STADIUMS_FILE),
        r#"[
            { "stadium_name": "Celtic Park", "team": "Celtic" },
            { "stadium_name": "Camp Nou", "team": "Barcelona", "lat": 41.38, "lon": 2.12 }
        ]"#,
    )
    .expect("Write failed");
    fs::write(
        dir.path().join(JsonCatalog::NATIONAL_TEAMS_FILE),
        r#"[ { "name": "uruguay" }, { "name": "Argentina", "confederation": "CONMEBOL" } ]"#,
    )
    .expect("Write failed");
}

fn club(name: &str, place: &str) -> Club {
    Club::new(name.to_string(), place.to_string())
}

#[test]
fn test_json_catalog_reads_all_files() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_catalog(&dir);
    let catalog = JsonCatalog::new(dir.path());

    let clubs = catalog.clubs().expect("Clubs failed");
    assert_eq!(clubs.len(), 3);
    assert_eq!(*clubs[0].founded(), Some(1903));
    assert_eq!(*clubs[1].founded(), None);
    assert_eq!(clubs[2].logo().as_deref(), Some("celtic.png"));

    let stadiums = catalog.stadiums().expect("Stadiums failed");
    assert_eq!(stadiums[0].coordinates(), None);
    assert_eq!(stadiums[1].coordinates(), Some((41.38, 2.12)));

    let teams = catalog.national_teams().expect("Teams failed");
    assert_eq!(teams.len(), 2);

    let names = catalog.club_names().expect("Names failed");
    assert_eq!(names, ["Racing Club", "Peñarol", "Celtic"]);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let catalog = JsonCatalog::new(dir.path());

    let err = catalog.clubs().expect_err("Should fail");
    assert!(err.message.contains("read"), "{}", err);
    assert!(err.message.contains(JsonCatalog::CLUBS_FILE), "{}", err);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join(JsonCatalog::CLUBS_FILE), "[{ \"club_name\": 7 }]")
        .expect("Write failed");
    let catalog = JsonCatalog::new(dir.path());

    let err = catalog.clubs().expect_err("Should fail");
    assert!(err.message.contains("parse"), "{}", err);
    assert!(err.message.contains(JsonCatalog::CLUBS_FILE), "{}", err);
}

#[test]
fn test_term_matches_name_or_location() {
    let clubs = vec![
        club("Racing Club", "Avellaneda, Argentina"),
        club("Independiente", "Avellaneda, Argentina"),
        club("Boca Juniors", "Buenos Aires, Argentina"),
        club("Celtic", "Glasgow, Scotland"),
    ];

    let by_place: Vec<&str> = ClubFilter::new("avellaneda")
        .apply(&clubs)
        .iter()
        .map(|c| c.club_name().as_str())
        .collect();
    assert_eq!(by_place, ["Racing Club", "Independiente"]);

    let by_name: Vec<&str> = ClubFilter::new("  CELT ")
        .apply(&clubs)
        .iter()
        .map(|c| c.club_name().as_str())
        .collect();
    assert_eq!(by_name, ["Celtic"]);

    assert!(ClubFilter::new("zzz").apply(&clubs).is_empty());
}

#[test]
fn test_visible_limit_truncates() {
    let clubs: Vec<Club> = (0..250)
        .map(|i| club(&format!("Club {}", i), "Somewhere"))
        .collect();

    let mut filter = ClubFilter::default();
    assert_eq!(filter.apply(&clubs).len(), PAGE_SIZE);
    filter.load_more();
    assert_eq!(filter.apply(&clubs).len(), 2 * PAGE_SIZE);
    filter.load_more();
    assert_eq!(filter.apply(&clubs).len(), 250);

    assert_eq!(ClubFilter::new("club").with_visible(5).apply(&clubs).len(), 5);
}

#[test]
fn test_clear_restores_highlighted_order() {
    let clubs = vec![
        club("Ajax", "Amsterdam, Netherlands"),
        club("Liverpool", "Liverpool, England"),
    ];
    let mut filter = ClubFilter::new("ajax");
    assert_eq!(filter.apply(&clubs).len(), 1);

    filter.clear();
    assert_eq!(filter.term(), "");
    assert_eq!(filter.apply(&clubs)[0].club_name(), "Liverpool");
}

#[test]
fn test_random_club_and_share_text() {
    let clubs = vec![club("Racing Club", "Avellaneda, Argentina")];
    let mut rng = StdRng::seed_from_u64(3);

    let picked = random_club(&clubs, &mut rng).expect("One club to pick");
    assert_eq!(
        share_text(picked),
        "Check out Racing Club from Avellaneda, Argentina! ⚽"
    );
    assert!(random_club(&[], &mut rng).is_none());
}

#[test]
fn test_shuffled_list_keeps_highlighted_clubs_first() {
    let catalog = JsonCatalog::new(bundled_data());
    let original = catalog.clubs().expect("Bundled clubs failed");
    let mut clubs = original.clone();
    let mut rng = StdRng::seed_from_u64(9);

    shuffle_clubs(&mut clubs, &mut rng);
    assert_ne!(clubs, original);
    let mut sorted = clubs.clone();
    sorted.sort_by(|a, b| a.club_name().cmp(b.club_name()));
    let mut expected = original.clone();
    expected.sort_by(|a, b| a.club_name().cmp(b.club_name()));
    assert_eq!(sorted, expected);

    let listed = ClubFilter::default().apply(&clubs);
    let (head, tail) = listed.split_at(HIGHLIGHTED_CLUBS.len());
    assert!(head.iter().all(|c| HIGHLIGHTED_CLUBS.contains(&c.club_name().as_str())));
    assert!(tail.iter().all(|c| !HIGHLIGHTED_CLUBS.contains(&c.club_name().as_str())));

    // Highlighted clubs follow the shuffled order, not the file order.
    let shuffled_highlights: Vec<&Club> = clubs
        .iter()
        .filter(|c| HIGHLIGHTED_CLUBS.contains(&c.club_name().as_str()))
        .collect();
    assert_eq!(head, shuffled_highlights.as_slice());
}

#[test]
fn test_national_teams_sorted_ignoring_case() {
    let teams = vec![
        NationalTeam::new("uruguay".to_string()),
        NationalTeam::new("Argentina".to_string()),
        NationalTeam::new("Brazil".to_string()),
    ];
    let names: Vec<String> = sorted_national_teams(teams)
        .into_iter()
        .map(|t| t.name().clone())
        .collect();
    assert_eq!(names, ["Argentina", "Brazil", "uruguay"]);
}

#[test]
fn test_bundled_catalog_loads() {
    let catalog = JsonCatalog::new(bundled_data());

    let clubs = catalog.clubs().expect("Bundled clubs failed");
    for name in HIGHLIGHTED_CLUBS {
        assert!(
            clubs.iter().any(|c| c.club_name() == name),
            "{} missing from bundled clubs",
            name
        );
    }
    assert!(!catalog.stadiums().expect("Bundled stadiums failed").is_empty());
    assert!(!catalog.national_teams().expect("Bundled teams failed").is_empty());
}

#[test]
fn test_bundled_catalog_fills_a_puzzle() {
    let names = JsonCatalog::new(bundled_data())
        .club_names()
        .expect("Bundled clubs failed");
    let mut rng = StdRng::seed_from_u64(2024);

    let words = sample_words(&names, DEFAULT_MAX_WORD_LEN, DEFAULT_WORD_COUNT, &mut rng);
    assert_eq!(words.len(), DEFAULT_WORD_COUNT);
}
