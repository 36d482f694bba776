//! Pitchside - Unified CLI
//!
//! Club catalog, quiz, and word search from one binary.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use pitchside::{
    CatalogProvider, ClubFilter, Feed, JsonCatalog, NewsReader, PitchsideConfig, QuizRound,
    QuizScore, distance_km, find_exact, random_club, share_text, shuffle_clubs, sorted_national_teams,
    suggestions,
};
use pitchside_wordsearch::{PuzzleInstance, sample_words};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // The TUI sets up its own file logging
    if !matches!(cli.command, Command::Wordsearch { .. }) {
        initialize_tracing();
    }

    let config = load_config(cli.config.as_deref())?;
    let catalog = JsonCatalog::new(config.data_dir());

    match cli.command {
        Command::Wordsearch {
            grid_size,
            words,
            seed,
        } => run_wordsearch(&catalog, config, grid_size, words, seed),
        Command::Print { seed, grid_size } => run_print(&catalog, config, seed, grid_size),
        Command::Quiz { rounds } => run_quiz(&catalog, rounds),
        Command::Clubs {
            term,
            limit,
            random,
            seed,
        } => run_clubs(&catalog, term, limit, random, seed),
        Command::News { feed } => run_news(&catalog, &feed),
        Command::Teams => run_teams(&catalog),
        Command::Stadiums { term, from, to } => run_stadiums(&catalog, term, from, to),
    }
}

fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,pitchside=debug")),
        )
        .with_writer(io::stderr)
        .init();
}

#[instrument(skip(explicit))]
fn load_config(explicit: Option<&Path>) -> Result<PitchsideConfig> {
    let config = PitchsideConfig::load(explicit)?;
    info!(data_dir = %config.data_dir().display(), "Using catalog data");
    Ok(config)
}

/// Applies command-line overrides and re-checks the result.
fn override_config(
    config: PitchsideConfig,
    grid_size: Option<usize>,
    words: Option<usize>,
) -> Result<PitchsideConfig> {
    let mut config = config;
    if let Some(grid_size) = grid_size {
        config = config.with_grid_size(grid_size);
    }
    if let Some(words) = words {
        config = config.with_word_count(words);
    }
    config.validate()?;
    Ok(config)
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Run the word-search TUI
fn run_wordsearch(
    catalog: &JsonCatalog,
    config: PitchsideConfig,
    grid_size: Option<usize>,
    words: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let config = override_config(config, grid_size, words)?;
    let names = catalog.club_names()?;
    pitchside::run_wordsearch(names, config, seed)
}

/// Print one puzzle to stdout
#[instrument(skip(catalog, config))]
fn run_print(
    catalog: &JsonCatalog,
    config: PitchsideConfig,
    seed: Option<u64>,
    grid_size: Option<usize>,
) -> Result<()> {
    let config = override_config(config, grid_size, None)?;
    let names = catalog.club_names()?;
    let mut rng = rng_from(seed);

    let words = sample_words(&names, *config.max_word_len(), *config.word_count(), &mut rng);
    let puzzle = PuzzleInstance::generate(words, &config.generator(), &mut rng)?;

    println!("{}", puzzle.grid());
    println!();
    for entry in puzzle.words() {
        println!("  {}", entry.display());
    }
    Ok(())
}

/// Play the guess-the-club quiz on stdin/stdout
#[instrument(skip(catalog))]
fn run_quiz(catalog: &JsonCatalog, rounds: u32) -> Result<()> {
    let clubs = catalog.clubs()?;
    let mut rng = StdRng::from_entropy();
    let mut score = QuizScore::default();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    for number in 1..=rounds {
        let round = QuizRound::new(&clubs, &mut rng)?;
        println!();
        println!("Round {}: which club is from {}?", number, round.club().city_country());
        if let Some(founded) = round.club().founded() {
            println!("  (founded {})", founded);
        }
        for (i, option) in round.options().iter().enumerate() {
            println!("  {}. {}", i + 1, option);
        }

        let result = loop {
            print!("> ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                println!();
                println!("Score: {}", score);
                return Ok(());
            };
            let line = line?;
            let choice = line.trim();

            if let Ok(index) = choice.parse::<usize>() {
                if (1..=round.options().len()).contains(&index) {
                    break round.answer_index(index - 1)?;
                }
            } else if round.is_option(choice) {
                break round.answer(choice)?;
            }
            println!("Pick 1-{} or type a club name.", round.options().len());
        };

        score.record(&result);
        if *result.correct() {
            println!("Correct!");
        } else {
            println!("No, it was {}.", result.answer());
        }
    }

    println!();
    println!("Score: {}", score);
    Ok(())
}

/// Search or sample the club list
#[instrument(skip(catalog))]
fn run_clubs(
    catalog: &JsonCatalog,
    term: Option<String>,
    limit: usize,
    random: bool,
    seed: Option<u64>,
) -> Result<()> {
    let mut clubs = catalog.clubs()?;
    let mut rng = rng_from(seed);

    if random {
        let club = random_club(&clubs, &mut rng).context("The club catalog is empty")?;
        println!("{}", share_text(club));
        return Ok(());
    }

    shuffle_clubs(&mut clubs, &mut rng);

    let filter = ClubFilter::new(term.unwrap_or_default()).with_visible(limit);
    let results = filter.apply(&clubs);
    if results.is_empty() {
        println!("No clubs match {:?}.", filter.term());
    }
    for club in results {
        match club.founded() {
            Some(founded) => println!("{} - {} ({})", club.club_name(), club.city_country(), founded),
            None => println!("{} - {}", club.club_name(), club.city_country()),
        }
    }
    Ok(())
}

/// Print the headlines of one feed
#[instrument(skip(catalog))]
fn run_news(catalog: &JsonCatalog, feed: &str) -> Result<()> {
    let Ok(feed) = feed.parse::<Feed>() else {
        let known: Vec<&str> = Feed::iter().map(Feed::slug).collect();
        bail!("Unknown feed {:?}, expected one of: {}", feed, known.join(", "));
    };

    let mut reader = NewsReader::default();
    let articles = reader.load_feed(catalog, feed)?;
    println!("{} ({})", feed, feed.url());
    if articles.is_empty() {
        println!("No articles.");
    }
    for article in articles {
        println!();
        println!("{}", article.title());
        if let Some(date) = article.pub_date() {
            println!("  {}", date);
        }
        println!("  {}", article.link());
    }
    Ok(())
}

/// List national teams
#[instrument(skip(catalog))]
fn run_teams(catalog: &JsonCatalog) -> Result<()> {
    for team in sorted_national_teams(catalog.national_teams()?) {
        match team.confederation() {
            Some(confederation) => println!("{} ({})", team.name(), confederation),
            None => println!("{}", team.name()),
        }
    }
    Ok(())
}

/// Suggest stadiums or measure the distance between two
#[instrument(skip(catalog))]
fn run_stadiums(
    catalog: &JsonCatalog,
    term: Option<String>,
    from: Option<String>,
    to: Option<String>,
) -> Result<()> {
    let stadiums = catalog.stadiums()?;

    if let Some(term) = term {
        let found = suggestions(&stadiums, &term);
        if found.is_empty() {
            println!("No stadiums match {:?}.", term);
        }
        for stadium in found {
            println!("{} - {}", stadium.stadium_name(), stadium.team());
        }
    }

    if let (Some(from), Some(to)) = (from, to) {
        let Some(a) = find_exact(&stadiums, &from) else {
            bail!("Unknown stadium: {}", from);
        };
        let Some(b) = find_exact(&stadiums, &to) else {
            bail!("Unknown stadium: {}", to);
        };
        match distance_km(a, b) {
            Some(km) => println!(
                "{} to {}: {:.1} km",
                a.stadium_name(),
                b.stadium_name(),
                km
            ),
            None => println!("Coordinates missing for {} or {}.", a.stadium_name(), b.stadium_name()),
        }
    }
    Ok(())
}
