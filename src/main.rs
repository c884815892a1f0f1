//! Hero Draft - command-line host
//!
//! Manages enabled sets and runs drafts on stdin.

#![warn(missing_docs)]

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Command, SetsAction};
use hero_draft::{
    ActiveSets, AppConfig, ChoiceKind, DraftMode, DraftPool, DraftSequencer, FileStorage,
    HeroCode, MapCode, MatchLink, PoolResolver, RandomSample, SetCode, StartPosition, StepKind,
    Submission,
};
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?.with_env_overrides();
    let mut storage = FileStorage::new(config.storage_dir());

    match cli.command {
        Command::Sets { action } => run_sets(action, &mut storage),
        Command::Pool => run_pool(&storage),
        Command::Random { heroes, maps } => run_random(
            &storage,
            heroes.unwrap_or(*config.random_heroes()),
            maps.unwrap_or(*config.random_maps()),
        ),
        Command::Draft { mode, heroes, maps } => {
            let pool = match (heroes, maps) {
                (Some(heroes), Some(maps)) => DraftPool::from_lists(&heroes, &maps),
                _ => PoolResolver::builtin().resolve(&ActiveSets::load(&storage)),
            };
            run_draft(mode.unwrap_or(*config.mode()), &pool)
        }
    }
}

/// Show or change the enabled sets
#[instrument(skip(storage))]
fn run_sets(action: SetsAction, storage: &mut FileStorage) -> Result<()> {
    let mut sets = ActiveSets::load(&*storage);

    match action {
        SetsAction::List => {
            for set in SetCode::iter() {
                let mark = if sets.is_active(set) { "x" } else { " " };
                println!("[{}] {:<8} {}", mark, set.code(), set.name());
            }
            println!("{}/{} sets enabled", sets.active_count(), sets.total_count());
            return Ok(());
        }
        SetsAction::Toggle { set } => sets.toggle(set),
        SetsAction::All => sets.activate_all(),
        SetsAction::None => sets.deactivate_all(),
    }

    sets.save(storage)?;
    info!(active = sets.active_count(), "Sets updated");
    println!("{}/{} sets enabled", sets.active_count(), sets.total_count());
    Ok(())
}

/// Print the current pool
#[instrument(skip(storage))]
fn run_pool(storage: &FileStorage) -> Result<()> {
    let pool = PoolResolver::builtin().resolve(&ActiveSets::load(storage));

    println!("Heroes ({}):", pool.heroes.len());
    for hero in &pool.heroes {
        println!("  {:<16} {}", hero.code(), hero.name());
    }
    println!("Maps ({}):", pool.maps.len());
    for map in &pool.maps {
        println!("  {:<16} {}", map.code(), map.name());
    }
    Ok(())
}

/// Draw a random pool
#[instrument(skip(storage))]
fn run_random(storage: &FileStorage, heroes: usize, maps: usize) -> Result<()> {
    let pool = PoolResolver::builtin().resolve(&ActiveSets::load(storage));
    let mut rng = rand::rng();

    let sample = DraftPool {
        heroes: RandomSample::new(pool.heroes, heroes).generate(&mut rng),
        maps: RandomSample::new(pool.maps, maps).generate(&mut rng),
    };

    let (heroes, maps) = sample.to_lists();
    println!("--heroes {} --maps {}", heroes, maps);
    Ok(())
}

/// Run a draft, reading one selection per line
#[instrument(skip(pool))]
fn run_draft(mode: DraftMode, pool: &DraftPool) -> Result<()> {
    if pool.heroes.is_empty() {
        bail!("No heroes available: enable at least one set");
    }

    let mut draft = DraftSequencer::new(&mode.schema());
    let stdin = std::io::stdin();
    prompt(&draft, pool)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        let Ok(step) = draft.current_step() else {
            break;
        };

        let submission = match step.kind() {
            StepKind::Pick | StepKind::Ban => match input.parse::<HeroCode>() {
                Ok(hero) if pool.contains_hero(hero) => draft.select_hero(hero),
                _ => {
                    println!("Not an available hero: {}", input);
                    continue;
                }
            },
            StepKind::Map => match input.parse::<MapCode>() {
                Ok(map) if pool.contains_map(map) => draft.select_map(map),
                _ => {
                    println!("Not an available map: {}", input);
                    continue;
                }
            },
            StepKind::Position => match parse_position(input) {
                Some(position) => draft.select_position(position),
                None => {
                    println!("Enter 1 or 2");
                    continue;
                }
            },
            StepKind::Choice => {
                if let Ok(kind) = input.parse::<ChoiceKind>() {
                    let resolution = draft.resolve_choice(kind);
                    info!(?resolution, "Choice made");
                    prompt(&draft, pool)?;
                    continue;
                }
                match (input.parse::<MapCode>(), parse_position(input)) {
                    (Ok(map), _) if pool.contains_map(map) => draft.select_map(map),
                    (_, Some(position)) => draft.select_position(position),
                    _ => {
                        println!("Enter map, position, a map code, or 1/2");
                        continue;
                    }
                }
            }
            StepKind::Final => {
                warn!("Final step reached before its choice was resolved");
                bail!("Draft schema is inconsistent");
            }
        };

        match submission {
            Submission::Completed(result) => {
                println!("{}", MatchLink::from(&result));
                return Ok(());
            }
            Submission::Ignored(rejection) => println!("Ignored: {}", rejection),
            Submission::Advanced { .. } => {}
        }
        prompt(&draft, pool)?;
    }

    bail!("Input ended before the draft was complete")
}

fn parse_position(input: &str) -> Option<StartPosition> {
    input.parse::<u8>().ok().and_then(StartPosition::from_number)
}

/// Print the current step and its options
fn prompt(draft: &DraftSequencer, pool: &DraftPool) -> Result<()> {
    let step = draft.current_step()?;
    let mut out = std::io::stdout().lock();

    writeln!(out)?;
    match step.kind() {
        StepKind::Pick | StepKind::Ban => {
            let open: Vec<&str> = pool
                .heroes
                .iter()
                .filter(|hero| draft.hero_draft_step(**hero).is_none())
                .map(|hero| hero.code())
                .collect();
            writeln!(out, "Available: {}", open.join(", "))?;
        }
        StepKind::Map => {
            let maps: Vec<&str> = pool.maps.iter().map(|map| map.code()).collect();
            writeln!(out, "Maps: {}", maps.join(", "))?;
        }
        StepKind::Position => writeln!(out, "Positions: 1 (moves first), 2")?,
        StepKind::Choice => writeln!(out, "Choose: map or position")?,
        StepKind::Final => {}
    }
    write!(out, "Team {} {} > ", step.team(), step.kind())?;
    out.flush()?;
    Ok(())
}
