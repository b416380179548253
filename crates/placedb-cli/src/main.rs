//! placedb-cli — Command-line interface for placedb-core
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ placedb stats
//!
//! - Autocomplete a name
//!   $ placedb search bang
//!   $ placedb --limit 3 search portlanx
//!
//! - Show a record
//!   $ placedb get TH-1609350
//!
//! By default the embedded dataset is used. `--input <path>` loads a
//! `.json` or `.json.gz` file instead. Set `RUST_LOG=info` to see load timings.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use placedb_core::{IndexOptions, Place, PlaceIndex, PlaceSearch};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    let mut options = IndexOptions::default();
    if let Some(limit) = args.limit {
        options.max_results = limit;
    }
    log::debug!("index options: {options:?}");

    let owned;
    let index: &PlaceIndex = match (&args.input, args.limit) {
        (None, None) => PlaceIndex::embedded().context("failed to load embedded dataset")?,
        (None, Some(_)) => {
            let places = PlaceIndex::embedded()
                .context("failed to load embedded dataset")?
                .places()
                .to_vec();
            owned = PlaceIndex::build_with_options(places, options);
            &owned
        }
        (Some(path), _) => {
            owned = PlaceIndex::load_from_path_with_options(path, options)
                .with_context(|| format!("failed to load dataset {}", path.display()))?;
            &owned
        }
    };

    match args.command {
        Commands::Stats => {
            let stats = index.stats();
            println!("Index statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  States/Regions: {}", stats.states);
            println!("  Cities: {}", stats.cities);
            println!("  Prefix keys: {}", stats.prefixes);
        }

        Commands::Search { query } => {
            let hits = index.search(&query);
            if hits.is_empty() {
                println!("No places found matching: {query}");
            } else {
                for place in hits {
                    println!("{}", summary_line(place));
                }
            }
        }

        Commands::Get { id } => match index.get_by_id(&id) {
            Some(p) => {
                println!("Place: {}", p.name());
                println!("Id: {}", p.id());
                println!("Type: {}", p.kind());
                println!("Country: {} ({})", p.country, p.country_code);
                if !p.alternate_names.is_empty() {
                    println!("Also known as: {}", p.alternate_names.join(", "));
                }
                match p.location() {
                    Some(c) => println!("Coordinates: {:.5}, {:.5}", c.lat, c.lng),
                    None => println!("Coordinates: unknown"),
                }
                match p.population() {
                    Some(n) => println!("Population: {n}"),
                    None => println!("Population: unknown"),
                }
            }
            None => eprintln!("No place found for id: {id}"),
        },
    }

    Ok(())
}

fn summary_line(p: &Place) -> String {
    format!("{:<12} {}, {} ({})", p.id(), p.name(), p.country, p.kind())
}
