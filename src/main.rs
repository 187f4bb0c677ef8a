use dexbase;

use dexbase::locale;
use dexbase::source;
use dexbase::{Layout, Locale, Pokedex, Query, creature};

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io;
use std::path::PathBuf;

/// Browses the Pokédex of a Pokémon Studio project.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Base URL or directory the documents are read from
    #[arg(long, env = "STUDIODEX_SOURCE", default_value = ".")]
    source: String,
    /// RON file overriding where documents live inside the source
    #[arg(long, env = "STUDIODEX_LAYOUT")]
    layout: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Prints the page of a Pokémon
    Show {
        pokemon: String,
        #[arg(long, default_value = locale::DEFAULT)]
        lang: String,
    },
    /// Prints the page of a request, e.g. `?pokemon=bulbasaur&lang=de`
    Open { request: String },
    /// Lists every Pokémon of the national dex
    List,
    /// Lists the Pokémon whose symbol contains the query
    Search { query: String },
    /// Prints the layout in use
    Layout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Ron,
}

#[tokio::main]
async fn main() -> Result<(), anywho::Error> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();

    let layout = match &cli.layout {
        Some(path) => Layout::load(path).await?,
        None => Layout::default(),
    };

    log::debug!("Reading documents from {}", cli.source);
    let pokedex = Pokedex::new(source::Any::parse(&cli.source)?, layout);

    match cli.command {
        Command::Show { pokemon, lang } => {
            let view = pokedex
                .view(&creature::Id::new(pokemon), &Locale::new(lang))
                .await;

            print(&view, cli.format)
        }
        Command::Open { request } => {
            let Some(view) = pokedex.open(&Query::parse(&request)).await else {
                return Err(dexbase::Error::NotFound(format!("pokemon parameter in {request:?}")).into());
            };

            print(&view, cli.format)
        }
        Command::List => print(&pokedex.list().await?, cli.format),
        Command::Search { query } => print(&pokedex.search(&query).await?, cli.format),
        Command::Layout => print(pokedex.layout(), cli.format),
    }
}

fn print(value: &impl Serialize, format: Format) -> Result<(), anywho::Error> {
    let output = match format {
        Format::Json => serde_json::to_string_pretty(value)?,
        Format::Ron => ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())?,
    };

    println!("{output}");

    Ok(())
}
