// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use anywho::{Error, anywho};
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use pokecatalog::{
    Catalog, CatalogStatus, Config,
    app::utils::{FlagEffect, presentation},
    core::{
        ApiConfig, CachedSource, CatalogCache, CatalogSnapshot, CatalogSource, Favorites,
        FileStore, PokeApi,
    },
    entities::PokemonDetail,
};

/// Browse the Pokémon catalog, filter it and keep a list of favorites
#[derive(Parser)]
#[command(name = "pokecatalog", version, about)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base url of the Pokémon API
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Requests in flight per batch while downloading the catalog
    #[arg(long, global = true)]
    concurrency: Option<usize>,

    /// Reuse (or create) the on-disk catalog snapshot
    #[arg(long, global = true)]
    cached: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show one page of the catalog
    List {
        /// Case-insensitive part of the name
        #[arg(short, long)]
        search: Option<String>,
        /// Only Pokémon of this type, repeat to allow several types
        #[arg(short = 't', long = "type")]
        types: Vec<String>,
        /// Enable a filter flag (has-sprite, has-held-items)
        #[arg(short, long = "flag")]
        flags: Vec<String>,
        /// Page to show
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Show the details of one Pokémon
    Show { name: String },

    /// List the type names the catalog can be filtered by
    Types,

    /// Manage favorite Pokémon
    Favorites {
        #[command(subcommand)]
        action: Option<FavoritesAction>,
    },

    /// Download the whole catalog into a RON snapshot
    Snapshot { path: PathBuf },
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// List favorite Pokémon
    List,
    /// Add a Pokémon to favorites
    Add { name: String },
    /// Remove a Pokémon from favorites
    Remove { name: String },
    /// Add the Pokémon if it is not a favorite, remove it otherwise
    Toggle { name: String },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let config = load_config(&cli)?;
    let api = PokeApi::new(ApiConfig::from(&config))?;

    match cli.command {
        Command::List {
            search,
            types,
            flags,
            page,
        } => {
            let source = catalog_source(&config, api);
            let mut catalog = Catalog::new(config.items_per_page);

            info!("Catching all the Pokémon, please wait...");
            catalog.load(source.as_ref()).await;
            if let CatalogStatus::Error(message) = catalog.status() {
                return Err(anywho!("Could not load the catalog: {message}"));
            }

            if let Some(term) = search {
                catalog.set_search(term);
            }
            for type_name in &types {
                catalog.toggle_type(type_name);
            }
            for flag in &flags {
                if FlagEffect::from_name(flag).is_none() {
                    let known: Vec<&str> =
                        FlagEffect::ALL.iter().map(FlagEffect::name).collect();
                    warn!("Flag {flag} has no effect, known flags: {}", known.join(", "));
                }
                catalog.toggle_flag(flag);
            }
            catalog.go_to_page(page);

            println!(
                "{}",
                presentation::catalog_page(&catalog.current_page(), catalog.paginator())
            );
        }
        Command::Show { name } => {
            let pokemon = api.fetch_pokemon(&name).await?;
            let favorites = favorites(&config);

            println!(
                "{}",
                presentation::detail(
                    &PokemonDetail::from(&pokemon),
                    favorites.is_favorite(&pokemon.name)
                )
            );
        }
        Command::Types => {
            let types = catalog_source(&config, api).fetch_types().await?;
            println!("{}", presentation::type_list(&types));
        }
        Command::Favorites { action } => {
            let favorites = favorites(&config);

            match action.unwrap_or(FavoritesAction::List) {
                FavoritesAction::List => {
                    println!("{}", presentation::favorites(&favorites.list()));
                }
                FavoritesAction::Add { name } => {
                    let pokemon = api.fetch_pokemon(&name).await?;
                    if favorites.is_favorite(&pokemon.name) {
                        println!("{} is already a favorite", pokemon.name);
                    } else {
                        favorites.add(&pokemon)?;
                        println!("Added {} to favorites", pokemon.name);
                    }
                }
                FavoritesAction::Remove { name } => {
                    let name = name.trim().to_lowercase();
                    favorites.remove(&name)?;
                    println!("Removed {name} from favorites");
                }
                FavoritesAction::Toggle { name } => {
                    let pokemon = api.fetch_pokemon(&name).await?;
                    if favorites.toggle(&pokemon)? {
                        println!("Added {} to favorites", pokemon.name);
                    } else {
                        println!("Removed {} from favorites", pokemon.name);
                    }
                }
            }
        }
        Command::Snapshot { path } => {
            let (pokemon, types) = futures::join!(api.fetch_catalog(), api.fetch_types());
            let snapshot = CatalogSnapshot {
                pokemon: pokemon?,
                types: types?,
            };

            CatalogCache::new(&path).save(&snapshot).await?;
            println!(
                "Wrote {} Pokémon and {} types to {}",
                snapshot.pokemon.len(),
                snapshot.types.len(),
                path.display()
            );
        }
    }

    Ok(())
}

/// Config file merged with command line overrides
fn load_config(cli: &Cli) -> Result<Config, Error> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };

    let mut config = Config::load_from(&path)?;
    if let Some(api_url) = &cli.api_url {
        config.api_base_url = api_url.clone();
    }
    if let Some(concurrency) = cli.concurrency {
        config.concurrency = concurrency;
    }
    if cli.cached {
        config.cache_catalog = true;
    }
    config.validate()?;

    Ok(config)
}

fn catalog_source(config: &Config, api: PokeApi) -> Box<dyn CatalogSource> {
    if config.cache_catalog {
        Box::new(CachedSource::new(api, CatalogCache::new(config.cache_path())))
    } else {
        Box::new(api)
    }
}

fn favorites(config: &Config) -> Favorites<FileStore> {
    Favorites::new(FileStore::new(config.data_dir()))
}
