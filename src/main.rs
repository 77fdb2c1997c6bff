use clap::{Parser, Subcommand};
use color_eyre::Result;
use std::path::PathBuf;

use opencraft::cache::canonical_key;
use opencraft::config::{self, Config};
use opencraft::error::OpencraftError;
use opencraft::settings::{Provider, mask_key};
use opencraft::storage::FileStore;
use opencraft::{CombinationCache, ResourceCatalog, Settings, SettingsStore, Skill};

/// Skill-combination tool with a persistent combination cache
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Skill-combination tool with a persistent combination cache"
)]
struct Args {
    /// Directory for persisted stores (overrides storage.data_dir in the config file)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up the result of combining two skills, printing the merge prompt on a miss
    Combine {
        first: String,
        second: String,
        /// Use the chain-of-thought merge prompt
        #[arg(long)]
        chain_of_thought: bool,
    },
    /// Store the result of combining two skills
    Remember {
        first: String,
        second: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        emoji: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Inspect or clear the combination cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
    /// Manage the resource catalog
    Resources {
        #[command(subcommand)]
        action: ResourceAction,
    },
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand, Debug)]
enum CacheAction {
    /// List every cached combination
    List,
    /// Remove every cached combination
    Clear,
}

#[derive(Subcommand, Debug)]
enum ResourceAction {
    /// List the available resources
    List,
    /// Append a resource to the catalog
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        emoji: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Restore the default resources
    Reset,
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    /// Print the current settings with credentials masked
    Show,
    /// Choose the generative provider (anthropic or openai)
    SetProvider { provider: Provider },
    /// Restore the default settings
    Reset,
}

fn main() -> Result<()> {
    init_logging();
    color_eyre::install()?;

    let config_result = config::load_config();
    if let Some(warning) = &config_result.warning {
        eprintln!("warning: {}", warning);
    }

    let args = Args::parse();
    let store = open_store(args.data_dir, &config_result.config)?;
    log::debug!("Using data directory {:?}", store.root());

    match args.command {
        Command::Combine {
            first,
            second,
            chain_of_thought,
        } => combine(
            &store,
            &first,
            &second,
            chain_of_thought || config_result.config.merge.chain_of_thought,
        ),
        Command::Remember {
            first,
            second,
            title,
            emoji,
            description,
        } => remember(&store, &first, &second, Skill::new(title, emoji, description)),
        Command::Cache { action } => cache_command(&store, action),
        Command::Resources { action } => resources_command(&store, action),
        Command::Settings { action } => settings_command(&store, action),
    }
}

/// Logs to stderr, filtered by RUST_LOG (warnings and errors by default)
fn init_logging() {
    use std::io::Write;
    use std::time::SystemTime;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}

/// The command line wins over the config file, which wins over the platform default
fn open_store(data_dir: Option<PathBuf>, config: &Config) -> Result<FileStore, OpencraftError> {
    data_dir
        .or_else(|| config.storage.data_dir.clone())
        .map(FileStore::new)
        .or_else(FileStore::default_location)
        .ok_or(OpencraftError::NoDataDir)
}

/// Catalog entries supply emoji and description; unknown titles stand alone
fn resolve_skill(catalog: &ResourceCatalog<&FileStore>, title: &str) -> Skill {
    catalog
        .find(title)
        .cloned()
        .unwrap_or_else(|| Skill::titled(title))
}

fn combine(store: &FileStore, first: &str, second: &str, chain_of_thought: bool) -> Result<()> {
    let catalog = ResourceCatalog::open(store)?;
    let first = resolve_skill(&catalog, first);
    let second = resolve_skill(&catalog, second);

    let cache = CombinationCache::open(store)?;
    match cache.get(&first, &second) {
        Some(result) => println!("{}", result),
        None => {
            let settings = SettingsStore::open(store)?;
            eprintln!(
                "No cached combination for '{}'. Send this prompt to {} and store the answer with `opencraft remember`:",
                canonical_key(&first.title, &second.title),
                settings.settings().provider
            );
            println!(
                "{}",
                settings.render_merge_prompt(&first, &second, chain_of_thought)
            );
        }
    }
    Ok(())
}

fn remember(store: &FileStore, first: &str, second: &str, result: Skill) -> Result<()> {
    let mut cache = CombinationCache::open(store)?;
    let key = canonical_key(first, second);
    cache.put(&Skill::titled(first), &Skill::titled(second), result)?;
    println!("Cached '{}'", key);
    Ok(())
}

fn cache_command(store: &FileStore, action: CacheAction) -> Result<()> {
    let mut cache = CombinationCache::open(store)?;
    match action {
        CacheAction::List => {
            if cache.is_empty() {
                println!("No cached combinations");
            }
            for (key, result) in cache.entries() {
                println!("{} => {}", key, result);
            }
        }
        CacheAction::Clear => {
            let count = cache.len();
            cache.reset()?;
            println!("Cleared {} cached combinations", count);
        }
    }
    Ok(())
}

fn resources_command(store: &FileStore, action: ResourceAction) -> Result<()> {
    let mut catalog = ResourceCatalog::open(store)?;
    match action {
        ResourceAction::List => {
            for resource in catalog.all() {
                println!("{}", resource);
            }
        }
        ResourceAction::Add {
            title,
            emoji,
            description,
        } => {
            catalog.add(Skill::new(title, emoji, description))?;
            println!("{} resources", catalog.all().len());
        }
        ResourceAction::Reset => {
            catalog.reset_to_defaults()?;
            println!("Restored {} default resources", catalog.all().len());
        }
    }
    Ok(())
}

fn settings_command(store: &FileStore, action: SettingsAction) -> Result<()> {
    let mut settings = SettingsStore::open(store)?;
    match action {
        SettingsAction::Show => print_settings(settings.settings()),
        SettingsAction::SetProvider { provider } => {
            settings.update(|s| Settings { provider, ..s })?;
            println!("Provider set to {}", provider);
        }
        SettingsAction::Reset => {
            settings.reset_to_defaults()?;
            println!("Settings restored to defaults");
        }
    }
    Ok(())
}

fn print_settings(settings: &Settings) {
    println!("provider: {}", settings.provider);
    println!("model: {}", settings.active_model());
    println!("endpoint: {}", settings.active_endpoint_url());
    println!("anthropic_key: {}", mask_key(&settings.anthropic_key));
    println!("openai_key: {}", mask_key(&settings.openai_key));
}
