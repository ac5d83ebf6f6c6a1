use clap::{Parser, Subcommand};
use mindcare_core::*;
use std::collections::BTreeMap;
use std::path::PathBuf;

mod shell;

#[derive(Parser)]
#[command(name = "mindcare")]
#[command(about = "Mood tracking and self-care companion", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive tracking session (default)
    Shell,

    /// Get a reply to a single message
    Chat {
        /// The message to respond to
        #[arg(required = true)]
        message: Vec<String>,
    },

    /// Browse the resource library
    Resources {
        /// Only show this category
        #[arg(long)]
        category: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    mindcare_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let catalog = get_default_catalog().with_custom(&config.resources.custom);
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    match cli.command {
        Some(Commands::Chat { message }) => cmd_chat(&message.join(" ")),
        Some(Commands::Resources { category, json }) => {
            cmd_resources(&catalog, category.as_deref(), json)
        }
        Some(Commands::Shell) | None => shell::run(&config, &catalog),
    }
}

fn cmd_chat(message: &str) -> Result<()> {
    let (category, reply) = respond(message);
    tracing::debug!("One-shot chat classified as {:?}", category);
    println!("{}", reply);
    Ok(())
}

fn cmd_resources(catalog: &ResourceCatalog, category: Option<&str>, json: bool) -> Result<()> {
    let names: Vec<&str> = match category {
        Some(name) => {
            if catalog.techniques(name).is_empty() {
                let known: Vec<&str> = catalog.categories().into_iter().collect();
                println!(
                    "No resources for category '{}'. Known categories: {}",
                    name,
                    known.join(", ")
                );
                return Ok(());
            }
            vec![name]
        }
        None => catalog.categories().into_iter().collect(),
    };

    if json {
        let listing: BTreeMap<&str, &[Technique]> = names
            .iter()
            .map(|name| (*name, catalog.techniques(name)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for name in names {
        display_techniques(name, catalog.techniques(name));
    }

    Ok(())
}

pub(crate) fn display_techniques(title: &str, techniques: &[Technique]) {
    println!("\n{}", title);
    for technique in techniques {
        if technique.description.is_empty() {
            println!("  • {}", technique.name);
        } else {
            println!("  • {}: {}", technique.name, technique.description);
        }
    }
}
