use anyhow::{Context, Result, anyhow};
use catalog::{Catalog, Dish};
use clap::{Parser, Subcommand};
use colored::Colorize;
use selection::{RandomSelector, ScaledIngredient, Servings, Session, scale, scale_for};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Was soll ich essen? - picks a random dish for you
#[derive(Parser)]
#[command(name = "was-essen")]
#[command(about = "Pick a random dish and show its ingredients or preparation", long_about = None)]
struct Cli {
    /// JSON catalog file to use instead of the built-in dishes
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Seed for reproducible picks
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a random dish
    Pick {
        /// Also show ingredients for this many servings (1, 2 or 4)
        #[arg(long)]
        servings: Option<u32>,

        /// Also show the preparation steps
        #[arg(long)]
        preparation: bool,

        /// Print the picked dish as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all dishes in the catalog
    List,

    /// Show the ingredients of a dish
    Ingredients {
        /// Dish name (case-insensitive)
        #[arg(long)]
        dish: String,

        /// Number of servings (1, 2 or 4); all three when omitted
        #[arg(long)]
        servings: Option<u32>,
    },

    /// Show the preparation steps of a dish
    Preparation {
        /// Dish name (case-insensitive)
        #[arg(long)]
        dish: String,
    },

    /// Pick dishes interactively
    Interactive,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = Arc::new(load_catalog(cli.catalog.as_deref())?);
    let selector = match cli.seed {
        Some(seed) => RandomSelector::seeded(seed),
        None => RandomSelector::from_os_rng(),
    };
    let mut session = Session::new(catalog.clone(), selector);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Pick {
            servings,
            preparation,
            json,
        } => handle_pick(&mut session, servings, preparation, json)?,
        Commands::List => print_catalog(&catalog),
        Commands::Ingredients { dish, servings } => handle_ingredients(&catalog, &dish, servings)?,
        Commands::Preparation { dish } => handle_preparation(&catalog, &dish)?,
        Commands::Interactive => handle_interactive(&mut session)?,
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let catalog = Catalog::load_from_file(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
            info!("Loaded {} dishes from {}", catalog.len(), path.display());
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}

fn find_dish<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a Dish> {
    catalog
        .find_by_name(name)
        .ok_or_else(|| anyhow!("Dish '{}' not found (see `was-essen list`)", name))
}

/// Handle the 'pick' command
fn handle_pick(
    session: &mut Session,
    servings: Option<u32>,
    preparation: bool,
    json: bool,
) -> Result<()> {
    let dish = session.pick().context("Failed to pick a dish")?.clone();

    if json {
        println!("{}", serde_json::to_string_pretty(&dish)?);
        return Ok(());
    }

    print_title();
    println!("{}", dish.name().bold());

    if let Some(servings) = servings {
        let scaled = session.ingredients(servings)?;
        print_section(Servings::try_from(servings)?, &scaled);
    }
    if preparation {
        print_preparation(session.preparation()?);
    }
    Ok(())
}

/// Handle the 'ingredients' command
fn handle_ingredients(catalog: &Catalog, name: &str, servings: Option<u32>) -> Result<()> {
    let dish = find_dish(catalog, name)?;

    println!("{}", format!("📋 Zutaten: {}", dish.name()).bold().blue());
    match servings {
        Some(servings) => {
            let scaled = scale(dish.ingredients(), servings)?;
            print_section(Servings::try_from(servings)?, &scaled);
        }
        None => {
            for servings in Servings::ALL {
                print_section(servings, &scale_for(dish.ingredients(), servings));
            }
        }
    }
    Ok(())
}

/// Handle the 'preparation' command
fn handle_preparation(catalog: &Catalog, name: &str) -> Result<()> {
    let dish = find_dish(catalog, name)?;

    println!("{}", dish.name().bold());
    print_preparation(dish.preparation());
    Ok(())
}

/// Handle the 'interactive' command
fn handle_interactive(session: &mut Session) -> Result<()> {
    print_title();
    if session.catalog().is_empty() {
        println!("{}", "Keine Gerichte vorhanden, 'pick' ist deaktiviert.".yellow());
    }
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read from stdin")?;

        match run_line(session, &line) {
            Ok(Step::Quit) => break,
            Ok(Step::Continue) => {}
            Err(err) => println!("{}", err.to_string().red()),
        }
    }
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

/// Run one interactive command against the session
fn run_line(session: &mut Session, line: &str) -> selection::Result<Step> {
    let mut words = line.split_whitespace();

    match words.next() {
        None => {}
        Some("pick" | "p") => {
            let dish = session.pick()?;
            println!("{}", dish.name().bold());
        }
        Some("ingredients" | "i") => match words.next() {
            Some(arg) => match arg.parse::<u32>() {
                Ok(servings) => {
                    let scaled = session.ingredients(servings)?;
                    print_section(Servings::try_from(servings)?, &scaled);
                }
                Err(_) => println!("{}", format!("'{arg}' is not a number").red()),
            },
            None => {
                for (servings, scaled) in session.ingredient_table()? {
                    print_section(servings, &scaled);
                }
            }
        },
        Some("preparation" | "prep") => print_preparation(session.preparation()?),
        Some("list" | "l") => print_catalog(session.catalog()),
        Some("help" | "h" | "?") => print_help(),
        Some("quit" | "exit" | "q") => return Ok(Step::Quit),
        Some(other) => println!("Unknown command '{other}', type 'help'"),
    }
    Ok(Step::Continue)
}

fn servings_label(servings: Servings) -> &'static str {
    match servings {
        Servings::One => "Für 1 Person",
        Servings::Two => "Für 2 Personen",
        Servings::Four => "Für 4 Personen",
    }
}

fn print_title() {
    println!("{}", "Was soll ich essen?".bold().blue());
}

fn print_help() {
    println!("Commands:");
    println!("  {}              pick a random dish", "pick".green());
    println!("  {} [1|2|4]   ingredients of the current dish", "ingredients".green());
    println!("  {}       preparation of the current dish", "preparation".green());
    println!("  {}              list all dishes", "list".green());
    println!("  {}              leave", "quit".green());
}

fn print_catalog(catalog: &Catalog) {
    for (position, dish) in catalog.all().iter().enumerate() {
        println!(
            "{}. {} ({} Zutaten)",
            (position + 1).to_string().green(),
            dish.name(),
            dish.ingredients().len()
        );
    }
}

fn print_section(servings: Servings, scaled: &[ScaledIngredient]) {
    println!("{}", servings_label(servings).bold().green());
    for ingredient in scaled {
        println!("  {ingredient}");
    }
}

fn print_preparation(text: &str) {
    println!("{}", "👨‍🍳 Zubereitung".bold().blue());
    println!("{text}");
}
