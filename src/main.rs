//! mealfinder - Entry Point

use clap::{Parser, Subcommand};
use mealfinder::client::{MealDbClient, RecipeApi};
use mealfinder::model::{FilterCriterion, MealId};
use mealfinder::search::Aggregator;
use mealfinder::state::{FavoritesManager, Session, SessionState};
use mealfinder::store::JsonFavoritesFile;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Recipe search and favorites from the terminal
#[derive(Parser, Debug)]
#[command(name = "mealfinder")]
#[command(version)]
#[command(about = "Search recipes by ingredient, category, or cuisine, and keep a favorites list")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the recipe API base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Override the HTTP request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search recipes; give ingredients, a category, or a cuisine
    Search {
        /// Comma-separated ingredient list, e.g. "chicken, tomato"
        #[arg(short, long, default_value = "")]
        ingredients: String,

        /// Recipe category, e.g. "Seafood"
        #[arg(short, long)]
        category: Option<String>,

        /// Cuisine (area), e.g. "Italian"
        #[arg(short, long)]
        area: Option<String>,
    },

    /// Show the full recipe for a meal id
    Detail {
        /// Meal id as shown in search results
        id: String,
    },

    /// List the available recipe categories
    Categories,

    /// List the available cuisines
    Areas,

    /// Show or change the favorites list
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

/// Favorites subcommands.
#[derive(Subcommand, Debug)]
pub enum FavoritesAction {
    /// Print the favorites list
    List,

    /// Add or remove a meal from the favorites by id
    Toggle {
        /// Meal id as shown in search results
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Full precedence chain: Defaults -> Config File -> Env Vars -> CLI Args
    let config = {
        let config_file = mealfinder::config::load_config_with_precedence(args.config.clone())?;
        let merged = mealfinder::config::merge_config(config_file);
        let with_env = mealfinder::config::apply_env_overrides(merged);
        mealfinder::config::apply_cli_overrides(with_env, args.api_url.clone(), args.timeout)
    };

    mealfinder::logging::init(&config.log_file_path)?;
    info!(config = ?config, "configuration loaded and resolved");

    let client = MealDbClient::new(
        config.api_base_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?;
    let mut favorites = FavoritesManager::load(JsonFavoritesFile::new(&config.favorites_path));

    match args.command {
        Command::Search {
            ingredients,
            category,
            area,
        } => {
            let criterion = FilterCriterion::from_inputs(
                &ingredients,
                category.as_deref(),
                area.as_deref(),
            );
            let aggregator = Aggregator::new(client);
            let mut session = Session::new();
            session.run_search(&aggregator, &criterion).await;

            match session.state() {
                SessionState::Success(results) => {
                    for meal in results {
                        let marker = if favorites.is_favorite(&meal.id) {
                            " *"
                        } else {
                            ""
                        };
                        println!("{:>8}  {}{marker}", meal.id, meal.name);
                    }
                    println!("{} recipe(s)", results.len());
                }
                SessionState::Error(message) => return Err(message.clone().into()),
                // run_search always lands on Success or Error.
                SessionState::Idle | SessionState::Loading => {}
            }
        }

        Command::Detail { id } => {
            let id = MealId::new(id)?;
            let mut session = Session::new();
            if let Err(e) = session.select_detail(&client, &id).await {
                info!(error = %e, "detail fetch failed");
                return Err(e.user_message().into());
            }
            // select_detail only returns Ok after storing the subject.
            if let Some(detail) = session.detail() {
                println!("{}  ({})", detail.name, detail.id);
                println!();
                println!("{}", detail.instructions);
                if let Some(video) = &detail.video_url {
                    println!();
                    println!("Video: {video}");
                }
            }
        }

        Command::Categories => {
            for category in client.list_categories().await {
                println!("{category}");
            }
        }

        Command::Areas => {
            for area in client.list_areas().await {
                println!("{area}");
            }
        }

        Command::Favorites { action } => match action {
            FavoritesAction::List => {
                for meal in favorites.meals() {
                    println!("{:>8}  {}", meal.id, meal.name);
                }
                println!("{} favorite(s)", favorites.len());
            }
            FavoritesAction::Toggle { id } => {
                let id = MealId::new(id)?;
                let Some(detail) = client.meal_detail(&id).await? else {
                    return Err(format!("No recipe found with id {id}").into());
                };
                let summary = detail.to_summary();
                let name = summary.name.clone();
                if favorites.toggle(summary)? {
                    println!("Added {name} to favorites.");
                } else {
                    println!("Removed {name} from favorites.");
                }
            }
        },
    }

    Ok(())
}
