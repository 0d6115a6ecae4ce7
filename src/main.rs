use clap::{Parser, Subcommand};
use std::path::PathBuf;
use time::OffsetDateTime;

use cookturn::billing::{BillingProvider, LocalBilling};
use cookturn::core::StateStore;
use cookturn::models::{CookedSession, GroceryList, Recipe, epoch_millis, group_by_aisle};
use cookturn::{importer, matching, scaling};

#[derive(Parser)]
#[command(name = "cookturn")]
#[command(about = "Import recipes from video links or text and cook from them")]
struct Cli {
    /// Directory holding the persisted state file
    #[arg(long, value_name = "DIR", default_value = ".")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import a recipe from a video link
    ImportUrl {
        url: String,
    },
    /// Import a recipe from free text
    ImportText {
        text: String,
    },
    /// Import one of the built-in demo recipes
    Demo,
    /// List imported recipes, most recent first
    List,
    /// Print a recipe with ingredients rescaled to a serving count
    Scale {
        /// Recipe position from `list` (0 = most recent)
        index: usize,
        /// Target serving count
        servings: u32,
    },
    /// Create a grocery list snapshot for a recipe
    Grocery {
        /// Recipe position from `list` (0 = most recent)
        index: usize,
    },
    /// Record that a recipe was cooked
    Cook {
        /// Recipe position from `list` (0 = most recent)
        index: usize,
        /// Optional photo reference to attach
        #[arg(long, value_name = "URI")]
        photo: Option<String>,
    },
    /// Show cook history (free plan shows the 3 most recent)
    History,
    /// Show plan and monthly import quota
    Status,
    /// Purchase the pro plan
    Upgrade,
    /// Restore a previous purchase
    Restore,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let store = StateStore::open(&args.data_dir);
    let billing = LocalBilling::new(store.clone());

    match args.command {
        Command::ImportUrl { url } => {
            if url.trim().is_empty() {
                anyhow::bail!("Nothing to import: the URL is empty");
            }
            let recipe = guarded_import(&store, || importer::from_url(&url))?;
            if let Some(recipe) = recipe {
                print_recipe(&recipe);
                print_suggestions(&recipe);
            }
        }
        Command::ImportText { text } => {
            if text.trim().is_empty() {
                anyhow::bail!("Nothing to import: the text is empty");
            }
            let recipe = guarded_import(&store, || importer::from_text(&text))?;
            if let Some(recipe) = recipe {
                print_recipe(&recipe);
                print_suggestions(&recipe);
            }
        }
        Command::Demo => {
            // Cheap pseudo-random pick; no need for a real RNG here. The
            // link goes through the regular URL import path so the stored
            // copy gets its own id and timestamp.
            let pick =
                epoch_millis(OffsetDateTime::now_utc()) as usize % importer::DEMO_LINKS.len();
            let url = importer::DEMO_LINKS[pick];
            let recipe = guarded_import(&store, || importer::from_url(url))?;
            if let Some(recipe) = recipe {
                print_recipe(&recipe);
                print_suggestions(&recipe);
            }
        }
        Command::List => {
            let state = store.load();
            if state.recipes.is_empty() {
                println!("No recipes imported yet.");
            }
            for (i, recipe) in state.recipes.iter().enumerate() {
                println!(
                    "{:>3}  {} ({} servings, {} min)",
                    i, recipe.title, recipe.servings, recipe.time_minutes
                );
            }
        }
        Command::Scale { index, servings } => {
            anyhow::ensure!(servings > 0, "Serving count must be positive");
            let recipe = recipe_at(&store, index)?;
            println!(
                "{} — rescaled from {} to {} servings:",
                recipe.title, recipe.servings, servings
            );
            for item in scaling::scale(&recipe.ingredients, recipe.servings, servings) {
                println!("  {} {} {}", item.amount, item.unit, item.name);
            }
        }
        Command::Grocery { index } => {
            let recipe = recipe_at(&store, index)?;
            let list = GroceryList::snapshot_of(&recipe, OffsetDateTime::now_utc());
            store.append_grocery_list(list.clone())?;
            println!("=== Grocery list: {} ===", list.recipe_title);
            for (aisle, items) in group_by_aisle(&list.items) {
                println!("{}:", aisle.as_str());
                for item in items {
                    println!("  {} — {} {}", item.name, item.amount, item.unit);
                }
            }
        }
        Command::Cook { index, photo } => {
            let recipe = recipe_at(&store, index)?;
            println!("=== Cooking: {} ===", recipe.title);
            for (i, step) in recipe.steps.iter().enumerate() {
                println!("Step {}: {}", i + 1, step);
            }
            let session = CookedSession::record(&recipe, photo, OffsetDateTime::now_utc());
            store.append_cooked_session(session)?;
            println!("\nCook recorded.");
        }
        Command::History => {
            let is_pro = billing.entitlements()?.is_pro;
            let sessions = store.history(is_pro);
            if sessions.is_empty() {
                println!("No cooks recorded yet.");
            }
            for session in &sessions {
                println!("{}  ({})", session.recipe_title, session.cooked_at);
            }
            if !is_pro {
                println!("\nFree plan shows the 3 most recent cooks. Upgrade to see all.");
            }
        }
        Command::Status => {
            let quota = store.can_import();
            let plan = if billing.entitlements()?.is_pro { "pro" } else { "free" };
            println!("Plan: {}", plan);
            println!("Imports this month: {} / {}", quota.count, quota.limit);
        }
        Command::Upgrade => {
            let outcome = billing.present_paywall()?;
            if outcome.purchased {
                println!("Welcome to pro. Imports are now unlimited.");
            }
        }
        Command::Restore => {
            let entitlements = billing.restore_purchases()?;
            if entitlements.is_pro {
                println!("Pro plan restored.");
            } else {
                println!("No previous purchase found.");
            }
        }
    }

    Ok(())
}

/// Run the import quota gate, then synthesize and persist the recipe.
/// A denied import is an upsell prompt, not an error.
fn guarded_import(
    store: &StateStore,
    synthesize: impl FnOnce() -> Recipe,
) -> anyhow::Result<Option<Recipe>> {
    let quota = store.can_import();
    if !quota.allowed {
        println!(
            "Monthly import limit reached ({} / {}). Upgrade to pro for unlimited imports.",
            quota.count, quota.limit
        );
        return Ok(None);
    }
    let recipe = synthesize();
    store.append_recipe(recipe.clone())?;
    Ok(Some(recipe))
}

fn recipe_at(store: &StateStore, index: usize) -> anyhow::Result<Recipe> {
    let state = store.load();
    state
        .recipes
        .get(index)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("No recipe at position {} (run `list`)", index))
}

fn print_recipe(recipe: &Recipe) {
    println!("=== {} ===", recipe.title);
    println!(
        "{} servings, {} min, confidence: {}",
        recipe.servings,
        recipe.time_minutes,
        recipe.confidence.as_str()
    );
    if let Some(url) = &recipe.source_url {
        println!("Source: {}", url);
    }
    println!("\nIngredients:");
    for item in &recipe.ingredients {
        println!("  {} {} {}", item.amount, item.unit, item.name);
    }
    println!("\nSteps:");
    for (i, step) in recipe.steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
}

fn print_suggestions(recipe: &Recipe) {
    let suggestions = matching::find_matches(recipe, matching::DEFAULT_MAX_RESULTS);
    if suggestions.is_empty() {
        return;
    }
    println!("\nSimilar tested recipes:");
    for reference in suggestions {
        println!("  {} — {}", reference.title, reference.url);
    }
}
