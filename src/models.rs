use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Grocery-store aisle a purchasable ingredient belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AisleCategory {
    Produce,
    Dairy,
    Pantry,
    Protein,
    Spices,
    Frozen,
    Bakery,
    Other,
}

impl AisleCategory {
    /// Canonical walk-the-store ordering used when rendering a grocery list.
    pub const SHOPPING_ORDER: [AisleCategory; 8] = [
        AisleCategory::Produce,
        AisleCategory::Protein,
        AisleCategory::Dairy,
        AisleCategory::Pantry,
        AisleCategory::Spices,
        AisleCategory::Bakery,
        AisleCategory::Frozen,
        AisleCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AisleCategory::Produce => "Produce",
            AisleCategory::Dairy => "Dairy",
            AisleCategory::Pantry => "Pantry",
            AisleCategory::Protein => "Protein",
            AisleCategory::Spices => "Spices",
            AisleCategory::Frozen => "Frozen",
            AisleCategory::Bakery => "Bakery",
            AisleCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecipeTag {
    Quick,
    Vegetarian,
    Vegan,
    GlutenFree,
    Comfort,
    Healthy,
    Spicy,
}

impl RecipeTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeTag::Quick => "quick",
            RecipeTag::Vegetarian => "vegetarian",
            RecipeTag::Vegan => "vegan",
            RecipeTag::GlutenFree => "gluten-free",
            RecipeTag::Comfort => "comfort",
            RecipeTag::Healthy => "healthy",
            RecipeTag::Spicy => "spicy",
        }
    }
}

/// How trustworthy an imported recipe is. URL imports come back `Complete`,
/// free-text imports always need a human pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Confidence {
    Complete,
    NeedsReview,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Complete => "complete",
            Confidence::NeedsReview => "needs-review",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub aisle: AisleCategory,
    /// Transient "already in the pantry" checkbox state. Carried on grocery
    /// list snapshots, never meaningful on a stored recipe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub have: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub servings: u32,
    pub time_minutes: u32,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    pub tags: Vec<RecipeTag>,
    pub confidence: Confidence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Epoch milliseconds.
    pub created_at: i64,
}

/// One completed cook-through of a recipe. The title is denormalized at cook
/// time so history stays readable even if the recipe is later replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookedSession {
    pub id: String,
    pub recipe_id: String,
    pub recipe_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_uri: Option<String>,
    /// Epoch milliseconds.
    pub cooked_at: i64,
}

impl CookedSession {
    /// Record a finished cook of `recipe` at `now`, with an optional photo.
    pub fn record(recipe: &Recipe, photo_uri: Option<String>, now: OffsetDateTime) -> Self {
        CookedSession {
            id: Uuid::new_v4().to_string(),
            recipe_id: recipe.id.clone(),
            recipe_title: recipe.title.clone(),
            photo_uri,
            cooked_at: epoch_millis(now),
        }
    }
}

/// Point-in-time snapshot of a recipe's ingredients for shopping. Later edits
/// to the recipe do not reach into an already-created list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryList {
    pub recipe_id: String,
    pub recipe_title: String,
    pub items: Vec<Ingredient>,
    /// Epoch milliseconds.
    pub created_at: i64,
}

impl GroceryList {
    pub fn snapshot_of(recipe: &Recipe, now: OffsetDateTime) -> Self {
        GroceryList {
            recipe_id: recipe.id.clone(),
            recipe_title: recipe.title.clone(),
            items: recipe.ingredients.clone(),
            created_at: epoch_millis(now),
        }
    }

    /// Plain-text export of the still-needed items, one bullet per line.
    pub fn share_text(&self) -> String {
        self.items
            .iter()
            .filter(|i| !i.have.unwrap_or(false))
            .map(|i| format!("\u{2022} {} \u{2014} {} {}", i.name, i.amount, i.unit))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Group items by aisle in shopping order, dropping empty aisles. Item order
/// within an aisle follows the input list.
pub fn group_by_aisle(items: &[Ingredient]) -> Vec<(AisleCategory, Vec<Ingredient>)> {
    AisleCategory::SHOPPING_ORDER
        .iter()
        .map(|&aisle| {
            (
                aisle,
                items
                    .iter()
                    .filter(|i| i.aisle == aisle)
                    .cloned()
                    .collect::<Vec<_>>(),
            )
        })
        .filter(|(_, group)| !group.is_empty())
        .collect()
}

/// Root aggregate, persisted wholesale as a single record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub recipes: Vec<Recipe>,
    pub grocery_lists: Vec<GroceryList>,
    pub cooked_sessions: Vec<CookedSession>,
    pub monthly_imports: u32,
    /// Calendar month the import counter applies to, e.g. "2026-02".
    pub month_key: String,
    pub is_pro: bool,
}

impl AppState {
    /// Fresh state for a first launch: empty collections, zero imports,
    /// current month, free plan.
    pub fn empty(now: OffsetDateTime) -> Self {
        AppState {
            recipes: Vec::new(),
            grocery_lists: Vec::new(),
            cooked_sessions: Vec::new(),
            monthly_imports: 0,
            month_key: month_key(now),
            is_pro: false,
        }
    }
}

/// Outcome of the monthly import quota check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportQuota {
    pub allowed: bool,
    pub count: u32,
    /// Free-plan monthly cap. Reported as the constant even for pro accounts;
    /// pro unboundedness is expressed through `allowed`.
    pub limit: u32,
}

/// Static reference-catalog entry used for "similar recipes" suggestions.
#[derive(Debug, Clone, PartialEq)]
pub struct AtkReference {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub ingredients: &'static [&'static str],
    pub url: &'static str,
    pub tags: &'static [&'static str],
    pub time_minutes: u32,
}

/// Milliseconds since the Unix epoch for the given instant.
pub fn epoch_millis(now: OffsetDateTime) -> i64 {
    (now.unix_timestamp_nanos() / 1_000_000) as i64
}

/// "YYYY-MM" key identifying the calendar month of the given instant.
pub fn month_key(now: OffsetDateTime) -> String {
    format!("{:04}-{:02}", now.year(), u8::from(now.month()))
}
