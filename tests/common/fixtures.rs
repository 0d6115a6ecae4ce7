use cookturn::core::StateStore;
use cookturn::models::{
    AisleCategory, Confidence, CookedSession, Ingredient, Recipe, RecipeTag,
};

/// Creates a StateStore backed by a fresh temporary directory.
/// Returns both; the directory must be kept alive for the store to work.
pub fn create_test_store() -> (StateStore, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let store = StateStore::open(dir.path());
    (store, dir)
}

/// Creates an ingredient with test defaults.
pub fn make_ingredient(name: &str, amount: f64, unit: &str, aisle: AisleCategory) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        amount,
        unit: unit.to_string(),
        aisle,
        have: None,
    }
}

/// Creates a minimal recipe with the given title, ingredients, tags, and
/// cook time. Servings default to 4.
pub fn make_recipe(
    title: &str,
    ingredients: Vec<Ingredient>,
    tags: Vec<RecipeTag>,
    time_minutes: u32,
) -> Recipe {
    Recipe {
        id: format!("test-{}", title.to_lowercase().replace(' ', "-")),
        title: title.to_string(),
        servings: 4,
        time_minutes,
        ingredients,
        steps: vec!["Cook it.".to_string()],
        tags,
        confidence: Confidence::Complete,
        source_url: None,
        created_at: 0,
    }
}

/// Creates a cooked session with a synthetic id and title derived from `n`.
pub fn make_session(n: u32) -> CookedSession {
    CookedSession {
        id: format!("session-{}", n),
        recipe_id: format!("recipe-{}", n),
        recipe_title: format!("Recipe {}", n),
        photo_uri: None,
        cooked_at: 1_000 + i64::from(n),
    }
}
