//! Fixed template and reference tables.
//!
//! Import is simulated: a URL or text is pattern-matched onto one of three
//! canned template recipes. The ATK table is the static reference catalog the
//! similarity matcher scores against. Both are loaded once per process and
//! never mutated.

use std::sync::LazyLock;

use crate::models::{
    AisleCategory, AtkReference, Confidence, Ingredient, Recipe, RecipeTag,
};

fn ing(name: &str, amount: f64, unit: &str, aisle: AisleCategory) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        amount,
        unit: unit.to_string(),
        aisle,
        have: None,
    }
}

static TEMPLATES: LazyLock<[Recipe; 3]> = LazyLock::new(|| {
    use AisleCategory::*;
    [
        Recipe {
            id: "demo-chicken-pasta".to_string(),
            title: "Creamy Lemon Chicken Pasta".to_string(),
            servings: 4,
            time_minutes: 25,
            confidence: Confidence::Complete,
            tags: vec![RecipeTag::Quick, RecipeTag::Comfort],
            source_url: Some("https://example.com/chicken-pasta".to_string()),
            created_at: 0,
            ingredients: vec![
                ing("Penne pasta", 400.0, "g", Pantry),
                ing("Chicken breast", 500.0, "g", Protein),
                ing("Heavy cream", 240.0, "ml", Dairy),
                ing("Parmesan cheese", 80.0, "g", Dairy),
                ing("Lemon", 2.0, "whole", Produce),
                ing("Garlic cloves", 4.0, "whole", Produce),
                ing("Olive oil", 2.0, "tbsp", Pantry),
                ing("Fresh basil", 1.0, "bunch", Produce),
                ing("Salt", 1.0, "tsp", Spices),
                ing("Black pepper", 0.5, "tsp", Spices),
            ],
            steps: vec![
                "Cook penne in salted boiling water until al dente. Reserve 1 cup pasta water, then drain.".to_string(),
                "Season chicken breast with salt and pepper. Heat olive oil in a large skillet over medium-high heat. Cook chicken 6-7 minutes per side until golden. Remove and slice.".to_string(),
                "In the same skillet, sauté minced garlic for 30 seconds until fragrant.".to_string(),
                "Add heavy cream and lemon juice. Simmer for 2-3 minutes, stirring occasionally.".to_string(),
                "Add Parmesan and stir until melted and smooth. Add pasta water if sauce is too thick.".to_string(),
                "Toss in pasta and sliced chicken. Garnish with fresh basil and lemon zest. Serve immediately.".to_string(),
            ],
        },
        Recipe {
            id: "demo-veggie-stir-fry".to_string(),
            title: "Spicy Sesame Vegetable Stir-Fry".to_string(),
            servings: 2,
            time_minutes: 15,
            confidence: Confidence::Complete,
            tags: vec![
                RecipeTag::Quick,
                RecipeTag::Vegetarian,
                RecipeTag::Healthy,
                RecipeTag::Spicy,
            ],
            source_url: Some("https://example.com/veggie-stir-fry".to_string()),
            created_at: 0,
            ingredients: vec![
                ing("Jasmine rice", 200.0, "g", Pantry),
                ing("Broccoli florets", 200.0, "g", Produce),
                ing("Red bell pepper", 1.0, "whole", Produce),
                ing("Snap peas", 150.0, "g", Produce),
                ing("Carrots", 2.0, "whole", Produce),
                ing("Soy sauce", 3.0, "tbsp", Pantry),
                ing("Sesame oil", 2.0, "tbsp", Pantry),
                ing("Sriracha", 1.0, "tbsp", Pantry),
                ing("Sesame seeds", 1.0, "tbsp", Spices),
                ing("Green onions", 3.0, "whole", Produce),
            ],
            steps: vec![
                "Cook jasmine rice according to package directions.".to_string(),
                "Slice bell pepper, julienne carrots, and trim snap peas.".to_string(),
                "Heat sesame oil in a wok or large skillet over high heat.".to_string(),
                "Add broccoli and carrots first — stir-fry 2 minutes.".to_string(),
                "Add bell pepper and snap peas. Stir-fry another 2 minutes.".to_string(),
                "Pour in soy sauce and sriracha. Toss to coat evenly.".to_string(),
                "Serve over rice. Top with sesame seeds and sliced green onions.".to_string(),
            ],
        },
        Recipe {
            id: "demo-banana-pancakes".to_string(),
            title: "Fluffy Banana Oat Pancakes".to_string(),
            servings: 3,
            time_minutes: 20,
            confidence: Confidence::Complete,
            tags: vec![RecipeTag::Quick, RecipeTag::Vegetarian, RecipeTag::Healthy],
            source_url: Some("https://example.com/banana-pancakes".to_string()),
            created_at: 0,
            ingredients: vec![
                ing("Ripe bananas", 2.0, "whole", Produce),
                ing("Rolled oats", 150.0, "g", Pantry),
                ing("Eggs", 2.0, "whole", Dairy),
                ing("Greek yogurt", 60.0, "g", Dairy),
                ing("Baking powder", 1.0, "tsp", Pantry),
                ing("Vanilla extract", 1.0, "tsp", Pantry),
                ing("Cinnamon", 0.5, "tsp", Spices),
                ing("Maple syrup", 2.0, "tbsp", Pantry),
                ing("Butter", 1.0, "tbsp", Dairy),
                ing("Fresh berries", 100.0, "g", Produce),
            ],
            steps: vec![
                "Blend oats in a blender until they form a flour-like consistency.".to_string(),
                "Add bananas, eggs, yogurt, baking powder, vanilla, and cinnamon. Blend until smooth.".to_string(),
                "Heat a non-stick pan over medium heat. Add a small pat of butter.".to_string(),
                "Pour ¼ cup batter per pancake. Cook until bubbles form on the surface, about 2 minutes.".to_string(),
                "Flip and cook another 1-2 minutes until golden brown.".to_string(),
                "Stack pancakes and top with fresh berries, a drizzle of maple syrup, and extra yogurt if desired.".to_string(),
            ],
        },
    ]
});

/// All template recipes, in catalog order.
pub fn templates() -> &'static [Recipe] {
    &*TEMPLATES
}

pub(crate) fn chicken_pasta() -> &'static Recipe {
    &TEMPLATES[0]
}

pub(crate) fn veggie_stir_fry() -> &'static Recipe {
    &TEMPLATES[1]
}

pub(crate) fn banana_pancakes() -> &'static Recipe {
    &TEMPLATES[2]
}

/// America's Test Kitchen reference catalog, in fixed order. Ties in matcher
/// scores resolve to this order.
pub static ATK_REFERENCES: [AtkReference; 10] = [
    AtkReference {
        id: "atk-chicken-parmesan",
        title: "Chicken Parmesan",
        description: "Crispy breaded chicken cutlets topped with marinara sauce and melted mozzarella cheese.",
        ingredients: &[
            "chicken breast", "breadcrumbs", "parmesan cheese", "mozzarella cheese",
            "marinara sauce", "eggs", "flour", "basil",
        ],
        url: "https://www.americastestkitchen.com/recipes/chicken-parmesan",
        tags: &["comfort", "italian"],
        time_minutes: 45,
    },
    AtkReference {
        id: "atk-pasta-carbonara",
        title: "Pasta Carbonara",
        description: "Classic Roman pasta dish with eggs, pancetta, pecorino romano, and black pepper.",
        ingredients: &[
            "spaghetti", "eggs", "pancetta", "pecorino romano", "black pepper", "pasta water",
        ],
        url: "https://www.americastestkitchen.com/recipes/pasta-carbonara",
        tags: &["quick", "italian", "comfort"],
        time_minutes: 25,
    },
    AtkReference {
        id: "atk-beef-stir-fry",
        title: "Beef and Broccoli Stir-Fry",
        description: "Tender beef with crisp broccoli in a savory sauce, served over rice.",
        ingredients: &[
            "beef", "broccoli", "soy sauce", "garlic", "ginger", "cornstarch", "rice", "sesame oil",
        ],
        url: "https://www.americastestkitchen.com/recipes/beef-broccoli-stir-fry",
        tags: &["quick", "asian"],
        time_minutes: 30,
    },
    AtkReference {
        id: "atk-roasted-chicken",
        title: "Perfect Roasted Chicken",
        description: "Juicy roast chicken with crispy skin and herbs.",
        ingredients: &[
            "whole chicken", "butter", "thyme", "rosemary", "garlic", "lemon", "salt", "pepper",
        ],
        url: "https://www.americastestkitchen.com/recipes/perfect-roasted-chicken",
        tags: &["comfort", "sunday-dinner"],
        time_minutes: 90,
    },
    AtkReference {
        id: "atk-chocolate-chip-cookies",
        title: "The Best Chocolate Chip Cookies",
        description: "Perfectly chewy cookies with crispy edges and gooey chocolate chips.",
        ingredients: &[
            "flour", "butter", "brown sugar", "white sugar", "eggs", "vanilla",
            "chocolate chips", "baking soda", "salt",
        ],
        url: "https://www.americastestkitchen.com/recipes/chocolate-chip-cookies",
        tags: &["dessert", "baking"],
        time_minutes: 35,
    },
    AtkReference {
        id: "atk-lasagna",
        title: "Simple Italian-American Lasagna",
        description: "Classic lasagna with meat sauce, ricotta, mozzarella, and parmesan.",
        ingredients: &[
            "lasagna noodles", "ground beef", "ricotta cheese", "mozzarella cheese",
            "parmesan cheese", "tomato sauce", "onion", "garlic", "basil",
        ],
        url: "https://www.americastestkitchen.com/recipes/lasagna",
        tags: &["comfort", "italian", "make-ahead"],
        time_minutes: 120,
    },
    AtkReference {
        id: "atk-mac-and-cheese",
        title: "Stovetop Macaroni and Cheese",
        description: "Creamy, cheesy macaroni and cheese made on the stovetop.",
        ingredients: &[
            "elbow macaroni", "cheddar cheese", "milk", "butter", "flour",
            "mustard powder", "salt", "pepper",
        ],
        url: "https://www.americastestkitchen.com/recipes/mac-and-cheese",
        tags: &["comfort", "quick", "kid-friendly"],
        time_minutes: 25,
    },
    AtkReference {
        id: "atk-chicken-noodle-soup",
        title: "Classic Chicken Noodle Soup",
        description: "Comforting chicken soup with vegetables and egg noodles.",
        ingredients: &[
            "chicken", "carrots", "celery", "onion", "egg noodles", "chicken broth",
            "thyme", "bay leaf", "parsley",
        ],
        url: "https://www.americastestkitchen.com/recipes/chicken-noodle-soup",
        tags: &["comfort", "soup", "healthy"],
        time_minutes: 60,
    },
    AtkReference {
        id: "atk-fried-rice",
        title: "Perfect Fried Rice",
        description: "Restaurant-style fried rice with vegetables, eggs, and soy sauce.",
        ingredients: &[
            "rice", "eggs", "soy sauce", "sesame oil", "peas", "carrots",
            "green onions", "garlic", "ginger",
        ],
        url: "https://www.americastestkitchen.com/recipes/fried-rice",
        tags: &["quick", "asian", "easy"],
        time_minutes: 20,
    },
    AtkReference {
        id: "atk-banana-bread",
        title: "Ultimate Banana Bread",
        description: "Moist, flavorful banana bread with a tender crumb.",
        ingredients: &[
            "ripe bananas", "flour", "butter", "brown sugar", "eggs", "baking soda",
            "vanilla", "walnuts", "salt",
        ],
        url: "https://www.americastestkitchen.com/recipes/banana-bread",
        tags: &["baking", "breakfast", "snack"],
        time_minutes: 75,
    },
];
