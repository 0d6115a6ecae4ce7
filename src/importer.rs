//! Simulated recipe import.
//!
//! There is no scraping or extraction here: a URL is matched on its domain
//! and free text on a handful of keywords, and the hit selects one of the
//! canned templates. Unrecognized input is not an error, it falls back to the
//! default template. Every result is stamped with a fresh id and timestamp.

use time::OffsetDateTime;
use uuid::Uuid;

use crate::catalog::{banana_pancakes, chicken_pasta, templates, veggie_stir_fry};
use crate::models::{Confidence, Recipe, epoch_millis};

/// Domain table, in match-priority order. First hit wins.
const DOMAIN_KEYWORDS: [&str; 3] = ["tiktok.com", "youtube.com", "instagram.com"];

/// Canned platform links for the "try a demo" flow. Each one routes through
/// [`from_url`], so a demo import is stamped with a fresh id and timestamp
/// like any other import.
pub const DEMO_LINKS: [&str; 3] = [
    "https://tiktok.com/@chef/lemon-chicken-pasta",
    "https://youtube.com/watch?v=veggie-stirfry",
    "https://instagram.com/p/banana-pancakes",
];

fn stamp(template: &Recipe) -> Recipe {
    let mut recipe = template.clone();
    recipe.id = Uuid::new_v4().to_string();
    recipe.created_at = epoch_millis(OffsetDateTime::now_utc());
    recipe
}

/// Synthesize a recipe from a video link. Known domains map to a fixed
/// template; anything else gets the default template with the input URL
/// recorded as its source.
pub fn from_url(url: &str) -> Recipe {
    let lower = url.to_lowercase();
    for (domain, template) in DOMAIN_KEYWORDS
        .iter()
        .zip([chicken_pasta(), veggie_stir_fry(), banana_pancakes()])
    {
        if lower.contains(domain) {
            return stamp(template);
        }
    }
    let mut recipe = stamp(chicken_pasta());
    recipe.source_url = Some(url.to_string());
    recipe
}

/// Synthesize a recipe from free text. Keyword groups pick the template; the
/// input becomes the title when it is long enough to look like one. Text
/// imports are always marked needs-review.
pub fn from_text(text: &str) -> Recipe {
    let lower = text.to_lowercase();
    let base = if ["vegetab", "stir", "veggie"].iter().any(|k| lower.contains(k)) {
        veggie_stir_fry()
    } else if ["pancake", "banana", "breakfast"].iter().any(|k| lower.contains(k)) {
        banana_pancakes()
    } else {
        chicken_pasta()
    };

    let mut recipe = stamp(base);
    if text.chars().count() > 5 {
        recipe.title = capitalize_first(text);
    }
    recipe.confidence = Confidence::NeedsReview;
    recipe
}

/// Owned copies of all templates, for "try a demo" pickers.
pub fn demo_catalog() -> Vec<Recipe> {
    templates().to_vec()
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
