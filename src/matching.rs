//! Heuristic matching of a user recipe against the reference catalog.
//!
//! The weights (title ×3, +1 per ingredient pair, +0.5 per shared tag,
//! +1/+0.5 time proximity) and the >1 score cutoff are empirically chosen
//! tunables with no deeper rationale. Suggestion output depends on them
//! exactly; recalibrate deliberately, not in passing.

use crate::catalog::ATK_REFERENCES;
use crate::models::{AtkReference, Recipe};

/// Default number of suggestions shown in the UI.
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Word-overlap similarity between two titles, in `[0, 1]`.
///
/// Tokens longer than three characters match when one contains the other;
/// each token of the first title counts at most once.
fn title_similarity(a: &str, b: &str) -> f64 {
    let words1: Vec<String> = a.to_lowercase().split_whitespace().map(String::from).collect();
    let words2: Vec<String> = b.to_lowercase().split_whitespace().map(String::from).collect();

    let mut matches = 0usize;
    for w1 in &words1 {
        for w2 in &words2 {
            if w1.len() > 3 && w2.contains(w1.as_str()) {
                matches += 1;
                break;
            }
            if w2.len() > 3 && w1.contains(w2.as_str()) {
                matches += 1;
                break;
            }
        }
    }

    let denom = words1.len().max(words2.len());
    if denom == 0 {
        return 0.0;
    }
    matches as f64 / denom as f64
}

fn score(recipe: &Recipe, reference: &AtkReference) -> f64 {
    let mut score = title_similarity(&recipe.title, reference.title) * 3.0;

    // Every (recipe ingredient, reference ingredient) containment pair adds a
    // point. Deliberately not deduplicated.
    for ingredient in &recipe.ingredients {
        let name = ingredient.name.to_lowercase();
        for reference_ingredient in reference.ingredients {
            let reference_name = reference_ingredient.to_lowercase();
            if name.contains(&reference_name) || reference_name.contains(&name) {
                score += 1.0;
            }
        }
    }

    for tag in &recipe.tags {
        if reference.tags.contains(&tag.as_str()) {
            score += 0.5;
        }
    }

    let time_diff = recipe.time_minutes.abs_diff(reference.time_minutes);
    if time_diff < 15 {
        score += 1.0;
    } else if time_diff < 30 {
        score += 0.5;
    }

    score
}

/// Score `recipe` against the whole reference catalog and return the best
/// matches in descending score order, dropping anything at or below 1.0 and
/// truncating to `max_results`. Equal scores keep catalog order.
pub fn find_matches(recipe: &Recipe, max_results: usize) -> Vec<&'static AtkReference> {
    let mut scored: Vec<(&'static AtkReference, f64)> = ATK_REFERENCES
        .iter()
        .map(|reference| (reference, score(recipe, reference)))
        .collect();

    // Stable sort, so catalog order survives among equal scores.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    scored
        .into_iter()
        .filter(|(_, s)| *s > 1.0)
        .take(max_results)
        .map(|(reference, _)| reference)
        .collect()
}
