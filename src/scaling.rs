use crate::models::Ingredient;

/// Linearly rescale ingredient amounts from `original_servings` to
/// `new_servings`, rounding each amount to two decimals, half away from
/// zero. Names, units, and aisles are copied unchanged; the input is not
/// mutated.
///
/// Precondition: `original_servings > 0`. A zero value is a caller bug and
/// is not checked here.
pub fn scale(
    ingredients: &[Ingredient],
    original_servings: u32,
    new_servings: u32,
) -> Vec<Ingredient> {
    let ratio = f64::from(new_servings) / f64::from(original_servings);
    ingredients
        .iter()
        .map(|ingredient| Ingredient {
            amount: (ingredient.amount * ratio * 100.0).round() / 100.0,
            ..ingredient.clone()
        })
        .collect()
}
