//! Search filter criterion.
//!
//! The UI exposes three mutually exclusive search axes. The criterion type
//! encodes that exclusivity as a sum type, and [`FilterCriterion::from_inputs`]
//! encodes the precedence between simultaneously non-empty inputs so the
//! rule holds independently of any UI wiring.

/// The user's chosen search axis for one search invocation.
///
/// Exactly one variant is active per search. When raw inputs overlap, the
/// precedence is Ingredients over Category over Area over None.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCriterion {
    /// Free-text ingredient search. Each entry is trimmed and non-empty.
    Ingredients(Vec<String>),
    /// Search within a single recipe category.
    Category(String),
    /// Search within a single cuisine (area).
    Area(String),
    /// No filter selected. Searching with this criterion is a user error.
    None,
}

impl FilterCriterion {
    /// Build a criterion from raw UI inputs.
    ///
    /// The ingredient text is split on commas, each piece trimmed, and empty
    /// pieces dropped, so "chicken, tomato" and " chicken ,, tomato " both
    /// yield two ingredients. Category and area are trimmed and used only
    /// when every higher-precedence input is empty.
    pub fn from_inputs(
        ingredient_text: &str,
        category: Option<&str>,
        area: Option<&str>,
    ) -> FilterCriterion {
        let ingredients: Vec<String> = ingredient_text
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect();
        if !ingredients.is_empty() {
            return FilterCriterion::Ingredients(ingredients);
        }

        if let Some(category) = trimmed_non_empty(category) {
            return FilterCriterion::Category(category);
        }
        if let Some(area) = trimmed_non_empty(area) {
            return FilterCriterion::Area(area);
        }
        FilterCriterion::None
    }
}

fn trimmed_non_empty(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
