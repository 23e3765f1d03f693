//! Read-only menu catalog.
//!
//! Recipes are reference data supplied externally (a fixed JSON document in
//! the demo). The cart and order lifecycle never mutate the catalog; prices
//! are snapshotted into cart lines at add time.

use serde::{Deserialize, Serialize};

use och_qolma_core::{ProductId, Som};

/// Menu category of a recipe.
///
/// Serde names match the original data set (Uzbek).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Main dishes (palov, norin, ...).
    #[serde(rename = "Asosiy")]
    Main,
    /// Soups.
    #[serde(rename = "Suyuq")]
    Soup,
    /// Dough-based dishes (manti, chuchvara, ...).
    #[serde(rename = "Xamir")]
    Dough,
    /// Kebabs.
    #[serde(rename = "Kabob")]
    Kebab,
}

/// Preparation difficulty tier, used by the menu filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Quick everyday cooking.
    #[serde(rename = "Tez")]
    Quick,
    /// Traditional preparation.
    #[serde(rename = "An'anaviy")]
    Traditional,
    /// Festive, labor-intensive dishes.
    #[serde(rename = "Bayramona")]
    Festive,
}

/// A dish on the menu, with its recipe content and ordering price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: u32,
    pub description: String,
    pub history: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub secrets: Vec<String>,
    /// Serving suggestion.
    pub serving: String,
    pub image: String,
    /// Unit price in som.
    pub price: Som,
    pub estimated_delivery: String,
}

/// The read-only recipe catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Create a catalog from a list of recipes.
    #[must_use]
    pub const fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Parse a catalog from a JSON array of recipes.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the recipe schema.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Look up a recipe by product id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| &r.id == id)
    }

    /// All recipes, in catalog order.
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Recipes matching a difficulty filter; `None` means no filter.
    pub fn filter_by_difficulty(
        &self,
        difficulty: Option<Difficulty>,
    ) -> impl Iterator<Item = &Recipe> {
        self.recipes
            .iter()
            .filter(move |r| difficulty.is_none_or(|d| r.difficulty == d))
    }

    /// Number of recipes in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
