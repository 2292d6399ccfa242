//! The recipe catalog.
//!
//! Records are kept in insertion order. That order defines the one-based
//! display index used by every listing and selection, and since records are
//! never removed an index stays valid for the lifetime of the catalog.

use crate::loader::{self, LoadError};
use crate::model::Recipe;
use tracing::{debug, info};

mod model;

pub use model::{CatalogEntry, SearchField};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding the built-in sample recipes.
    pub fn seeded() -> Result<Self, LoadError> {
        let mut catalog = Catalog::new();
        catalog.extend(loader::builtin()?);
        Ok(catalog)
    }

    /// Appends a recipe and returns its display index.
    pub fn add(&mut self, recipe: Recipe) -> usize {
        debug!(name = recipe.name(), kind = ?recipe.kind(), "adding recipe");
        self.recipes.push(recipe);
        self.recipes.len()
    }

    /// Appends every recipe in order.
    pub fn extend(&mut self, recipes: impl IntoIterator<Item = Recipe>) {
        let before = self.recipes.len();
        for recipe in recipes {
            self.add(recipe);
        }
        info!(added = self.recipes.len() - before, total = self.recipes.len(), "loaded recipes");
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Iterates over all recipes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// Lists every recipe name with its one-based display index.
    pub fn list_all(&self) -> Vec<CatalogEntry> {
        self.recipes
            .iter()
            .enumerate()
            .map(|(i, recipe)| CatalogEntry::new(i + 1, recipe.name()))
            .collect()
    }

    /// Looks up a recipe by its one-based display index.
    ///
    /// Returns `None` for zero, negative, and out-of-range indices.
    pub fn get_by_index(&self, index: i64) -> Option<&Recipe> {
        let position = usize::try_from(index).ok()?.checked_sub(1)?;
        self.recipes.get(position)
    }

    /// Finds recipes that contain every queried ingredient.
    pub fn search_by_ingredients<S: AsRef<str>>(&self, query: &[S]) -> Vec<&Recipe> {
        self.filter(SearchField::Ingredients, |r| r.matches_ingredients(query))
    }

    pub fn search_by_category(&self, query: &str) -> Vec<&Recipe> {
        self.filter(SearchField::Category, |r| r.matches_category(query))
    }

    pub fn search_by_dietary_info(&self, query: &str) -> Vec<&Recipe> {
        self.filter(SearchField::DietaryInfo, |r| r.matches_dietary_info(query))
    }

    /// Runs the search for `field` with a query line as the user typed it.
    ///
    /// An ingredient line is a comma separated list (see [`split_list`]);
    /// category and dietary lines are compared whole.
    pub fn search(&self, field: SearchField, line: &str) -> Vec<&Recipe> {
        match field {
            SearchField::Ingredients => self.search_by_ingredients(&split_list(line)),
            SearchField::Category => self.search_by_category(line),
            SearchField::DietaryInfo => self.search_by_dietary_info(line),
        }
    }

    fn filter<F>(&self, field: SearchField, predicate: F) -> Vec<&Recipe>
    where
        F: Fn(&Recipe) -> bool,
    {
        let results: Vec<&Recipe> = self.recipes.iter().filter(|r| predicate(r)).collect();
        debug!(field = field.as_str(), matches = results.len(), "search finished");
        results
    }
}

/// Splits a comma separated list, trimming each element.
///
/// Empty elements are kept, so `"a,,b"` yields three entries.
pub fn split_list(line: &str) -> Vec<String> {
    line.split(',').map(|item| item.trim().to_string()).collect()
}
