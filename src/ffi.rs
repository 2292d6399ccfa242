//! UniFFI bindings for cross-platform support (iOS, Android).
//!
//! The catalog is exposed as a shared object. UniFFI objects must be `Sync`,
//! so the catalog sits behind a mutex here; the console sessions use the
//! plain [`Catalog`] directly.

use crate::catalog::{Catalog, CatalogEntry};
use crate::loader::{self, LoadError};
use crate::model::{Recipe, RecipeKind};
use camino::Utf8Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// FFI-safe error type.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum RecipeBookError {
    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },
}

impl From<LoadError> for RecipeBookError {
    fn from(e: LoadError) -> Self {
        match e {
            LoadError::IoError(e) => RecipeBookError::IoError {
                message: e.to_string(),
            },
            e @ LoadError::ParseError { .. } => RecipeBookError::ParseError {
                message: e.to_string(),
            },
            LoadError::DirectoryNotFound(p) => RecipeBookError::InvalidPath {
                message: p.to_string(),
            },
            LoadError::InvalidPath(p) => RecipeBookError::InvalidPath { message: p },
            e @ (LoadError::GlobError(_) | LoadError::PatternError(_)) => {
                RecipeBookError::IoError {
                    message: e.to_string(),
                }
            }
        }
    }
}

/// FFI-safe representation of a recipe.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecipe {
    pub name: String,
    pub category: String,
    /// One of `main_course`, `dessert`, `generic`
    pub kind: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub dietary_info: String,
    /// Instructions split into steps
    pub steps: Vec<String>,
}

impl From<&Recipe> for FfiRecipe {
    fn from(r: &Recipe) -> Self {
        let kind = match r.kind() {
            RecipeKind::MainCourse => "main_course",
            RecipeKind::Dessert => "dessert",
            RecipeKind::Generic => "generic",
        };

        FfiRecipe {
            name: r.name().to_string(),
            category: r.category().to_string(),
            kind: kind.to_string(),
            ingredients: r.ingredients().to_vec(),
            instructions: r.instructions().to_string(),
            dietary_info: r.dietary_info().to_string(),
            steps: r.steps().into_iter().map(String::from).collect(),
        }
    }
}

/// A line of the catalog listing.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCatalogEntry {
    /// One-based display index
    pub index: u32,
    pub name: String,
}

impl From<CatalogEntry> for FfiCatalogEntry {
    fn from(e: CatalogEntry) -> Self {
        FfiCatalogEntry {
            index: saturating_u32(e.index),
            name: e.name,
        }
    }
}

#[derive(uniffi::Object)]
pub struct FfiCatalog {
    inner: Mutex<Catalog>,
}

#[uniffi::export]
impl FfiCatalog {
    /// Creates an empty catalog.
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        Arc::new(FfiCatalog::wrap(Catalog::new()))
    }

    /// Creates a catalog holding the built-in sample recipes.
    #[uniffi::constructor]
    pub fn seeded() -> Result<Arc<Self>, RecipeBookError> {
        Ok(Arc::new(FfiCatalog::wrap(Catalog::seeded()?)))
    }

    /// Adds a recipe and returns its display index.
    pub fn add_recipe(
        &self,
        name: String,
        category: String,
        ingredients: Vec<String>,
        instructions: String,
        dietary_info: String,
    ) -> u32 {
        let recipe = Recipe::create(name, category, ingredients, instructions, dietary_info);
        saturating_u32(self.lock().add(recipe))
    }

    /// Loads every `.yaml` recipe file under `dir` and returns how many
    /// recipes were added.
    pub fn load_dir(&self, dir: String) -> Result<u32, RecipeBookError> {
        let recipes = loader::from_dir(Utf8Path::new(&dir))?;
        let added = saturating_u32(recipes.len());
        self.lock().extend(recipes);
        Ok(added)
    }

    pub fn count(&self) -> u32 {
        saturating_u32(self.lock().len())
    }

    pub fn list_all(&self) -> Vec<FfiCatalogEntry> {
        self.lock()
            .list_all()
            .into_iter()
            .map(FfiCatalogEntry::from)
            .collect()
    }

    /// Returns the recipe at a one-based index, or `None` when out of range.
    pub fn get_by_index(&self, index: i64) -> Option<FfiRecipe> {
        self.lock().get_by_index(index).map(FfiRecipe::from)
    }

    pub fn search_by_ingredients(&self, query: Vec<String>) -> Vec<FfiRecipe> {
        to_ffi(self.lock().search_by_ingredients(&query))
    }

    pub fn search_by_category(&self, query: String) -> Vec<FfiRecipe> {
        to_ffi(self.lock().search_by_category(&query))
    }

    pub fn search_by_dietary_info(&self, query: String) -> Vec<FfiRecipe> {
        to_ffi(self.lock().search_by_dietary_info(&query))
    }

    /// Returns the rendered summary of the recipe at `index`.
    pub fn summary(&self, index: i64) -> Option<String> {
        self.lock().get_by_index(index).map(Recipe::render_summary)
    }

    /// Returns the rendered ingredient list of the recipe at `index`.
    pub fn ingredient_list(&self, index: i64) -> Option<String> {
        self.lock()
            .get_by_index(index)
            .map(Recipe::render_ingredient_list)
    }

    /// Returns the rendered step-by-step instructions of the recipe at `index`.
    pub fn step_instructions(&self, index: i64) -> Option<String> {
        self.lock()
            .get_by_index(index)
            .map(Recipe::render_step_instructions)
    }

    /// Serializes every recipe, in catalog order, as a JSON array.
    pub fn to_json(&self) -> String {
        let catalog = self.lock();
        let recipes: Vec<&Recipe> = catalog.iter().collect();
        serde_json::to_string(&recipes).unwrap_or_default()
    }
}

impl FfiCatalog {
    fn wrap(catalog: Catalog) -> Self {
        FfiCatalog {
            inner: Mutex::new(catalog),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Catalog> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn to_ffi(recipes: Vec<&Recipe>) -> Vec<FfiRecipe> {
    recipes.into_iter().map(FfiRecipe::from).collect()
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Counts and indices cross the boundary as `u32`; larger values clamp.
fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
