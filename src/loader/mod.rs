//! Initial data loading.
//!
//! Recipes are described in YAML documents with a top-level `recipes`
//! sequence:
//!
//! ```yaml
//! recipes:
//!   - name: Tomato soup
//!     category: soup
//!     ingredients: [Tomato, Onion]
//!     instructions: Chop. Simmer.
//!     dietary_info: vegan
//! ```
//!
//! `dietary_info` may be omitted. Every entry goes through
//! [`Recipe::create`], so loaded recipes are classified exactly like the ones
//! an administrator adds by hand.

use crate::model::Recipe;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

const BUILTIN_SOURCE: &str = include_str!("builtin.yaml");

/// Errors that can occur when loading recipes.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read recipe file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse recipes in {source_name}: {error}")]
    ParseError {
        source_name: String,
        error: serde_yaml::Error,
    },

    #[error("Directory does not exist: {0}")]
    DirectoryNotFound(Utf8PathBuf),

    #[error("Failed to read directory: {0}")]
    GlobError(#[from] glob::GlobError),

    #[error("Failed to create glob pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("Path contains invalid UTF-8: {0}")]
    InvalidPath(String),
}

#[derive(Debug, Deserialize)]
struct RecipeDocument {
    #[serde(default)]
    recipes: Vec<RecipeSpec>,
}

#[derive(Debug, Deserialize)]
struct RecipeSpec {
    name: String,
    category: String,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    instructions: String,
    #[serde(default)]
    dietary_info: String,
}

impl From<RecipeSpec> for Recipe {
    fn from(spec: RecipeSpec) -> Self {
        Recipe::create(
            spec.name,
            spec.category,
            spec.ingredients,
            spec.instructions,
            spec.dietary_info,
        )
    }
}

/// Returns the built-in sample recipes, in catalog order.
pub fn builtin() -> Result<Vec<Recipe>, LoadError> {
    from_str("built-in recipes", BUILTIN_SOURCE)
}

/// Parses recipes from a YAML document.
///
/// `source_name` only labels parse errors. An empty document yields no
/// recipes.
pub fn from_str(source_name: &str, content: &str) -> Result<Vec<Recipe>, LoadError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let document: RecipeDocument =
        serde_yaml::from_str(content).map_err(|error| LoadError::ParseError {
            source_name: source_name.to_string(),
            error,
        })?;

    let recipes: Vec<Recipe> = document.recipes.into_iter().map(Recipe::from).collect();
    debug!(source = source_name, count = recipes.len(), "parsed recipes");
    Ok(recipes)
}

/// Reads recipes from a single YAML file.
pub fn from_path(path: &Utf8Path) -> Result<Vec<Recipe>, LoadError> {
    let content = std::fs::read_to_string(path)?;
    from_str(path.as_str(), &content)
}

/// Reads recipes from every `.yaml` file under `dir`, recursively.
///
/// Files are visited in path order, so the resulting catalog order is
/// reproducible between runs.
pub fn from_dir(dir: &Utf8Path) -> Result<Vec<Recipe>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::DirectoryNotFound(dir.to_path_buf()));
    }

    let pattern = dir.join("**/*.yaml");
    let mut paths = Vec::new();
    for entry in glob::glob(pattern.as_str())? {
        let path = Utf8PathBuf::from_path_buf(entry?)
            .map_err(|p| LoadError::InvalidPath(p.display().to_string()))?;
        paths.push(path);
    }
    paths.sort();

    let mut recipes = Vec::new();
    for path in &paths {
        recipes.extend(from_path(path)?);
    }

    info!(dir = %dir, files = paths.len(), recipes = recipes.len(), "loaded recipe directory");
    Ok(recipes)
}
