use serde::Serialize;

/// One line of the catalog listing: a display index and the recipe name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// One-based position in insertion order
    pub index: usize,
    pub name: String,
}

impl CatalogEntry {
    pub(crate) fn new(index: usize, name: &str) -> Self {
        Self {
            index,
            name: name.to_string(),
        }
    }
}

/// Field a catalog search filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Ingredients,
    Category,
    DietaryInfo,
}

impl SearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Ingredients => "ingredients",
            SearchField::Category => "category",
            SearchField::DietaryInfo => "dietary_info",
        }
    }
}
