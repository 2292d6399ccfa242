use serde::{Deserialize, Serialize};

/// Category label that classifies a recipe as a main course.
pub const MAIN_COURSE_LABEL: &str = "main course";

/// Category label that classifies a recipe as a dessert.
pub const DESSERT_LABEL: &str = "dessert";

/// Presentation variant of a recipe.
///
/// The variant is derived once from the category when the recipe is
/// created and only decides which decorative header precedes the summary.
/// It never takes part in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeKind {
    MainCourse,
    Dessert,
    Generic,
}

impl RecipeKind {
    /// Classifies a category string against the fixed label set.
    pub fn classify(category: &str) -> Self {
        if eq_ignore_case(category, MAIN_COURSE_LABEL) {
            RecipeKind::MainCourse
        } else if eq_ignore_case(category, DESSERT_LABEL) {
            RecipeKind::Dessert
        } else {
            RecipeKind::Generic
        }
    }

    /// Decorative header shown above the summary, if the variant has one.
    pub fn header(&self) -> Option<&'static str> {
        match self {
            RecipeKind::MainCourse => Some("### Main course ###"),
            RecipeKind::Dessert => Some("### Dessert ###"),
            RecipeKind::Generic => None,
        }
    }

    /// Category string stored for recipes of this variant.
    ///
    /// Labelled variants are normalized to their label, generic recipes keep
    /// whatever category was given.
    fn canonical_category(&self, given: String) -> String {
        match self {
            RecipeKind::MainCourse => MAIN_COURSE_LABEL.to_string(),
            RecipeKind::Dessert => DESSERT_LABEL.to_string(),
            RecipeKind::Generic => given,
        }
    }
}

/// A single catalog entry describing a dish.
///
/// Recipes are immutable once created: there are accessors but no setters,
/// so the category a catalog search relies on can never drift.
///
/// # Examples
///
/// ```
/// use recipe_book::{Recipe, RecipeKind};
///
/// let recipe = Recipe::create(
///     "Pancakes",
///     "Dessert",
///     vec!["Flour".to_string(), "Milk".to_string()],
///     "Mix. Fry.",
///     "",
/// );
/// assert_eq!(recipe.kind(), RecipeKind::Dessert);
/// assert!(recipe.matches_ingredients(&["milk"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    name: String,
    category: String,
    kind: RecipeKind,
    ingredients: Vec<String>,
    instructions: String,
    dietary_info: String,
}

impl Recipe {
    /// Creates a recipe, deriving its variant from `category`.
    ///
    /// The category is compared case-insensitively against `"main course"`
    /// and `"dessert"`. Any other value, including an empty one, yields a
    /// [`RecipeKind::Generic`] recipe that keeps the category verbatim.
    pub fn create(
        name: impl Into<String>,
        category: impl Into<String>,
        ingredients: Vec<String>,
        instructions: impl Into<String>,
        dietary_info: impl Into<String>,
    ) -> Self {
        let category = category.into();
        let kind = RecipeKind::classify(&category);

        Recipe {
            name: name.into(),
            category: kind.canonical_category(category),
            kind,
            ingredients,
            instructions: instructions.into(),
            dietary_info: dietary_info.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn kind(&self) -> RecipeKind {
        self.kind
    }

    /// Ingredients in the order they were entered.
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// Dietary note; empty means no restriction was given.
    pub fn dietary_info(&self) -> &str {
        &self.dietary_info
    }

    /// Renders the labelled summary block, preceded by the variant header.
    pub fn render_summary(&self) -> String {
        let mut lines = Vec::with_capacity(6);
        if let Some(header) = self.kind.header() {
            lines.push(header.to_string());
        }
        lines.push(format!("Recipe: {}", self.name));
        lines.push(format!("Category: {}", self.category));
        lines.push(format!("Ingredients: {}", self.ingredients.join(", ")));
        lines.push(format!("Instructions: {}", self.instructions));
        lines.push(format!("Dietary info: {}", self.dietary_info));
        to_block(lines)
    }

    /// Renders one bulleted line per ingredient under a header line.
    pub fn render_ingredient_list(&self) -> String {
        let header = format!("Ingredients for recipe '{}':", self.name);
        let items = self.ingredients.iter().map(|ingredient| format!("- {ingredient}"));
        to_block(std::iter::once(header).chain(items))
    }

    /// Renders the instructions as numbered steps under a header line.
    pub fn render_step_instructions(&self) -> String {
        let header = format!("Step-by-step instructions for recipe '{}':", self.name);
        let steps = self
            .steps()
            .into_iter()
            .enumerate()
            .map(|(number, step)| format!("Step {}: {step}", number + 1));
        to_block(std::iter::once(header).chain(steps))
    }

    /// Splits the instructions into steps on the period character.
    ///
    /// Each fragment is trimmed; fragments left empty by trimming (such as
    /// the one after a final period) are dropped.
    pub fn steps(&self) -> Vec<&str> {
        self.instructions
            .split('.')
            .map(str::trim)
            .filter(|step| !step.is_empty())
            .collect()
    }

    /// Returns true if every queried ingredient is one of this recipe's
    /// ingredients, ignoring case. An empty query matches every recipe.
    pub fn matches_ingredients<S: AsRef<str>>(&self, query: &[S]) -> bool {
        query.iter().all(|wanted| {
            self.ingredients
                .iter()
                .any(|have| eq_ignore_case(have, wanted.as_ref()))
        })
    }

    pub fn matches_category(&self, query: &str) -> bool {
        eq_ignore_case(&self.category, query)
    }

    pub fn matches_dietary_info(&self, query: &str) -> bool {
        eq_ignore_case(&self.dietary_info, query)
    }
}

/// Joins lines into a block where every line, including the last, ends in
/// a newline.
fn to_block(lines: impl IntoIterator<Item = String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

/// Case-insensitive exact comparison. Accents are significant.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredients(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn salmon_pasta() -> Recipe {
        Recipe::create(
            "Creamy salmon pasta",
            "main course",
            ingredients(&["Salmon", "Pasta", "Cream", "Garlic", "Salt"]),
            "Boil pasta. Fry salmon.",
            "gluten-free",
        )
    }

    #[test]
    fn test_classify_labels_case_insensitively() {
        assert_eq!(RecipeKind::classify("main course"), RecipeKind::MainCourse);
        assert_eq!(RecipeKind::classify("MAIN Course"), RecipeKind::MainCourse);
        assert_eq!(RecipeKind::classify("Dessert"), RecipeKind::Dessert);
        assert_eq!(RecipeKind::classify("soup"), RecipeKind::Generic);
        assert_eq!(RecipeKind::classify(""), RecipeKind::Generic);
        assert_eq!(RecipeKind::classify(" dessert"), RecipeKind::Generic);
    }

    #[test]
    fn test_create_normalizes_labelled_category() {
        let recipe = Recipe::create("Cake", "DESSERT", vec![], "", "");
        assert_eq!(recipe.kind(), RecipeKind::Dessert);
        assert_eq!(recipe.category(), "dessert");
    }

    #[test]
    fn test_create_keeps_custom_category_verbatim() {
        let recipe = Recipe::create("Borscht", "Soup ", vec![], "", "");
        assert_eq!(recipe.kind(), RecipeKind::Generic);
        assert_eq!(recipe.category(), "Soup ");

        let recipe = Recipe::create("Nameless", "", vec![], "", "");
        assert_eq!(recipe.kind(), RecipeKind::Generic);
        assert_eq!(recipe.category(), "");
    }

    #[test]
    fn test_render_summary_with_header() {
        let summary = salmon_pasta().render_summary();
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(
            lines,
            vec![
                "### Main course ###",
                "Recipe: Creamy salmon pasta",
                "Category: main course",
                "Ingredients: Salmon, Pasta, Cream, Garlic, Salt",
                "Instructions: Boil pasta. Fry salmon.",
                "Dietary info: gluten-free",
            ]
        );
    }

    #[test]
    fn test_render_summary_generic_starts_with_name() {
        let recipe = Recipe::create(
            "Tomato soup",
            "soup",
            ingredients(&["Tomato"]),
            "Simmer.",
            "",
        );
        assert_eq!(recipe.kind(), RecipeKind::Generic);
        let summary = recipe.render_summary();
        assert!(summary.starts_with("Recipe: Tomato soup\n"));
        assert!(summary.ends_with("Dietary info: \n"));
    }

    #[test]
    fn test_render_ingredient_list_preserves_order() {
        let recipe = Recipe::create(
            "Salad",
            "side",
            ingredients(&["Lettuce", "Tomato", "Lettuce"]),
            "",
            "",
        );
        assert_eq!(
            recipe.render_ingredient_list(),
            "Ingredients for recipe 'Salad':\n- Lettuce\n- Tomato\n- Lettuce\n"
        );
    }

    #[test]
    fn test_render_step_instructions() {
        let steps = salmon_pasta().render_step_instructions();
        let lines: Vec<&str> = steps.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Step-by-step instructions for recipe 'Creamy salmon pasta':",
                "Step 1: Boil pasta",
                "Step 2: Fry salmon",
            ]
        );
    }

    #[test]
    fn test_steps_drop_empty_fragments() {
        let recipe = Recipe::create("Tea", "drink", vec![], "Boil water.  Steep tea..", "");
        assert_eq!(recipe.steps(), vec!["Boil water", "Steep tea"]);

        let recipe = Recipe::create("Nothing", "drink", vec![], "", "");
        assert!(recipe.steps().is_empty());
        assert_eq!(
            recipe.render_step_instructions(),
            "Step-by-step instructions for recipe 'Nothing':\n"
        );
    }

    #[test]
    fn test_matches_ingredients() {
        let recipe = salmon_pasta();
        assert!(recipe.matches_ingredients(&["salmon", "PASTA"]));
        assert!(recipe.matches_ingredients(&["Garlic"]));
        assert!(!recipe.matches_ingredients(&["salmon", "rice"]));
        // No substring matching
        assert!(!recipe.matches_ingredients(&["salm"]));
        assert!(!recipe.matches_ingredients(&[""]));
    }

    #[test]
    fn test_matches_ingredients_empty_query_is_vacuous() {
        let empty: [&str; 0] = [];
        assert!(salmon_pasta().matches_ingredients(&empty));
        assert!(Recipe::create("Air", "", vec![], "", "").matches_ingredients(&empty));
    }

    #[test]
    fn test_matches_ingredients_unicode_case() {
        let recipe = Recipe::create(
            "Mokkapalat",
            "dessert",
            ingredients(&["Vehnäjauho", "Kaakaojauhe"]),
            "",
            "",
        );
        assert!(recipe.matches_ingredients(&["VEHNÄJAUHO"]));
        // Accents are significant
        assert!(!recipe.matches_ingredients(&["vehnajauho"]));
    }

    #[test]
    fn test_matches_category_unicode_case() {
        let recipe = Recipe::create("Mokkapalat", "Jälkiruoka", vec![], "", "Ei ruokavaliorajoituksia");
        assert_eq!(recipe.kind(), RecipeKind::Generic);
        assert!(recipe.matches_category("JÄLKIRUOKA"));
        assert!(recipe.matches_category("jälkiruoka"));
        // Accents are significant
        assert!(!recipe.matches_category("jalkiruoka"));
        assert!(recipe.matches_dietary_info("EI RUOKAVALIORAJOITUKSIA"));
    }

    #[test]
    fn test_matches_category_and_dietary_info() {
        let recipe = salmon_pasta();
        assert!(recipe.matches_category("Main Course"));
        assert!(!recipe.matches_category("main"));
        assert!(recipe.matches_dietary_info("GLUTEN-FREE"));
        assert!(!recipe.matches_dietary_info("gluten"));

        let unrestricted = Recipe::create("Water", "drink", vec![], "", "");
        assert!(unrestricted.matches_dietary_info(""));
    }
}
