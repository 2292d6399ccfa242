mod recipe;

pub use recipe::{Recipe, RecipeKind, DESSERT_LABEL, MAIN_COURSE_LABEL};
pub(crate) use recipe::eq_ignore_case;
