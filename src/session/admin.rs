//! Administrator session: list, add, and search recipes.

use std::io::{BufRead, Write};

use tracing::debug;

use super::{print_listing, Console, SessionError, RETURN_NOTICE};
use crate::catalog::{split_list, Catalog, SearchField};
use crate::model::Recipe;

const SEPARATOR: &str = "-----------------------";

const MENU: &[&str] = &[
    "",
    "1. Show all recipes",
    "2. Add a new recipe",
    "3. Search recipes by ingredients",
    "4. Search recipes by category",
    "5. Search recipes by dietary info",
    "6. Return to the user menu",
];

/// Commands accepted at the administrator menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminCommand {
    ListAll,
    AddRecipe,
    Search(SearchField),
    Exit,
}

impl AdminCommand {
    /// Maps a menu token to its command; unknown tokens yield `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "1" => Some(AdminCommand::ListAll),
            "2" => Some(AdminCommand::AddRecipe),
            "3" => Some(AdminCommand::Search(SearchField::Ingredients)),
            "4" => Some(AdminCommand::Search(SearchField::Category)),
            "5" => Some(AdminCommand::Search(SearchField::DietaryInfo)),
            "6" => Some(AdminCommand::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminState {
    MenuDisplayed,
    Running(AdminCommand),
    Exit,
}

/// Runs the administrator menu loop until the exit command or end of input.
pub fn run<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    console: &mut Console<R, W>,
) -> Result<(), SessionError> {
    let mut state = AdminState::MenuDisplayed;

    while state != AdminState::Exit {
        state = match state {
            AdminState::MenuDisplayed => read_command(console)?,
            AdminState::Running(AdminCommand::Exit) => {
                console.write_line(RETURN_NOTICE)?;
                AdminState::Exit
            }
            AdminState::Running(command) => perform(command, catalog, console)?,
            AdminState::Exit => AdminState::Exit,
        };
        debug!(?state, "admin session transition");
    }

    Ok(())
}

fn read_command<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<AdminState, SessionError> {
    for line in MENU {
        console.write_line(line)?;
    }

    let Some(token) = console.prompt("Enter your choice: ")? else {
        return Ok(AdminState::Exit);
    };

    match AdminCommand::parse(&token) {
        Some(command) => Ok(AdminState::Running(command)),
        None => {
            debug!(token = %token, "rejected admin menu token");
            console.write_line("Invalid choice, please try again.")?;
            Ok(AdminState::MenuDisplayed)
        }
    }
}

/// Performs one menu action. End of input while collecting fields ends the
/// session without touching the catalog.
fn perform<R: BufRead, W: Write>(
    command: AdminCommand,
    catalog: &mut Catalog,
    console: &mut Console<R, W>,
) -> Result<AdminState, SessionError> {
    let completed = match command {
        AdminCommand::ListAll => {
            console.write_line("")?;
            print_listing(catalog, console)?;
            true
        }
        AdminCommand::AddRecipe => add_recipe(catalog, console)?,
        AdminCommand::Search(field) => search(field, catalog, console)?,
        AdminCommand::Exit => false,
    };

    Ok(if completed {
        AdminState::MenuDisplayed
    } else {
        AdminState::Exit
    })
}

fn add_recipe<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    console: &mut Console<R, W>,
) -> Result<bool, SessionError> {
    let Some(name) = console.prompt("Enter the recipe name: ")? else {
        return Ok(false);
    };
    let Some(category) = console.prompt("Enter the category (e.g. main course, dessert): ")?
    else {
        return Ok(false);
    };
    let Some(ingredients) = console.prompt("Enter the ingredients (comma separated): ")? else {
        return Ok(false);
    };
    let Some(instructions) = console.prompt("Enter the instructions: ")? else {
        return Ok(false);
    };
    let Some(dietary_info) = console.prompt(
        "Enter dietary info (e.g. gluten-free, dairy-free) or leave empty: ",
    )?
    else {
        return Ok(false);
    };

    let recipe = Recipe::create(
        name,
        category,
        split_list(&ingredients),
        instructions,
        dietary_info,
    );
    catalog.add(recipe);
    console.write_line("Recipe added successfully!")?;
    Ok(true)
}

fn search<R: BufRead, W: Write>(
    field: SearchField,
    catalog: &Catalog,
    console: &mut Console<R, W>,
) -> Result<bool, SessionError> {
    let message = match field {
        SearchField::Ingredients => "Enter the ingredients (comma separated): ",
        SearchField::Category => "Enter the category (e.g. main course, dessert): ",
        SearchField::DietaryInfo => "Enter dietary info (e.g. gluten-free, dairy-free, vegan): ",
    };
    let Some(line) = console.prompt(message)? else {
        return Ok(false);
    };

    let results = catalog.search(field, &line);

    if results.is_empty() {
        console.write_line("No recipes found.")?;
    } else {
        for recipe in results {
            console.write_block(&recipe.render_summary())?;
            console.write_line(SEPARATOR)?;
        }
    }
    Ok(true)
}
