//! Browsing session: pick a recipe from the listing and read its details.

use std::io::{BufRead, Write};

use tracing::debug;

use super::{print_listing, Console, SessionError, RETURN_NOTICE};
use crate::catalog::Catalog;
use crate::model::{eq_ignore_case, Recipe};

/// Answer to the "view another?" prompt that ends the session.
const NEGATIVE_ANSWER: &str = "n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrowseState {
    ShowList,
    DetailShown(i64),
    Terminated,
}

/// Outcome of reading a selection at the listing prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Quit,
    Recipe(i64),
    Invalid,
}

impl Selection {
    /// Parses a selection; `0` quits and anything non-numeric is invalid.
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(0) => Selection::Quit,
            Ok(number) => Selection::Recipe(number),
            Err(_) => Selection::Invalid,
        }
    }
}

/// Runs the browsing loop until the user quits or input runs out.
pub fn run<R: BufRead, W: Write>(
    catalog: &Catalog,
    console: &mut Console<R, W>,
) -> Result<(), SessionError> {
    let mut state = BrowseState::ShowList;

    while state != BrowseState::Terminated {
        state = match state {
            BrowseState::ShowList => show_list(catalog, console)?,
            BrowseState::DetailShown(index) => show_detail(catalog, index, console)?,
            BrowseState::Terminated => BrowseState::Terminated,
        };
        debug!(?state, "browse session transition");
    }

    Ok(())
}

fn show_list<R: BufRead, W: Write>(
    catalog: &Catalog,
    console: &mut Console<R, W>,
) -> Result<BrowseState, SessionError> {
    console.write_line("")?;
    console.write_line("Available recipes:")?;
    print_listing(catalog, console)?;
    console.write_line("Choose a recipe number to see its details and instructions.")?;
    console.write_line("You can also enter 0 to return to the main menu.")?;

    let Some(input) = console.prompt("Enter a recipe number or 0: ")? else {
        return Ok(BrowseState::Terminated);
    };

    match Selection::parse(&input) {
        Selection::Quit => {
            console.write_line(RETURN_NOTICE)?;
            Ok(BrowseState::Terminated)
        }
        Selection::Recipe(number) => match catalog.get_by_index(number) {
            Some(_) => Ok(BrowseState::DetailShown(number)),
            None => {
                debug!(number, "recipe number out of range");
                console.write_line("Invalid recipe number, please try again.")?;
                Ok(BrowseState::ShowList)
            }
        },
        Selection::Invalid => {
            debug!(input = %input, "rejected recipe selection");
            console.write_line("Invalid input, please try again.")?;
            Ok(BrowseState::ShowList)
        }
    }
}

fn show_detail<R: BufRead, W: Write>(
    catalog: &Catalog,
    index: i64,
    console: &mut Console<R, W>,
) -> Result<BrowseState, SessionError> {
    let Some(recipe) = catalog.get_by_index(index) else {
        return Ok(BrowseState::ShowList);
    };
    print_detail(recipe, console)?;

    console.write_line("")?;
    let answer = console.prompt("Would you like to choose another recipe? (y/n): ")?;
    match answer {
        Some(answer) if !eq_ignore_case(answer.trim(), NEGATIVE_ANSWER) => {
            Ok(BrowseState::ShowList)
        }
        Some(_) => {
            console.write_line(RETURN_NOTICE)?;
            Ok(BrowseState::Terminated)
        }
        None => Ok(BrowseState::Terminated),
    }
}

fn print_detail<R: BufRead, W: Write>(
    recipe: &Recipe,
    console: &mut Console<R, W>,
) -> Result<(), SessionError> {
    console.write_line("")?;
    console.write_line("### Selected recipe ###")?;
    console.write_block(&recipe.render_summary())?;
    console.write_line("")?;
    console.write_line("Ingredients:")?;
    console.write_block(&recipe.render_ingredient_list())?;
    console.write_line("")?;
    console.write_line("Instructions:")?;
    console.write_block(&recipe.render_step_instructions())
}
