//! Interactive console sessions.
//!
//! The top-level [`run`] loop hands the catalog to one session at a time.
//! Each session owns the console until it reaches its terminal state, so the
//! catalog never needs any synchronization.

use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::catalog::Catalog;

pub mod admin;
pub mod browse;
mod console;

pub use console::Console;

pub(crate) const RETURN_NOTICE: &str = "Returning to the main menu.";

/// Errors raised by the console transport.
///
/// Invalid user input is never an error; it is reported on the console and
/// the user is prompted again.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Console I/O failed: {0}")]
    IoError(#[from] std::io::Error),
}

/// Roles offered by the top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Administrator,
    HomeCook,
    Quit,
}

impl Role {
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "1" => Some(Role::Administrator),
            "2" => Some(Role::HomeCook),
            "3" => Some(Role::Quit),
            _ => None,
        }
    }
}

/// Runs the role selection menu until the user quits or input runs out.
pub fn run<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    console: &mut Console<R, W>,
) -> Result<(), SessionError> {
    loop {
        console.write_line("")?;
        console.write_line("### Recipe book ###")?;
        console.write_line("")?;
        console.write_line("Welcome! Choose a user:")?;
        console.write_line("1. Administrator")?;
        console.write_line("2. Home cook")?;
        console.write_line("3. Quit")?;

        let Some(token) = console.prompt("Enter your choice: ")? else {
            break;
        };

        match Role::parse(&token) {
            Some(Role::Administrator) => {
                debug!("entering admin session");
                admin::run(catalog, console)?;
            }
            Some(Role::HomeCook) => {
                debug!("entering browse session");
                browse::run(catalog, console)?;
            }
            Some(Role::Quit) => break,
            None => console.write_line("Invalid choice. Please try again.")?,
        }
    }

    console.write_line("Closing the recipe book. Thank you!")
}

/// Writes the numbered catalog listing, one recipe per line.
pub(crate) fn print_listing<R: BufRead, W: Write>(
    catalog: &Catalog,
    console: &mut Console<R, W>,
) -> Result<(), SessionError> {
    for entry in catalog.list_all() {
        console.write_line(&format!("{}. {}", entry.index, entry.name))?;
    }
    Ok(())
}
