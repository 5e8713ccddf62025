//! Interactive session
//!
//! Runs the menu loop: print menu, read a selector, dispatch to the
//! matching store operation, print a one-line confirmation or result.

use std::io::{BufRead, Write};

use crate::error::{Result, ShelfError};
use crate::store::{SearchQuery, Store};

use super::MenuChoice;

/// An interactive shell session over a store
///
/// Generic over its input/output so tests can drive it with in-memory
/// buffers. Non-numeric input where an id or year is expected propagates
/// as [`ShelfError::InvalidInput`]; how that is surfaced is up to the
/// caller (the `bookshelf` binary reports it and exits nonzero).
pub struct Session<R, W> {
    store: Store,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: Store, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run the menu loop until the exit choice or end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let token = match self.read_line("Choose an option: ")? {
                Some(token) => token,
                None => return Ok(()), // end of input, same as exit
            };

            match MenuChoice::parse(&token) {
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting.")?;
                    return Ok(());
                }
                Some(choice) => self.dispatch(choice)?,
                None => {
                    writeln!(self.output, "Invalid choice. Please select again.")?;
                }
            }
        }
    }

    /// Execute a single menu choice
    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::Add => self.handle_add(),
            MenuChoice::Remove => self.handle_remove(),
            MenuChoice::Search => self.handle_search(),
            MenuChoice::Display => self.handle_display(),
            MenuChoice::ChangeStatus => self.handle_change_status(),
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting.")?;
                Ok(())
            }
        }
    }

    /// The store this session drives
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Consume the session, returning the store
    pub fn into_store(self) -> Store {
        self.store
    }

    // =========================================================================
    // Menu Actions
    // =========================================================================

    fn handle_add(&mut self) -> Result<()> {
        let title = self.read_line_required("Enter the book title: ")?;
        let author = self.read_line_required("Enter the book author: ")?;
        let year = parse_number::<i32>(&self.read_line_required("Enter the publication year: ")?, "year")?;

        let record = self.store.add(title, author, year)?;
        writeln!(self.output, "Book '{}' added with id {}", record.title, record.id)?;
        Ok(())
    }

    fn handle_remove(&mut self) -> Result<()> {
        let id = parse_number::<u64>(
            &self.read_line_required("Enter the id of the book to remove: ")?,
            "id",
        )?;

        if self.store.remove(id)? {
            writeln!(self.output, "Book with id {} removed", id)?;
        } else {
            writeln!(self.output, "Book with id {} not found", id)?;
        }
        Ok(())
    }

    fn handle_search(&mut self) -> Result<()> {
        let criterion = self
            .read_line_required("Search by title, author or year? ")?
            .to_lowercase();

        let query = match criterion.trim() {
            "title" => SearchQuery::by_title(self.read_line_required("Enter the book title: ")?),
            "author" => SearchQuery::by_author(self.read_line_required("Enter the book author: ")?),
            "year" => SearchQuery::by_year(parse_number::<i32>(
                &self.read_line_required("Enter the publication year: ")?,
                "year",
            )?),
            _ => {
                writeln!(self.output, "Unknown search criterion.")?;
                return Ok(());
            }
        };

        let results = self.store.search(&query);
        if results.is_empty() {
            writeln!(self.output, "No books found.")?;
        }
        for record in results {
            writeln!(self.output, "{}", record)?;
        }
        Ok(())
    }

    fn handle_display(&mut self) -> Result<()> {
        if self.store.is_empty() {
            writeln!(self.output, "No books in the library.")?;
        }
        for record in self.store.list() {
            writeln!(self.output, "{}", record)?;
        }
        Ok(())
    }

    fn handle_change_status(&mut self) -> Result<()> {
        let id = parse_number::<u64>(&self.read_line_required("Enter the book id: ")?, "id")?;
        let status = self.read_line_required("Enter the new status (available/checked out): ")?;

        if self.store.change_status(id, status.clone())? {
            writeln!(self.output, "Status of book {} changed to '{}'", id, status)?;
        } else {
            writeln!(self.output, "Book with id {} not found", id)?;
        }
        Ok(())
    }

    // =========================================================================
    // Prompting Helpers
    // =========================================================================

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Menu:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.selector(), choice.label())?;
        }
        Ok(())
    }

    /// Prompt and read one line; `None` at end of input
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    /// Prompt and read one line, treating end of input as an input error
    fn read_line_required(&mut self, prompt: &str) -> Result<String> {
        self.read_line(prompt)?
            .ok_or_else(|| ShelfError::InvalidInput("unexpected end of input".to_string()))
    }
}

/// Coerce a text field to a number, naming the field on failure
fn parse_number<T: std::str::FromStr>(text: &str, field: &str) -> Result<T> {
    text.trim()
        .parse()
        .map_err(|_| ShelfError::InvalidInput(format!("expected a number for {}, got '{}'", field, text.trim())))
}
