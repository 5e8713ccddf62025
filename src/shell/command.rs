//! Menu choice definitions
//!
//! Maps menu selector tokens to actions.

/// One entry of the numbered menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add a book (prompts for title, author, year)
    Add,

    /// Remove a book by id
    Remove,

    /// Search by title, author, or year
    Search,

    /// Display all books
    Display,

    /// Change a book's status
    ChangeStatus,

    /// Leave the shell
    Exit,
}

impl MenuChoice {
    /// All choices, in menu order
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Add,
        MenuChoice::Remove,
        MenuChoice::Search,
        MenuChoice::Display,
        MenuChoice::ChangeStatus,
        MenuChoice::Exit,
    ];

    /// Parse a selector token ("1" through "6"); `None` for anything else
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::Remove),
            "3" => Some(MenuChoice::Search),
            "4" => Some(MenuChoice::Display),
            "5" => Some(MenuChoice::ChangeStatus),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    /// The selector token shown in the menu
    pub fn selector(self) -> &'static str {
        match self {
            MenuChoice::Add => "1",
            MenuChoice::Remove => "2",
            MenuChoice::Search => "3",
            MenuChoice::Display => "4",
            MenuChoice::ChangeStatus => "5",
            MenuChoice::Exit => "6",
        }
    }

    /// The human-readable menu label
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add a book",
            MenuChoice::Remove => "Remove a book",
            MenuChoice::Search => "Find a book",
            MenuChoice::Display => "Show all books",
            MenuChoice::ChangeStatus => "Change a book's status",
            MenuChoice::Exit => "Exit",
        }
    }
}
