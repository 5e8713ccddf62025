//! Interactive shell boundary
//!
//! The numbered-menu loop, modeled as a dispatch table: a selector token
//! maps to a [`MenuChoice`], and a [`Session`] executes the choice against
//! the store over generic reader/writer capabilities. Nothing in here
//! touches stdin/stdout directly, so the whole boundary is testable with
//! in-memory buffers.

mod command;
mod session;

pub use command::MenuChoice;
pub use session::Session;
