//! Interactive text interface for the inventory store.
//!
//! A thin IO wrapper: it collects user input, maps it onto store operations
//! and renders the results. No business logic lives here.

pub mod shell;

pub use shell::Shell;
