//! Reference host front-end for terminals

pub mod terminal;

pub use terminal::{AutoStartInput, TerminalRenderer};
