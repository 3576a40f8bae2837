pub mod term;
pub mod views;

pub use term::{run_browse, TerminalPort};
