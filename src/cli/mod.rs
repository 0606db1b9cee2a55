//! Line-oriented terminal front end
//!
//! `commands` parses input lines; `session` runs the catalog REPL and the
//! image picker on top of the library.

mod commands;
mod session;

pub use commands::{CatalogCommand, PickerInput, parse_catalog_command, parse_picker_input};
pub use session::Session;
