//! Parsing of REPL input lines

use crate::catalog::ClassId;

/// A line entered at the catalog prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogCommand {
    List,
    Show(ClassId),
    Delete(ClassId),
    Create,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

/// A line entered while the image picker is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerInput {
    /// New query text; empty clears the search
    Text(String),
    More,
    /// 1-based index into the accumulated results
    Pick(usize),
    Retry,
    Skip,
    Invalid(String),
}

pub fn parse_catalog_command(line: &str) -> CatalogCommand {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return CatalogCommand::Empty;
    };
    let arg = parts.next();

    match (verb.to_ascii_lowercase().as_str(), arg) {
        ("list" | "ls", None) => CatalogCommand::List,
        ("create" | "new", None) => CatalogCommand::Create,
        ("help" | "?", None) => CatalogCommand::Help,
        ("quit" | "exit", None) => CatalogCommand::Quit,
        ("show" | "preview", Some(id)) => parse_id(id).map_or_else(CatalogCommand::Invalid, CatalogCommand::Show),
        ("delete" | "rm", Some(id)) => parse_id(id).map_or_else(CatalogCommand::Invalid, CatalogCommand::Delete),
        ("show" | "preview" | "delete" | "rm", None) => {
            CatalogCommand::Invalid(format!("'{verb}' needs a class id"))
        }
        _ => CatalogCommand::Invalid(format!("unknown command '{}'", line.trim())),
    }
}

pub fn parse_picker_input(line: &str) -> PickerInput {
    let Some(command) = line.trim().strip_prefix(':') else {
        return PickerInput::Text(line.trim().to_string());
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("more"), None) => PickerInput::More,
        (Some("retry"), None) => PickerInput::Retry,
        (Some("skip" | "close"), None) => PickerInput::Skip,
        (Some("pick"), Some(n)) => match n.parse::<usize>() {
            Ok(index) if index > 0 => PickerInput::Pick(index),
            _ => PickerInput::Invalid(format!("'{n}' is not a result number")),
        },
        _ => PickerInput::Invalid(format!("unknown picker command ':{command}'")),
    }
}

fn parse_id(raw: &str) -> Result<ClassId, String> {
    raw.trim_start_matches('#')
        .parse::<ClassId>()
        .map_err(|_| format!("'{raw}' is not a class id"))
}
