use std::path::Path;

use tracing::warn;

use crate::core::compound::{Compound, StockEntry};
use crate::parsing::ParseError;
use crate::utils::validation::{is_at_record_limit, parse_retention_time};

const COMPOUND_HEADERS: &[&str] = &["name", "compound", "feature", "molecule"];
const INVENTORY_HEADERS: &[&str] = &["name", "molecule", "compound"];

/// Parse a compound list file with columns: name, [retention time]
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_compound_file(path: &Path, delimiter: char) -> Result<Vec<Compound>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_compound_text(&content, delimiter)
}

/// Parse compound list text with columns: name, [retention time]
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a line has an empty name,
/// `ParseError::InvalidValue` if a retention time is not a finite number, or
/// `ParseError::TooManyRecords` if the limit is exceeded.
pub fn parse_compound_text(text: &str, delimiter: char) -> Result<Vec<Compound>, ParseError> {
    let mut compounds = Vec::new();

    for (line_num, fields) in data_lines(text, delimiter, COMPOUND_HEADERS) {
        let name = required_name(&fields, line_num)?;

        let retention_time = match fields.get(1) {
            Some(field) => parse_retention_time(field).map_err(|source| {
                ParseError::InvalidValue {
                    line: line_num,
                    source,
                }
            })?,
            None => None,
        };

        if fields.len() > 2 {
            warn!("Ignoring extra columns on line {line_num}");
        }

        if is_at_record_limit(compounds.len()) {
            return Err(ParseError::TooManyRecords { line: line_num });
        }

        compounds.push(Compound {
            name,
            retention_time,
        });
    }

    Ok(compounds)
}

/// Parse an inventory file with columns: name, location
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_inventory_file(path: &Path, delimiter: char) -> Result<Vec<StockEntry>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_inventory_text(&content, delimiter)
}

/// Parse inventory text with columns: name, location
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a line has fewer than 2 fields or an
/// empty name, or `ParseError::TooManyRecords` if the limit is exceeded.
pub fn parse_inventory_text(text: &str, delimiter: char) -> Result<Vec<StockEntry>, ParseError> {
    let mut entries = Vec::new();

    for (line_num, fields) in data_lines(text, delimiter, INVENTORY_HEADERS) {
        if fields.len() < 2 {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has fewer than 2 fields"
            )));
        }

        let name = required_name(&fields, line_num)?;

        if is_at_record_limit(entries.len()) {
            return Err(ParseError::TooManyRecords { line: line_num });
        }

        entries.push(StockEntry {
            name,
            location: fields[1].to_string(),
        });
    }

    Ok(entries)
}

/// Parse a molecule list file: one name per line
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::TooManyRecords` if the limit is exceeded.
pub fn parse_name_list_file(path: &Path) -> Result<Vec<Compound>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_name_list_text(&content)
}

/// Parse molecule list text: one name per line.
///
/// Each trimmed line is taken whole as a name, commas included, so
/// `1,2-Dichloroethane` stays one molecule. Blank lines and `#` comments are
/// skipped; there is no header detection.
///
/// # Errors
///
/// Returns `ParseError::TooManyRecords` if the limit is exceeded.
pub fn parse_name_list_text(text: &str) -> Result<Vec<Compound>, ParseError> {
    let mut names = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if is_at_record_limit(names.len()) {
            return Err(ParseError::TooManyRecords { line: i + 1 });
        }

        names.push(Compound::new(line));
    }

    Ok(names)
}

/// Split text into trimmed fields, skipping blanks, comments and an optional header.
///
/// Line numbers are 1-based.
fn data_lines<'t>(
    text: &'t str,
    delimiter: char,
    header_words: &'t [&'t str],
) -> impl Iterator<Item = (usize, Vec<&'t str>)> + 't {
    let mut first_data_line = true;

    text.lines()
        .enumerate()
        .filter_map(move |(i, line)| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }

            let fields: Vec<&str> = line.split(delimiter).map(str::trim).collect();

            // Check if first non-empty/non-comment line is a header
            if first_data_line {
                first_data_line = false;
                let first = fields.first().map(|s| s.to_lowercase()).unwrap_or_default();
                if header_words.contains(&first.as_str()) {
                    return None;
                }
            }

            Some((i + 1, fields))
        })
}

fn required_name(fields: &[&str], line_num: usize) -> Result<String, ParseError> {
    match fields.first() {
        Some(name) if !name.is_empty() => Ok((*name).to_string()),
        _ => Err(ParseError::InvalidFormat(format!(
            "Line {line_num} has an empty name"
        ))),
    }
}
