//! Turn a pasted player list or a CSV file into player drafts.
//!
//! Nothing here touches the roster; callers show the drafts and add them on confirmation.

use crate::models::{Gender, NewPlayer};
use serde::Deserialize;

/// Errors while reading an imported roster file.
#[derive(Debug)]
pub enum ImportError {
    Csv(csv::Error),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Csv(e) => write!(f, "Could not read CSV: {}", e),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Csv(e) => Some(e),
        }
    }
}

impl From<csv::Error> for ImportError {
    fn from(e: csv::Error) -> Self {
        ImportError::Csv(e)
    }
}

fn is_zero_width(c: char) -> bool {
    matches!(c, '\u{200B}'..='\u{200D}' | '\u{FEFF}')
}

/// Header lines of the weekly list mention the sport.
fn is_list_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.contains("vôlei") || lower.contains("volei")
}

/// Strip a leading "12 " style ordinal. Digits must be followed by whitespace.
fn strip_ordinal(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() || !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim())
}

fn name_from_line(line: &str) -> String {
    let name = if let Some(rest) = strip_ordinal(line) {
        rest
    } else if let Some(rest) = line.strip_prefix('-') {
        rest.trim()
    } else if let Some(rest) = line.strip_prefix('.') {
        rest.trim()
    } else {
        line
    };
    name.chars().filter(|c| !is_zero_width(*c)).collect::<String>().trim().to_string()
}

/// Parse a pasted list (one player per line, e.g. copied from a group chat).
///
/// Lines mentioning the sport and lines under 2 characters are skipped. A leading ordinal
/// (`"3 Ana"`), dash or dot is removed, as are zero-width characters. Every name becomes a
/// male, non-seeded draft; the caller adjusts tags before adding.
pub fn parse_player_list(text: &str) -> Vec<NewPlayer> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !is_list_header(line) && line.chars().count() >= 2)
        .map(name_from_line)
        .filter(|name| name.chars().count() > 1)
        .map(NewPlayer::named)
        .collect()
}

#[derive(Deserialize)]
struct CsvRow {
    name: String,
    #[serde(default)]
    gender: Option<Gender>,
    #[serde(default)]
    seeded: Option<bool>,
}

/// Parse a CSV roster with header `name,gender,seeded`.
///
/// `gender` is `M` or `F` (default `M`), `seeded` is `true`/`false` (default `false`).
/// Rows with a blank name are skipped.
pub fn parse_player_csv<R: std::io::Read>(reader: R) -> Result<Vec<NewPlayer>, ImportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut drafts = Vec::new();
    for row in rdr.deserialize::<CsvRow>() {
        let row = row?;
        if row.name.trim().is_empty() {
            continue;
        }
        drafts.push(NewPlayer {
            name: row.name.trim().to_string(),
            gender: row.gender.unwrap_or_default(),
            seeded: row.seeded.unwrap_or(false),
        });
    }
    Ok(drafts)
}
