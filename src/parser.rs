use crate::category::Category;
use thiserror::Error;

pub const SEPARATOR: &str = ", ";

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Entry {
    pub category: Category,
    pub quantity: i64,
}

/// Why a line was not counted.
#[derive(Debug, PartialEq, Error)]
pub enum LineError {
    #[error("expected \"<material>, <quantity>\"")]
    MalformedStructure,
    #[error("quantity {0:?} is not an integer")]
    NonNumericQuantity(String),
    #[error("unknown category {0:?}")]
    UnknownCategory(String),
}

/// Splits text into lines. LF, CR, CRLF, VT, FF, NEL, LS and PS each end a
/// line; a trailing terminator leaves a final empty line, and empty text is
/// one empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            '\r' => {
                lines.push(&text[start..i]);
                start = i + 1;
                if let Some((_, '\n')) = chars.peek() {
                    chars.next();
                    start += 1;
                }
            }
            '\n' | '\u{0b}' | '\u{0c}' | '\u{85}' | '\u{2028}' | '\u{2029}' => {
                lines.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    lines.push(&text[start..]);
    lines
}

pub fn parse_line(line: &str) -> Result<Entry, LineError> {
    let parts: Vec<&str> = line.split(SEPARATOR).collect();
    let (name, quantity) = match parts.as_slice() {
        [name, quantity] => (*name, *quantity),
        _ => return Err(LineError::MalformedStructure),
    };

    let quantity = quantity
        .parse::<i64>()
        .map_err(|_| LineError::NonNumericQuantity(quantity.to_owned()))?;
    let category =
        Category::from_name(name).ok_or_else(|| LineError::UnknownCategory(name.to_owned()))?;

    Ok(Entry { category, quantity })
}
