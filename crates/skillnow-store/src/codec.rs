//! List-in-a-cell codec for `skills` and `required_skills`.
//!
//! An ordered list of tokens is stored as one CSV cell with the tokens joined
//! by [`LIST_DELIMITER`]. There is no escaping: a token that itself contains
//! the delimiter comes back as several tokens after a save/load cycle. This is
//! a known limitation of the table format and is left as is.

/// Separator between tokens inside one cell.
pub const LIST_DELIMITER: char = ',';

/// Join tokens into a single cell value.
#[must_use]
pub fn encode_list<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut cell = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            cell.push(LIST_DELIMITER);
        }
        cell.push_str(token.as_ref());
    }
    cell
}

/// Split a cell value into tokens.
///
/// Each token is trimmed; empty tokens are dropped, so an empty or
/// whitespace-only cell yields an empty list.
#[must_use]
pub fn decode_list(cell: &str) -> Vec<String> {
    cell.split(LIST_DELIMITER)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Put tokens into the exact shape a save/load cycle would give them.
///
/// Used on request input so that a record returned from a write equals the
/// record read back later.
#[must_use]
pub fn normalize_list<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    decode_list(&encode_list(tokens))
}
