//! The comma-separated text form of a container.
//!
//! Decimal integers joined by `,` in logical order: no brackets, no trailing
//! delimiter, and the empty string for an empty container. External tools
//! parse this, so don't change it.

use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

pub const DELIMITER: char = ',';

/// Write `values` in serialized form.
pub fn write_joined(
    f: &mut impl fmt::Write,
    values: impl IntoIterator<Item = i32>,
) -> fmt::Result {
    for (i, value) in values.into_iter().enumerate() {
        if i != 0 {
            f.write_char(DELIMITER)?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid element {token:?} at position {index}")]
    InvalidElement {
        index: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parse serialized text back into values, in the same order.
///
/// Whitespace around each element is ignored. Blank input is an empty
/// container.
pub fn parse(text: &str) -> Result<Vec<i32>, ParseError> {
    if text.trim().is_empty() {
        return Ok(vec![]);
    }

    text.split(DELIMITER)
        .enumerate()
        .map(|(index, token)| {
            token
                .trim()
                .parse()
                .map_err(|source| ParseError::InvalidElement {
                    index,
                    token: token.to_owned(),
                    source,
                })
        })
        .collect()
}
