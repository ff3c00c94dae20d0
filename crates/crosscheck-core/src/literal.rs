use serde::Serialize;
use std::fmt;

///
/// SqlLiteral
///
/// Literal token embedded verbatim into generated SQL.
///
/// Bare numerals render unmodified; quoted tokens render wrapped in single
/// quotes (`'NaN'`, `'+Infinity'`). Keeping the two shapes distinct means
/// downstream generators never have to guess whether a token was already
/// quoted.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum SqlLiteral {
    Numeral(&'static str),
    Quoted(&'static str),
}

impl SqlLiteral {
    /// Raw token with no quoting applied.
    #[must_use]
    pub const fn raw(self) -> &'static str {
        match self {
            Self::Numeral(token) | Self::Quoted(token) => token,
        }
    }
}

impl fmt::Display for SqlLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeral(token) => write!(f, "{token}"),
            Self::Quoted(token) => write!(f, "'{token}'"),
        }
    }
}
