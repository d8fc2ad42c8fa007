use std::fmt;

/// Failure reported by the table builder.
///
/// Mirrors the shape of [`crate`]'s ambient error convention (a plain tagged
/// enum, `Debug`+`Display`, no panics) rather than pulling in `thiserror`:
/// the core has no opinion on how a caller wires its own error type, so it
/// only needs to compose cleanly with `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// A codeword length exceeded `MAX_CODE_LENGTH`.
    InvalidLength { symbol: usize, length: u8 },
    /// More symbols were supplied than the table's fixed capacity allows.
    TooManySymbols { supplied: usize, capacity: usize },
    /// `strict` mode only: the length table's Kraft sum exceeds 1.
    OverSubscribed,
    /// `strict` mode only: the length table's Kraft sum is less than 1 and
    /// isn't one of the two tolerated "incomplete" shapes (empty code, or a
    /// single length-1 symbol).
    Incomplete,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { symbol, length } => write!(
                f,
                "codeword length {length} for symbol {symbol} exceeds MAX_CODE_LENGTH"
            ),
            Self::TooManySymbols { supplied, capacity } => write!(
                f,
                "{supplied} symbols supplied but table capacity is {capacity}"
            ),
            Self::OverSubscribed => write!(f, "length table is over-subscribed (Kraft sum > 1)"),
            Self::Incomplete => write!(f, "length table is incomplete (Kraft sum < 1)"),
        }
    }
}

impl std::error::Error for BuildError {}
