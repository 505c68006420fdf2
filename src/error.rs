//! Error types for card operations.

use thiserror::Error;

use crate::card::Suit;

/// Errors that can occur when building, mutating, or parsing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside `1..=13`.
    #[error("invalid rank {0}, expected 1 to 13")]
    InvalidRank(u8),
    /// Character is not one of the four suit glyphs.
    #[error("invalid suit {0:?}, expected one of ♥ ♦ ♣ ♠")]
    InvalidSuit(char),
    /// Copy requested from an absent card.
    #[error("no source card to copy from")]
    NullSource,
    /// Text is not in the `"<rank> <suit>"` form.
    #[error("malformed card text")]
    Malformed,
    /// A deck suit order names the same suit twice.
    #[error("suit {0:?} appears more than once in the suit order")]
    DuplicateSuit(Suit),
}
