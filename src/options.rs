//! Deck layout options.

use crate::card::{RANKS_PER_SUIT, Suit};

/// Configuration for building and printing a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardrs::{LayoutOptions, Suit};
///
/// let options = LayoutOptions::default()
///     .with_suit_order(Suit::ALL)
///     .with_row_width(4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Order in which suits are laid out in the deck.
    pub suit_order: [Suit; 4],
    /// Number of cards printed per row.
    pub row_width: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            suit_order: [Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs],
            row_width: RANKS_PER_SUIT,
        }
    }
}

impl LayoutOptions {
    /// Sets the suit order.
    ///
    /// # Example
    ///
    /// ```
    /// use cardrs::{LayoutOptions, Suit};
    ///
    /// let options = LayoutOptions::default().with_suit_order(Suit::ALL);
    /// assert_eq!(options.suit_order[0], Suit::Hearts);
    /// ```
    #[must_use]
    pub const fn with_suit_order(mut self, suit_order: [Suit; 4]) -> Self {
        self.suit_order = suit_order;
        self
    }

    /// Sets the number of cards per row, at least one.
    ///
    /// # Example
    ///
    /// ```
    /// use cardrs::LayoutOptions;
    ///
    /// assert_eq!(LayoutOptions::default().with_row_width(8).row_width, 8);
    /// assert_eq!(LayoutOptions::default().with_row_width(0).row_width, 1);
    /// ```
    #[must_use]
    pub const fn with_row_width(mut self, row_width: usize) -> Self {
        self.row_width = if row_width == 0 { 1 } else { row_width };
        self
    }
}
