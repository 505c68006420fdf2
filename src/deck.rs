//! The ordered 52-card deck.

use alloc::vec::Vec;
use core::slice;

use crate::card::{Card, Suit};
use crate::error::CardError;
use crate::options::LayoutOptions;

/// An ordered deck holding one card for every rank and suit.
///
/// Cards are laid out suit by suit, ranks ascending within each suit.
///
/// ```
/// use cardrs::{DECK_SIZE, Deck};
///
/// let deck = Deck::default();
/// assert_eq!(deck.len(), DECK_SIZE);
/// assert_eq!(deck.cards()[0].to_string(), "A ♦");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::with_order(LayoutOptions::default().suit_order)
    }
}

impl Deck {
    /// Builds a deck in the suit order given by `options`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::DuplicateSuit`] if the suit order repeats a suit.
    pub fn new(options: &LayoutOptions) -> Result<Self, CardError> {
        let order = options.suit_order;
        for (i, suit) in order.iter().enumerate() {
            if order[..i].contains(suit) {
                return Err(CardError::DuplicateSuit(*suit));
            }
        }

        Ok(Self::with_order(order))
    }

    fn with_order(order: [Suit; 4]) -> Self {
        let cards: Vec<Card> = order
            .into_iter()
            .flat_map(|suit| {
                (Card::MIN_RANK..=Card::MAX_RANK)
                    .map(move |rank| Card::from_valid_rank(rank, suit))
            })
            .collect();

        log::debug!("built deck of {} cards in order {order:?}", cards.len());

        Self { cards }
    }

    /// Returns the cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns true if the deck holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Iterates the cards in deck order.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
