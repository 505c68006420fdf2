//! Card types with validated mutation and text rendering.

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Labels printed for ranks 1 through 13.
const RANK_LABELS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// Top and bottom border of the card art.
const ART_BORDER: &str = "-------";

/// Number of lines in the card art.
pub const ART_HEIGHT: usize = 5;

/// Number of ranks in each suit.
pub const RANKS_PER_SUIT: usize = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * RANKS_PER_SUIT;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the glyph printed for this suit.
    ///
    /// # Example
    ///
    /// ```
    /// use cardrs::Suit;
    ///
    /// assert_eq!(Suit::Clubs.glyph(), '♣');
    /// ```
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(glyph: char) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.glyph() == glyph)
            .ok_or(CardError::InvalidSuit(glyph))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A playing card.
///
/// The rank is stored as `1..=13` (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
/// Fields are private so a card can only hold a valid rank and suit.
///
/// `{}` formats the compact form and `{:#}` the card art:
///
/// ```
/// use cardrs::{Card, Suit};
///
/// let card = Card::new(12, Suit::Hearts)?;
/// assert_eq!(format!("{card}"), "Q ♥");
/// assert_eq!(format!("{card:#}").lines().count(), 5);
/// # Ok::<(), cardrs::CardError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Default for Card {
    fn default() -> Self {
        Self {
            rank: Self::DEFAULT_RANK,
            suit: Self::DEFAULT_SUIT,
        }
    }
}

impl Card {
    /// Lowest valid rank (Ace).
    pub const MIN_RANK: u8 = 1;
    /// Highest valid rank (King).
    pub const MAX_RANK: u8 = 13;
    /// Rank of the default card.
    pub const DEFAULT_RANK: u8 = 1;
    /// Suit of the default card.
    pub const DEFAULT_SUIT: Suit = Suit::Hearts;

    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `1..=13`.
    ///
    /// # Example
    ///
    /// ```
    /// use cardrs::{Card, CardError, Suit};
    ///
    /// assert!(Card::new(13, Suit::Spades).is_ok());
    /// assert_eq!(Card::new(14, Suit::Spades), Err(CardError::InvalidRank(14)));
    /// ```
    pub fn new(rank: u8, suit: Suit) -> Result<Self, CardError> {
        Ok(Self {
            rank: Self::check_rank(rank)?,
            suit,
        })
    }

    /// Builds a card from a rank already known to be in `1..=13`.
    pub(crate) const fn from_valid_rank(rank: u8, suit: Suit) -> Self {
        debug_assert!(rank >= Self::MIN_RANK && rank <= Self::MAX_RANK);
        Self { rank, suit }
    }

    /// Copies a card that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::NullSource`] if `source` is `None`.
    pub fn copy_from(source: Option<&Self>) -> Result<Self, CardError> {
        source.copied().ok_or(CardError::NullSource)
    }

    fn check_rank(rank: u8) -> Result<u8, CardError> {
        if (Self::MIN_RANK..=Self::MAX_RANK).contains(&rank) {
            Ok(rank)
        } else {
            log::trace!("rejected rank {rank}");
            Err(CardError::InvalidRank(rank))
        }
    }

    /// Sets the rank, leaving the card unchanged on failure.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `1..=13`.
    pub fn set_rank(&mut self, rank: u8) -> Result<(), CardError> {
        self.rank = Self::check_rank(rank)?;
        Ok(())
    }

    /// Sets the suit.
    pub const fn set_suit(&mut self, suit: Suit) {
        self.suit = suit;
    }

    /// Sets the suit from its glyph, leaving the card unchanged on failure.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] if `glyph` is not one of `♥ ♦ ♣ ♠`.
    pub fn set_suit_glyph(&mut self, glyph: char) -> Result<(), CardError> {
        self.suit = Suit::try_from(glyph).inspect_err(|_| {
            log::trace!("rejected suit glyph {glyph:?}");
        })?;
        Ok(())
    }

    /// Sets rank and suit together. Either both change or neither does.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `1..=13`.
    ///
    /// # Example
    ///
    /// ```
    /// use cardrs::{Card, Suit};
    ///
    /// let mut card = Card::default();
    /// assert!(card.set_all(0, Suit::Clubs).is_err());
    /// assert_eq!(card, Card::default());
    /// ```
    pub fn set_all(&mut self, rank: u8, suit: Suit) -> Result<(), CardError> {
        *self = Self::new(rank, suit)?;
        Ok(())
    }

    /// Returns the raw rank, `1..=13`.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank as printed on the card: `A`, `2`..`10`, `J`, `Q`, `K`.
    #[must_use]
    pub const fn display_rank(&self) -> &'static str {
        RANK_LABELS[(self.rank - Self::MIN_RANK) as usize]
    }

    /// Returns the compact form, for example `"A ♥"`.
    #[must_use]
    pub fn render_compact(&self) -> String {
        format!("{self}")
    }

    /// Returns the five lines of the card art, without line terminators.
    #[must_use]
    pub fn art_lines(&self) -> [String; ART_HEIGHT] {
        let suit = self.suit.glyph();
        let label = self.display_rank();
        // Two-digit ranks take one of the leading spaces.
        let pad = if label.len() > 1 { " " } else { "  " };
        let suits = format!("|{suit}   {suit}|");

        [
            String::from(ART_BORDER),
            suits.clone(),
            format!("|{pad}{label}  |"),
            suits,
            String::from(ART_BORDER),
        ]
    }

    /// Returns the card art as a single string with no trailing newline.
    ///
    /// # Example
    ///
    /// ```
    /// use cardrs::{Card, Suit};
    ///
    /// let art = Card::new(10, Suit::Spades)?.render_art();
    /// assert_eq!(art, "-------\n|♠   ♠|\n| 10  |\n|♠   ♠|\n-------");
    /// # Ok::<(), cardrs::CardError>(())
    /// ```
    #[must_use]
    pub fn render_art(&self) -> String {
        self.art_lines().join("\n")
    }
}

impl PartialEq<Option<Self>> for Card {
    fn eq(&self, other: &Option<Self>) -> bool {
        other.as_ref().is_some_and(|other| other == self)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.render_art())
        } else {
            write!(f, "{} {}", self.display_rank(), self.suit)
        }
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses the compact form, such as `"A ♦"` or `"10 ♠"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rank, suit) = s.trim().split_once(' ').ok_or(CardError::Malformed)?;

        let rank = match RANK_LABELS.iter().position(|label| *label == rank) {
            Some(index) => index as u8 + Self::MIN_RANK,
            // Plain decimal only, so "1" and "11" work but "+5" and "05" do not.
            None if !(rank.len() > 1 && rank.starts_with('0'))
                && rank.bytes().all(|b| b.is_ascii_digit()) =>
            {
                rank.parse::<u8>().map_err(|_| CardError::Malformed)?
            }
            None => return Err(CardError::Malformed),
        };

        let mut glyphs = suit.trim().chars();
        let suit = match (glyphs.next(), glyphs.next()) {
            (Some(glyph), None) => Suit::try_from(glyph)?,
            _ => return Err(CardError::Malformed),
        };

        Self::new(rank, suit)
    }
}
