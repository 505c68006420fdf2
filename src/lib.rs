//! A playing card type with validated mutation and text rendering.
//!
//! A [`Card`] always holds a rank in `1..=13` and one of the four [`Suit`]s.
//! Constructors and setters return a [`CardError`] instead of accepting bad
//! input, and a card renders either in a compact form (`"A ♥"`) or as a
//! five-line ASCII box. A [`Deck`] lays out all 52 cards and the [`layout`]
//! module prints a deck as a listing or as a grid of card art.
//!
//! # Example
//!
//! ```
//! use cardrs::{Card, Suit};
//!
//! let mut card = Card::new(10, Suit::Spades)?;
//! assert_eq!(card.render_compact(), "10 ♠");
//!
//! assert!(card.set_rank(0).is_err());
//! assert_eq!(card.rank(), 10);
//! # Ok::<(), cardrs::CardError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod layout;
pub mod options;

// Re-export main types
pub use card::{ART_HEIGHT, Card, DECK_SIZE, RANKS_PER_SUIT, Suit};
pub use deck::Deck;
pub use error::CardError;
pub use options::LayoutOptions;
