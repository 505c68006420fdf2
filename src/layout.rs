//! Text layouts for printing a whole deck.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{ART_HEIGHT, Card};
use crate::deck::Deck;
use crate::options::LayoutOptions;

/// Renders the deck as rows of compact cards.
///
/// Each card is followed by a tab, each row ends with a newline, and rows are
/// separated by a blank line.
///
/// ```
/// use cardrs::{Deck, LayoutOptions, layout};
///
/// let listing = layout::render_listing(&Deck::default(), &LayoutOptions::default());
/// assert!(listing.starts_with("A ♦\t2 ♦\t"));
/// assert_eq!(listing.lines().count(), 7);
/// ```
#[must_use]
pub fn render_listing(deck: &Deck, options: &LayoutOptions) -> String {
    let mut out = String::new();

    for (row_index, row) in deck.cards().chunks(options.row_width.max(1)).enumerate() {
        if row_index > 0 {
            out.push('\n');
        }

        for card in row {
            out.push_str(&card.render_compact());
            out.push('\t');
        }
        out.push('\n');
    }

    out
}

/// Renders the deck as rows of card art placed side by side.
///
/// Every card in a row contributes its art line followed by one space to each
/// of the five output lines of that row.
#[must_use]
pub fn render_art_grid(deck: &Deck, options: &LayoutOptions) -> String {
    let mut out = String::new();

    for row in deck.cards().chunks(options.row_width.max(1)) {
        let arts: Vec<_> = row.iter().map(Card::art_lines).collect();

        for line in 0..ART_HEIGHT {
            for art in &arts {
                out.push_str(&art[line]);
                out.push(' ');
            }
            out.push('\n');
        }
    }

    out
}
