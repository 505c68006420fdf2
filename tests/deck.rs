//! Deck and layout integration tests.

use std::collections::HashSet;

use cardrs::{Card, DECK_SIZE, Deck, LayoutOptions, Suit, layout};

#[test]
fn deck_holds_every_card_once() {
    let deck = Deck::default();
    assert_eq!(deck.len(), DECK_SIZE);
    assert!(!deck.is_empty());

    let unique: HashSet<_> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for suit in Suit::ALL {
        for rank in 1..=13 {
            assert!(deck.contains(&Card::new(rank, suit).unwrap()));
        }
    }
}

#[test]
fn deck_is_suit_major_rank_ascending() {
    let deck = Deck::default();
    let order = LayoutOptions::default().suit_order;

    for (i, card) in deck.iter().enumerate() {
        assert_eq!(card.suit(), order[i / 13]);
        assert_eq!(usize::from(card.rank()), i % 13 + 1);
    }
}

#[test]
fn custom_suit_order() {
    let options = LayoutOptions::default().with_suit_order(Suit::ALL);
    let cards: Vec<Card> = Deck::new(&options).unwrap().into_iter().collect();

    assert_eq!(cards[0], Card::default());
    assert_eq!(cards[51], Card::new(13, Suit::Spades).unwrap());
}

#[test]
fn listing_has_four_rows_of_thirteen() {
    let listing = layout::render_listing(&Deck::default(), &LayoutOptions::default());
    let lines: Vec<_> = listing.lines().collect();

    assert_eq!(lines.len(), 7);
    for (i, line) in lines.iter().enumerate() {
        if i % 2 == 1 {
            assert!(line.is_empty());
        } else {
            assert_eq!(line.split_terminator('\t').count(), 13);
        }
    }
    assert!(lines[6].starts_with("A ♣\t"));
    assert!(lines[6].ends_with("K ♣\t"));
}

#[test]
fn art_grid_stacks_five_lines_per_row() {
    let grid = layout::render_art_grid(&Deck::default(), &LayoutOptions::default());
    let lines: Vec<_> = grid.lines().collect();

    assert_eq!(lines.len(), 20);
    assert_eq!(lines[0], "------- ".repeat(13));
    assert!(lines[2].starts_with("|  A  | |  2  | "));
    assert!(lines[2].contains("| 10  | |  J  | "));
    assert_eq!(lines[6], "|♥   ♥| ".repeat(13));
}
