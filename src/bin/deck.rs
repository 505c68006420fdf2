//! Prints a full 52-card deck as a listing and as a grid of card art.

use std::io::{self, Write};

use anyhow::Result;
use cardrs::{Deck, LayoutOptions, layout};
use log::{error, info};

fn run() -> Result<()> {
    let options = LayoutOptions::default();
    let deck = Deck::new(&options)?;
    info!("Printing {} cards, {} per row", deck.len(), options.row_width);

    let mut out = io::stdout().lock();
    out.write_all(layout::render_listing(&deck, &options).as_bytes())?;
    out.write_all(layout::render_art_grid(&deck, &options).as_bytes())?;
    out.flush()?;

    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}
