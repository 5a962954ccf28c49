//! Card and deck table extraction for Digimon Digital Card Battle disc images.
//!
//! The pipeline runs strictly forward: open a [`GameImage`], locate a table
//! with a [`Layout`], decode its records and hand the table to [`output`].

pub mod card;
pub mod deck;
pub mod error;
pub mod image;
pub mod layout;
pub mod output;
pub mod text;

use std::io::{Read, Seek};
use std::path::Path;

pub use card::{CardRecord, CardTable};
pub use deck::{DeckRecord, DeckTable};
pub use error::{ExtractError, Result};
pub use image::GameImage;
pub use layout::Layout;

/// Locates and decodes the card table.
pub fn read_cards<R: Read + Seek>(image: &mut GameImage<R>, layout: &Layout) -> Result<CardTable> {
    let location = card::locate(image, layout)?;
    card::build(image, &location)
}

/// Locates and decodes the deck table.
pub fn read_decks<R: Read + Seek>(image: &mut GameImage<R>, layout: &Layout) -> Result<DeckTable> {
    let location = deck::locate(image, layout)?;
    deck::build(image, &location)
}

/// Opens the image at `path` and extracts its card table.
pub fn extract_cards(path: impl AsRef<Path>, layout: &Layout) -> Result<CardTable> {
    let mut image = GameImage::open(path)?;
    read_cards(&mut image, layout)
}
