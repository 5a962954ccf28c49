use std::fs;
use std::path::Path;

use anyhow::Context;
use card_table_forge::deck::dangling_cards;
use card_table_forge::output::{self, Format};

pub const CARD_TABLE_FILE: &str = "card_table.json";
pub const DECK_TABLE_FILE: &str = "deck_table.json";

fn is_bin(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext.eq_ignore_ascii_case("bin"))
}

/// Removes `stale` outputs when `res` failed.
fn or_discard<T>(res: anyhow::Result<T>, stale: &[&Path]) -> anyhow::Result<T> {
    if res.is_err() {
        stale.iter().for_each(|path| output::discard(path));
    }
    res
}

/// Writes the card table, then the deck table.
///
/// A failure removes every table not yet rewritten by this run. The card table
/// is written before the deck table is read, so it survives a bad deck table.
pub fn run(image: &Path, out_dir: &Path, layout: Option<&Path>) -> anyhow::Result<()> {
    log::info!("[*] Extracting all tables");
    anyhow::ensure!(is_bin(image), "Game file must be a .bin, got {}", image.display());

    let card_path = out_dir.join(CARD_TABLE_FILE);
    let deck_path = out_dir.join(DECK_TABLE_FILE);
    let both = [card_path.as_path(), deck_path.as_path()];
    let decks_only = [deck_path.as_path()];

    let (mut game, layout) = or_discard(super::open(image, layout), &both)?;
    let cards = or_discard(
        card_table_forge::read_cards(&mut game, &layout).context("Unable to extract the card table"),
        &both,
    )?;
    let card_json = or_discard(output::render(&cards, Format::Json).map_err(anyhow::Error::from), &both)?;

    fs::create_dir_all(out_dir).with_context(|| format!("Unable to create {}", out_dir.display()))?;
    or_discard(
        output::write_atomic(&card_path, &card_json)
            .with_context(|| format!("Unable to write {}", card_path.display())),
        &both,
    )?;
    log::info!("[+] {} cards written to {}", cards.len(), card_path.display());

    let decks = or_discard(
        card_table_forge::read_decks(&mut game, &layout).context("Unable to extract the deck table"),
        &decks_only,
    )?;
    drop(game);

    for (deck, card) in dangling_cards(&decks, &cards) {
        log::warn!("Deck #{} references card {}, which does not exist", deck, card);
    }

    let deck_json = or_discard(output::render(&decks, Format::Json).map_err(anyhow::Error::from), &decks_only)?;
    or_discard(
        output::write_atomic(&deck_path, &deck_json)
            .with_context(|| format!("Unable to write {}", deck_path.display())),
        &decks_only,
    )?;

    log::info!("[+] {} decks written to {}", decks.len(), deck_path.display());
    Ok(())
}
