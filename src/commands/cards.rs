use std::path::Path;

use anyhow::Context;
use card_table_forge::output::{self, Sink};

pub fn run(image: &Path, out: Option<&Path>, layout: Option<&Path>, jsonl: bool) -> anyhow::Result<()> {
    let sink = Sink::from_arg(out);
    let res = extract(image, layout, jsonl, &sink);
    if res.is_err() {
        sink.discard();
    }
    res
}

fn extract(image: &Path, layout: Option<&Path>, jsonl: bool, sink: &Sink) -> anyhow::Result<()> {
    let (mut game, layout) = super::open(image, layout)?;
    let cards = card_table_forge::read_cards(&mut game, &layout).context("Unable to extract the card table")?;
    drop(game);

    let rendered = output::render(&cards, super::format(jsonl))?;
    sink.write(&rendered).context("Unable to write the card table")?;

    if let Sink::File(path) = sink {
        log::info!("[+] {} cards written to {}", cards.len(), path.display());
    }
    Ok(())
}
