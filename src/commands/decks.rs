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
    let decks = card_table_forge::read_decks(&mut game, &layout).context("Unable to extract the deck table")?;
    drop(game);

    let rendered = output::render(&decks, super::format(jsonl))?;
    sink.write(&rendered).context("Unable to write the deck table")?;

    if let Sink::File(path) = sink {
        log::info!("[+] {} decks written to {}", decks.len(), path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::*;
    use std::fs;

    #[test]
    fn writes_deck_lines() {
        let dir = scratch("decks");
        let (image, layout) = write_inputs(&dir, &image_bytes());
        let out = dir.join("decks.jsonl");

        run(&image, Some(&out), Some(&layout), true).unwrap();
        let text = fs::read_to_string(&out).unwrap();
        let lines: Vec<serde_json::Value> = text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
        assert_eq!(serde_json::Value::Array(lines), deck_json());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn failed_run_removes_previous_output() {
        let dir = scratch("decks-stale");
        let out = dir.join("decks.json");
        fs::write(&out, deck_json().to_string()).unwrap();

        let mut bytes = image_bytes();
        bytes[DECK_CITY] = 99;
        let (image, layout) = write_inputs(&dir, &bytes);

        assert!(run(&image, Some(&out), Some(&layout), false).is_err());
        assert!(!out.exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
