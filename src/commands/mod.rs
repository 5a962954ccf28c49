pub mod all;
pub mod cards;
pub mod decks;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use card_table_forge::output::Format;
use card_table_forge::{GameImage, Layout};

/// Opens the image and resolves the layout every command starts from.
fn open(image: &Path, layout: Option<&Path>) -> anyhow::Result<(GameImage<BufReader<File>>, Layout)> {
    let layout = Layout::load_or_default(layout)?;
    let game = GameImage::open(image).with_context(|| format!("Unable to open {}", image.display()))?;
    log::info!("[*] Source: {} ({:?}, layout {})", image.display(), game.layout(), layout.version);
    Ok((game, layout))
}

fn format(jsonl: bool) -> Format {
    if jsonl {
        Format::Jsonl
    } else {
        Format::Json
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::fs;
    use std::path::{Path, PathBuf};

    pub const CARD_TABLE: usize = 0x10;
    pub const DECK_TABLE: usize = 0x400;
    /// Name of the single digivolve card, body offset 0.
    pub const CARD_NAME: usize = CARD_TABLE + 8 + 3;
    /// City byte of the single deck.
    pub const DECK_CITY: usize = DECK_TABLE + 8 + 0x6a;

    /// Scratch directory, emptied first.
    pub fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ctf-cmd-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Plain 2048-byte sector data: one digivolve card named "A", one deck named "Deck".
    pub fn image_bytes() -> Vec<u8> {
        let mut data = vec![0u8; 2 * 2048];
        data[CARD_TABLE..CARD_TABLE + 8].copy_from_slice(b"0ACD\x00\x00\x00\x01");
        // id 0, digivolve
        data[CARD_TABLE + 8 + 2] = 2;
        data[CARD_NAME] = b'A';
        data[CARD_NAME + 0x15..CARD_NAME + 0x18].copy_from_slice(&[0, 0, 5]);

        data[DECK_TABLE..DECK_TABLE + 8].copy_from_slice(b"30KD\x01\x00\x00\x00");
        data[DECK_TABLE + 8 + 0x3c..DECK_TABLE + 8 + 0x40].copy_from_slice(b"Deck");
        data
    }

    /// Writes `bytes` as `dcb.bin` and a matching layout file into `dir`.
    pub fn write_inputs(dir: &Path, bytes: &[u8]) -> (PathBuf, PathBuf) {
        let image = dir.join("dcb.bin");
        fs::write(&image, bytes).unwrap();

        let layout = dir.join("layout.json");
        fs::write(
            &layout,
            format!(
                r#"{{"version":"test","card_table":{{"address":{},"magic":"0ACD","max_size":4096}},
                   "deck_table":{{"address":{},"magic":"30KD","max_size":1024}}}}"#,
                CARD_TABLE, DECK_TABLE
            ),
        )
        .unwrap();
        (image, layout)
    }

    pub fn read_json(path: &Path) -> serde_json::Value {
        serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
    }

    pub fn card_json() -> serde_json::Value {
        serde_json::json!([{
            "id": 0,
            "card_type": "Digivolve",
            "name": "A",
            "effect": "DisregardSpecialityLevelDP",
            "effect_description": ["", "", "", ""]
        }])
    }

    pub fn deck_json() -> serde_json::Value {
        serde_json::json!([{
            "id": 0,
            "name": "Deck",
            "owner": "",
            "cards": vec![0u16; 30],
            "experience": 0,
            "city": null,
            "armor_evo": null,
            "battle_music": null,
            "polygon_music": null,
            "unknown_64": [0, 0, 0, 0],
            "unknown_6a": 0
        }])
    }
}
