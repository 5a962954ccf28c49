use std::path::PathBuf;

use clap::{Parser, Subcommand};

const EXAMPLES: &str = r#"
EXAMPLES:

  1. CARDS
     Dump the card table of a raw disc image to cards.json:
     card-table-forge cards --image "Digimon Digital Card Battle.bin" --out cards.json

     Or, one card per line on stdout:
     card-table-forge cards -i dcb.bin --jsonl

  2. DECKS
     Dump the preset opponent decks:
     card-table-forge decks -i dcb.bin -o decks.json

  3. ALL
     Write card_table.json and deck_table.json into ./game:
     card-table-forge all -i dcb.bin

     Another game revision, described by a layout file:
     card-table-forge all -i dcb-jp.bin -o game-jp -l layout-jp.json

  Set RUST_LOG=debug (or trace) for more detail on stderr.
"#;

#[derive(Parser, Debug)]
#[command(name = "CardTableForge")]
#[command(version)]
#[command(about = "Extracts the card and deck tables of Digimon Digital Card Battle as JSON")]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extracts the card table
    Cards {
        /// Disc image (.bin MODE2/2352, or a 2048-byte sector .iso)
        #[arg(short, long)]
        image: PathBuf,
        /// Output file, stdout if omitted
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Layout file overriding the built-in table addresses
        #[arg(short, long)]
        layout: Option<PathBuf>,
        /// One JSON object per line instead of an array
        #[arg(long)]
        jsonl: bool,
    },
    /// Extracts the deck table
    Decks {
        /// Disc image (.bin MODE2/2352, or a 2048-byte sector .iso)
        #[arg(short, long)]
        image: PathBuf,
        /// Output file, stdout if omitted
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Layout file overriding the built-in table addresses
        #[arg(short, long)]
        layout: Option<PathBuf>,
        /// One JSON object per line instead of an array
        #[arg(long)]
        jsonl: bool,
    },
    /// Extracts both tables into a directory
    All {
        /// Disc image, must be a .bin
        #[arg(short, long)]
        image: PathBuf,
        /// Output directory
        #[arg(short, long, default_value = "game")]
        out: PathBuf,
        /// Layout file overriding the built-in table addresses
        #[arg(short, long)]
        layout: Option<PathBuf>,
    },
}
