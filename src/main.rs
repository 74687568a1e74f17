//! Piece table dump (default binary).
//!
//! Prints every rotation of the standard tetrominoes, or of one with
//! `--kind`, as text grids or JSON. See [`tetris_pieces::dump`] for options.

use std::io::Write;

use anyhow::Result;

use tetris_pieces::core::PieceSet;
use tetris_pieces::dump::{self, DumpConfig};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match DumpConfig::from_env().with_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[tetris-pieces] {}", e);
            std::process::exit(2);
        }
    };

    let out = dump::render(PieceSet::shared(), &config)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
