//! Dump every rotation of the standard pieces as text or JSON.
//!
//! # Configuration
//!
//! - `TETRIS_PIECES_FORMAT`: `text` (default) or `json`
//! - `--format <text|json>` overrides the environment
//! - `--kind <i|j|l|s|z|o|t>` restricts the dump to one piece
//!
//! An optional leading `dump` subcommand is accepted and ignored.

use std::fmt::Write as _;

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::core::{PieceSet, PieceShape};
use crate::types::PieceKind;

pub const FORMAT_ENV: &str = "TETRIS_PIECES_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DumpFormat {
    #[default]
    Text,
    Json,
}

impl DumpFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(DumpFormat::Text),
            "json" => Some(DumpFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DumpConfig {
    pub kind: Option<PieceKind>,
    pub format: DumpFormat,
}

impl DumpConfig {
    /// Defaults from `TETRIS_PIECES_FORMAT`.
    pub fn from_env() -> Self {
        Self::with_env_format(std::env::var(FORMAT_ENV).ok().as_deref())
    }

    /// Defaults from an environment value; unknown values fall back to text.
    pub fn with_env_format(value: Option<&str>) -> Self {
        let format = match value {
            None => DumpFormat::Text,
            Some(v) if v.trim().is_empty() => DumpFormat::Text,
            Some(v) => DumpFormat::from_str(v).unwrap_or_else(|| {
                eprintln!(
                    "[tetris-pieces] ignoring {}={:?}, using text",
                    FORMAT_ENV, v
                );
                DumpFormat::Text
            }),
        };
        Self { kind: None, format }
    }

    /// Apply command line arguments (program name excluded) on top of `self`.
    pub fn with_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        if args.first().map(String::as_str) == Some("dump") {
            i = 1;
        }
        while i < args.len() {
            match args[i].as_str() {
                "--kind" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("dump: missing value for --kind"))?;
                    let kind = PieceKind::from_str(v)
                        .ok_or_else(|| anyhow!("dump: invalid --kind value: {}", v))?;
                    self.kind = Some(kind);
                }
                "--format" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("dump: missing value for --format"))?;
                    self.format = DumpFormat::from_str(v)
                        .ok_or_else(|| anyhow!("dump: invalid --format value: {}", v))?;
                }
                other => {
                    return Err(anyhow!("dump: unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(self)
    }
}

#[derive(Debug, Serialize)]
struct PieceDump<'a> {
    kind: Option<&'static str>,
    cycle_len: usize,
    rotations: Vec<&'a PieceShape>,
}

fn selected<'a>(set: &'a PieceSet, kind: Option<PieceKind>) -> Result<Vec<PieceDump<'a>>> {
    let seeds = match kind {
        Some(kind) => vec![set
            .get(kind)
            .ok_or_else(|| anyhow!("dump: no piece of kind {}", kind.as_str()))?],
        None => set.pieces(),
    };
    Ok(seeds
        .into_iter()
        .map(|seed| PieceDump {
            kind: seed.kind().map(|k| k.as_str()),
            cycle_len: seed.cycle_len(),
            rotations: seed.rotations().map(|p| p.shape()).collect(),
        })
        .collect())
}

/// Text dump: a header per piece, then each rotation's metrics and grid.
pub fn render_text(set: &PieceSet, kind: Option<PieceKind>) -> Result<String> {
    let mut out = String::new();
    for piece in selected(set, kind)? {
        writeln!(
            out,
            "piece {} ({} {})",
            piece.kind.unwrap_or("?"),
            piece.cycle_len,
            if piece.cycle_len == 1 { "rotation" } else { "rotations" }
        )?;
        for (index, shape) in piece.rotations.iter().enumerate() {
            writeln!(
                out,
                "  rotation {}: width {}, height {}, skirt {:?}",
                index,
                shape.width(),
                shape.height(),
                shape.skirt()
            )?;
            for line in shape.to_string().lines() {
                writeln!(out, "    {}", line)?;
            }
        }
    }
    Ok(out)
}

/// JSON dump: an array of `{kind, cycle_len, rotations}` objects.
pub fn render_json(set: &PieceSet, kind: Option<PieceKind>) -> Result<String> {
    let mut out = serde_json::to_string_pretty(&selected(set, kind)?)?;
    out.push('\n');
    Ok(out)
}

pub fn render(set: &PieceSet, config: &DumpConfig) -> Result<String> {
    match config.format {
        DumpFormat::Text => render_text(set, config.kind),
        DumpFormat::Json => render_json(set, config.kind),
    }
}
