//! Chess card deck generator.
//!
//! Renders the accepted back ranks four to a card into a LaTeX template,
//! one `.tex` file per card.

mod logging;

use anyhow::{Context, Result};
use chess_deck_core::arrangement::sample;
use chess_deck_core::deck::BATCH_SIZE;
use chess_deck_core::{
    accepted_set, render_deck, Arrangement, BatchOffsets, BishopRule, DeckConfig, Template,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "chess-deck",
    version,
    about = "Render shuffled back-rank chess cards into a LaTeX template"
)]
struct Cli {
    /// Log debug output (per-file writes).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write one card file per batch of four accepted back ranks.
    Render {
        /// Card template containing a `\def\wholeCard` line.
        #[arg(short, long, default_value = "chess_card.tex")]
        template: PathBuf,
        /// Output directory (created if missing).
        #[arg(short, long, default_value = "deckTex")]
        out_dir: PathBuf,
        /// Number of cards. Defaults to every complete card.
        #[arg(short, long)]
        batches: Option<usize>,
        #[arg(long, value_enum, default_value_t = BishopArg::EvenSum)]
        bishops: BishopArg,
        #[arg(long, value_enum, default_value_t = OffsetsArg::Disjoint)]
        offsets: OffsetsArg,
    },
    /// Print the accepted back ranks in deck order.
    List {
        #[arg(long, value_enum, default_value_t = BishopArg::EvenSum)]
        bishops: BishopArg,
        /// Emit JSON instead of plain lines.
        #[arg(long)]
        json: bool,
        /// Include the Chess960 start FEN for each rank.
        #[arg(long)]
        fen: bool,
    },
    /// Print one random accepted back rank.
    Sample {
        #[arg(long, value_enum, default_value_t = BishopArg::EvenSum)]
        bishops: BishopArg,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check that a template has a substitution line.
    Check {
        #[arg(short, long, default_value = "chess_card.tex")]
        template: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum BishopArg {
    /// Bishop square indices sum to an even number.
    EvenSum,
    /// Bishops on squares of different shades.
    OppositeColors,
}

#[derive(Clone, Copy, ValueEnum)]
enum OffsetsArg {
    /// Card b takes accepted ranks 4b..4b+4.
    Disjoint,
    /// Card b takes accepted ranks b..b+4, as the original deck did.
    Reference,
}

impl From<OffsetsArg> for BatchOffsets {
    fn from(arg: OffsetsArg) -> Self {
        match arg {
            OffsetsArg::Disjoint => BatchOffsets::Disjoint,
            OffsetsArg::Reference => BatchOffsets::Reference,
        }
    }
}

impl From<BishopArg> for BishopRule {
    fn from(arg: BishopArg) -> Self {
        match arg {
            BishopArg::EvenSum => BishopRule::EvenSum,
            BishopArg::OppositeColors => BishopRule::OppositeColors,
        }
    }
}

#[derive(Serialize)]
struct ListedRank {
    index: usize,
    card: usize,
    arrangement: Arrangement,
    #[serde(skip_serializing_if = "Option::is_none")]
    fen: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(cli.command) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Render {
            template,
            out_dir,
            batches,
            bishops,
            offsets,
        } => cmd_render(DeckConfig {
            template,
            out_dir,
            batches,
            bishops: bishops.into(),
            offsets: offsets.into(),
            ..DeckConfig::default()
        }),
        Command::List { bishops, json, fen } => cmd_list(bishops.into(), json, fen),
        Command::Sample { bishops, seed } => cmd_sample(bishops.into(), seed),
        Command::Check { template } => cmd_check(template),
    }
}

fn cmd_render(config: DeckConfig) -> Result<()> {
    let summary = render_deck(&config)
        .with_context(|| format!("render deck from {}", config.template.display()))?;
    println!(
        "[OK] Wrote {} card(s) to {}",
        summary.files_written,
        config.out_dir.display()
    );
    Ok(())
}

fn cmd_list(rule: BishopRule, json: bool, with_fen: bool) -> Result<()> {
    let accepted = accepted_set(rule)?;

    let mut ranks = Vec::with_capacity(accepted.len());
    for (index, arrangement) in accepted.into_iter().enumerate() {
        let fen = if with_fen {
            Some(arrangement.to_fen()?)
        } else {
            None
        };
        ranks.push(ListedRank {
            index,
            card: index / BATCH_SIZE,
            arrangement,
            fen,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&ranks)?);
        return Ok(());
    }

    for rank in &ranks {
        match &rank.fen {
            Some(fen) => println!("{:4} {} {}", rank.index, rank.arrangement, fen),
            None => println!("{:4} {}", rank.index, rank.arrangement),
        }
    }
    Ok(())
}

fn cmd_sample(rule: BishopRule, seed: Option<u64>) -> Result<()> {
    let accepted = accepted_set(rule)?;
    let picked = sample(&accepted, seed).context("no accepted back ranks to sample")?;
    println!("{}", picked);
    println!("{}", picked.to_fen()?);
    Ok(())
}

fn cmd_check(path: PathBuf) -> Result<()> {
    let text =
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let line = Template::validate(&text).with_context(|| format!("check {}", path.display()))?;
    println!(
        "[OK] {}: card definition on line {}",
        path.display(),
        line + 1
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_defaults() {
        let cli = Cli::try_parse_from(["chess-deck", "render"]).unwrap();
        match cli.command {
            Command::Render {
                template,
                out_dir,
                batches,
                bishops,
                offsets,
            } => {
                assert_eq!(template, PathBuf::from("chess_card.tex"));
                assert_eq!(out_dir, PathBuf::from("deckTex"));
                assert_eq!(batches, None);
                assert_eq!(BishopRule::from(bishops), BishopRule::EvenSum);
                assert_eq!(BatchOffsets::from(offsets), BatchOffsets::Disjoint);
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_bishop_rule_flag() {
        let cli = Cli::try_parse_from([
            "chess-deck",
            "render",
            "--batches",
            "240",
            "--bishops",
            "opposite-colors",
            "--offsets",
            "reference",
        ])
        .unwrap();
        match cli.command {
            Command::Render {
                batches,
                bishops,
                offsets,
                ..
            } => {
                assert_eq!(batches, Some(240));
                assert_eq!(BishopRule::from(bishops), BishopRule::OppositeColors);
                assert_eq!(BatchOffsets::from(offsets), BatchOffsets::Reference);
            }
            _ => panic!("expected render"),
        }
    }
}
