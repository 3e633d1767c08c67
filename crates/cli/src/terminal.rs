// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::style::Stylize;
use log::{info, warn};
use std::io::{BufRead, Write};

use psychic_eval::{Card, Deal, HandCategory, ParseError, best_deal};

/// Terminal output options.
#[derive(Debug, Clone)]
pub struct Options {
    /// The text shown when waiting for cards.
    pub prompt: String,
    /// Print the category with colors.
    pub color: bool,
}

/// Formats the evaluation of a deal.
pub fn report(deal: &Deal, category: HandCategory, color: bool) -> String {
    let category = if color {
        category.label().bold().green().to_string()
    } else {
        category.label().to_string()
    };

    format!(
        "Hand: {} Deck: {} Best hand: {category}",
        join(&deal.hand),
        join(&deal.deck)
    )
}

fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses and evaluates one line of cards.
pub fn eval_line(line: &str, color: bool) -> Result<String, ParseError> {
    let deal = line.parse::<Deal>()?;
    Ok(report(&deal, best_deal(&deal), color))
}

/// Runs the interactive loop until the input is closed.
///
/// Invalid lines print the error and the loop keeps going.
pub fn run<R: BufRead, W: Write>(mut input: R, w: &mut W, opts: &Options) -> Result<()> {
    let mut line = String::new();
    loop {
        write!(w, "{}", opts.prompt)?;
        w.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(w)?;
            break;
        }

        match eval_line(&line, opts.color) {
            Ok(res) => writeln!(w, "{res}")?,
            Err(e) => {
                let msg = e.to_string();
                if opts.color {
                    writeln!(w, "{}", msg.as_str().red())?;
                } else {
                    writeln!(w, "{msg}")?;
                }
            }
        }

        writeln!(w)?;
    }

    Ok(())
}

/// Batch evaluation counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    /// Number of evaluated deals.
    pub evaluated: usize,
    /// Number of rejected lines.
    pub rejected: usize,
}

/// Evaluates every non empty line, one output line for each valid deal.
pub fn run_batch<R, W>(input: R, w: &mut W, opts: &Options) -> Result<BatchStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = BatchStats::default();

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match eval_line(&line, opts.color) {
            Ok(res) => {
                writeln!(w, "{res}")?;
                stats.evaluated += 1;
            }
            Err(e) => {
                warn!("Line {}: {e}", idx + 1);
                stats.rejected += 1;
            }
        }
    }

    w.flush()?;
    info!(
        "Evaluated {} deals, rejected {} lines",
        stats.evaluated, stats.rejected
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn options() -> Options {
        Options {
            prompt: "Cards: ".to_string(),
            color: false,
        }
    }

    #[test]
    fn eval_line_report() {
        let res = eval_line("2H 2S 3H 3S 3C 2D 3D 6C 9C TH", false).unwrap();
        assert_eq!(
            res,
            "Hand: 2H 2S 3H 3S 3C Deck: 2D 3D 6C 9C TH Best hand: four-of-a-kind"
        );

        let err = eval_line("2H 2S", false).unwrap_err();
        assert_eq!(err, ParseError::CardCount(2));
    }

    #[test]
    fn eval_line_color() {
        let res = eval_line("2H AD 5H AC 7H AH 6H 9H 4H 3C", true).unwrap();
        assert!(res.starts_with("Hand: 2H AD 5H AC 7H Deck: AH 6H 9H 4H 3C Best hand: "));
        assert!(res.contains("flush"));
    }

    #[test]
    fn interactive_loop() {
        let input = Cursor::new("AC 2D 6C 3S KD 5S 4D KS AS 4C\nAC 2D\n");
        let mut output = Vec::new();
        run(input, &mut output, &options()).unwrap();

        let output = String::from_utf8(output).unwrap();
        let expected = "Cards: Hand: AC 2D 6C 3S KD Deck: 5S 4D KS AS 4C Best hand: straight\n\
                        \n\
                        Cards: Ten cards expected\n\
                        \n\
                        Cards: \n";
        assert_eq!(output, expected);
    }

    #[test]
    fn interactive_empty_input() {
        let mut output = Vec::new();
        run(Cursor::new(""), &mut output, &options()).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Cards: \n");
    }

    #[test]
    fn batch() {
        let input = Cursor::new(
            "TH JH QC QD QS QH KH AH 2S 6S\n\
             \n\
             3D 5S 2H QD TD 6S KH 9H AD 1H\n\
             3D 5S 2H QD TD 6S KH 9H AD QH\n",
        );

        let mut output = Vec::new();
        let stats = run_batch(input, &mut output, &options()).unwrap();
        assert_eq!(
            stats,
            BatchStats {
                evaluated: 2,
                rejected: 1
            }
        );

        let output = String::from_utf8(output).unwrap();
        let lines = output.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("Best hand: straight-flush"));
        assert!(lines[1].ends_with("Best hand: highest-card"));
    }
}
