// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Psychic Poker CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::PathBuf,
};

pub mod sample;
pub mod terminal;

#[derive(Debug, Parser)]
#[clap(about = "Finds the best poker hand from a hand and the top cards of a deck.")]
struct Cli {
    /// Evaluate ten cards and exit, the first five are the hand.
    #[clap(long, short, conflicts_with_all = ["file", "sample"])]
    cards: Option<String>,
    /// Evaluate the deals in a file, one deal per line.
    #[clap(long, short, conflicts_with = "sample")]
    file: Option<PathBuf>,
    /// Evaluate this many random deals per task and print the distribution.
    #[clap(long, short, value_parser = clap::value_parser!(u32).range(1..))]
    sample: Option<u32>,
    /// Number of sampling tasks.
    #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=64))]
    tasks: u16,
    /// The interactive prompt.
    #[clap(long, default_value = "Cards: ")]
    prompt: String,
    /// Disable colored output.
    #[clap(long)]
    no_color: bool,
    /// Logging verbosity, repeat for more details.
    #[clap(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// What the CLI should do.
#[derive(Debug)]
enum Mode {
    /// Read deals from stdin until closed.
    Interactive,
    /// Evaluate a single deal.
    Single(String),
    /// Evaluate all deals in a file.
    Batch(PathBuf),
    /// Evaluate random deals.
    Sample {
        tasks: usize,
        samples_per_task: usize,
    },
}

/// The CLI configuration.
#[derive(Debug)]
struct Config {
    mode: Mode,
    options: terminal::Options,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let mode = match (cli.cards, cli.file, cli.sample) {
            (Some(cards), _, _) => Mode::Single(cards),
            (_, Some(path), _) => Mode::Batch(path),
            (_, _, Some(samples)) => Mode::Sample {
                tasks: cli.tasks as usize,
                samples_per_task: samples as usize,
            },
            _ => Mode::Interactive,
        };

        Config {
            mode,
            options: terminal::Options {
                prompt: cli.prompt,
                color: !cli.no_color,
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    run(Config::from(cli))
}

fn run(config: Config) -> Result<()> {
    let mut stdout = io::stdout().lock();

    match config.mode {
        Mode::Interactive => {
            info!("Reading deals from stdin");
            terminal::run(io::stdin().lock(), &mut stdout, &config.options)
        }
        Mode::Single(cards) => {
            let res = terminal::eval_line(&cards, config.options.color)?;
            writeln!(stdout, "{res}")?;
            Ok(())
        }
        Mode::Batch(path) => {
            info!("Reading deals from {}", path.display());
            let file =
                File::open(&path).with_context(|| format!("Cannot open {}", path.display()))?;
            terminal::run_batch(BufReader::new(file), &mut stdout, &config.options)?;
            Ok(())
        }
        Mode::Sample {
            tasks,
            samples_per_task,
        } => sample::run(&mut stdout, tasks, samples_per_task, config.options.color),
    }
}
